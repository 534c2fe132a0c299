//! Runner configuration module

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::{logging::LoggingConfig, metafield::MetafieldConfig};

pub(crate) mod logging;
pub(crate) mod metafield;

/// Tiered discount function runner configuration
#[derive(Debug, Parser)]
#[command(
    name = "tiered-discount",
    about = "Evaluate a tiered product discount against a cart input document",
    long_about = None
)]
pub struct Config {
    /// Input document path; `-` or absent reads standard input
    #[arg(env = "TIERED_DISCOUNT_INPUT")]
    pub input: Option<PathBuf>,

    /// Pretty-print the output document
    #[arg(long, env = "TIERED_DISCOUNT_PRETTY", default_value_t = false)]
    pub pretty: bool,

    /// Configuration metafield location.
    #[command(flatten)]
    pub metafield: MetafieldConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Input path, or `None` for standard input.
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }
}
