//! Tiered Discount runner
//!
//! Reads a function input document from a file or standard input, evaluates it, and writes the
//! function result document to standard output.

use std::{io, process::ExitCode};

use tracing::error;

use crate::config::Config;

mod app;
mod config;
mod error;
mod logging;

fn main() -> ExitCode {
    // Load configuration from .env and CLI arguments
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            // Help and version requests are reported through the error path too
            _ = e.print();

            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    if let Err(e) = logging::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for logging errors"
        )]
        {
            eprintln!("Logging error: {e}");
        }

        return ExitCode::FAILURE;
    }

    match app::run(&config, io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "tiered discount evaluation failed");

            ExitCode::FAILURE
        }
    }
}
