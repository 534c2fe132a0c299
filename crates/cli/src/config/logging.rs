//! Logging Config
//!
//! Controls the diagnostics the runner writes to stderr while it evaluates a document: which
//! evaluation decisions are shown (`debug` for per-tier outcomes, `warn` for unusable
//! configuration) and whether they are rendered for a terminal or for a log collector.

use clap::Args;

/// Diagnostic output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LogFormat {
    /// One line per event, for reading in a terminal.
    Compact,

    /// One JSON object per event, including the evaluation span.
    Json,
}

/// Diagnostic logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level or filter directive; `debug` shows why each tier was skipped
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Diagnostic format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}
