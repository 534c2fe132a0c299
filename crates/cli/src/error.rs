//! Runner errors

use std::{io, path::PathBuf};

use thiserror::Error;

use tiered_discount::gate::EvaluationError;

/// Errors that stop the runner with a non-zero exit status.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input document could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path of the input file
        path: PathBuf,
        /// Underlying IO error
        source: io::Error,
    },

    /// Output document could not be written.
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),

    /// Output document could not be serialized to the writer.
    #[error("failed to write output: {0}")]
    Output(#[source] serde_json::Error),

    /// Input document is not the function input shape.
    #[error("invalid input document: {0}")]
    Input(#[from] serde_json::Error),

    /// Input was well-formed but could not be evaluated.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}
