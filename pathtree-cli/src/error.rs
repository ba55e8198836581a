//! CLI error types.

use thiserror::Error;

/// Errors surfaced to the user with a nonzero exit.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The input was not valid JSON for the selected format.
    #[error("invalid input: {0}")]
    Decode(#[from] serde_json::Error),

    /// The tree build itself failed.
    #[error(transparent)]
    Build(#[from] pathtree::BuildError),
}
