//! Errors surfaced by the command-line driver.
//!
//! Scanning itself cannot fail; everything here is I/O or usage.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a driver command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read '{}': {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read input: {0}")]
    Input(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),

    #[error("{0}")]
    Usage(String),
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// Every driver failure exits with 1.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Returns `true` if the usage text should follow the message.
    pub fn is_usage(&self) -> bool {
        matches!(self, CliError::Usage(_))
    }
}
