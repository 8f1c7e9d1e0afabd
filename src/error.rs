//! Error types for caseconv
//!
//! Conversion itself never fails; the only failures come from resolving input.

use thiserror::Error;

/// Main error type for caseconv
#[derive(Error, Debug)]
pub enum CaseconvError {
    /// Nothing on the command line and stdin is an interactive terminal
    #[error("no input provided. Please provide text as an argument or pipe it via stdin")]
    NoInput,

    /// Reading piped standard input failed
    #[error("failed to read standard input")]
    Stdin {
        #[source]
        source: std::io::Error,
    },
}

impl CaseconvError {
    /// Create a new stdin read error
    pub fn stdin(source: std::io::Error) -> Self {
        Self::Stdin { source }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CaseconvError>;
