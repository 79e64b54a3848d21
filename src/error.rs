//! Error types for the stonehenge crate

use thiserror::Error;

use crate::types::Owner;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("unsupported board size {size} (expected 1..=5)")]
    Configuration { size: u8 },

    #[error("invalid move '{letter}': not a legal move in this position")]
    InvalidMove { letter: char },

    #[error("game over with {winner} declared winner but {winner} holds only {captured} of {threshold} required ley-lines")]
    UnreachableState {
        winner: Owner,
        captured: usize,
        threshold: usize,
    },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap an I/O failure with the operation that hit it.
    pub fn io(operation: &str, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.to_string(),
            source,
        }
    }
}
