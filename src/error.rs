//! Error types for the Hexapawn engine.

use thiserror::Error;

use crate::core::{Move, Player, Point};

/// Main error type for the crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("point {point} is outside the 3x3 board")]
    OutOfBounds { point: Point },

    #[error("move {mv} is not legal for {player}")]
    IllegalMove { mv: Move, player: Player },

    #[error("invalid coordinate '{input}' (expected a column A-C followed by a row 1-3)")]
    InvalidCoordinate { input: String },

    #[error("invalid move '{input}' (expected two coordinates, e.g. 'A3-A2')")]
    InvalidMove { input: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
