//! Error types for the engine.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid dimensions: {width}x{height} (width and height must be positive)")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("Out of bounds: cell ({column}, {row}) is outside a {width}x{height} board")]
    OutOfBounds {
        column: usize,
        row: usize,
        width: usize,
        height: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
