//! Error types for chess-deck-core

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("template has no line containing the card marker `{marker}`")]
    MarkerNotFound { marker: &'static str },

    #[error(
        "not enough accepted arrangements: {needed} needed from offset {offset}, only {available} available"
    )]
    InsufficientArrangements {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("invalid arrangement: {0}")]
    InvalidArrangement(String),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("FEN error: {0}")]
    Fen(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
