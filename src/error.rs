//! Error types for the tictac crate

use thiserror::Error;

/// Main error type for the tictac crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("position {index} is out of bounds (must be 0-8)")]
    OutOfBounds { index: usize },

    #[error("position {index} is already occupied")]
    Occupied { index: usize },

    #[error("game already over")]
    GameOver,

    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("board must have 9 cells, got {got} in '{context}'")]
    InvalidBoardLength { got: usize, context: String },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (X moves first)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("failed to read input: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
