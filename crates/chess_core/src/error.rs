//! Recoverable errors surfaced to front ends.
//!
//! Broken board invariants are not represented here; those abort with a
//! panic because they mean the caller bypassed move generation.

use std::io;

use thiserror::Error;

use crate::types::{Color, Square};

#[derive(Debug, Error)]
pub enum ChessError {
    #[error("invalid square {0:?}")]
    InvalidSquare(String),

    #[error("invalid board grid: {0}")]
    InvalidGrid(String),

    #[error("no live piece on {0}")]
    EmptySquare(Square),

    #[error("the piece on {square} belongs to {owner}, not {expected}")]
    WrongColor {
        square: Square,
        owner: Color,
        expected: Color,
    },

    #[error("{from} to {to} is not a valid move")]
    IllegalMove { from: Square, to: Square },

    #[error("{0} has already lost its king")]
    GameOver(Color),

    #[error("unsupported input: {0}")]
    Unsupported(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse configuration")]
    ConfigParse(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}
