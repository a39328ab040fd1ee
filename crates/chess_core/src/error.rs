//! Error type shared by the rules engine.

use thiserror::Error;

use crate::types::{Color, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid square: {0:?}")]
    InvalidSquare(String),

    #[error("invalid move text: {0:?}")]
    InvalidMoveText(String),

    #[error("expected exactly one {color:?} king, found {found}")]
    KingCount { color: Color, found: usize },

    #[error("illegal move {from}{to}")]
    IllegalMove { from: Square, to: Square },
}
