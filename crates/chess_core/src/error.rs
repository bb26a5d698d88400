//! Error types for board parsing and move handling.
//!
//! None of these are fatal: every variant is a signal the caller is expected
//! to present (or ignore) and then carry on with the unchanged game.

use crate::types::{Color, Square};

/// Reasons a move request was rejected. The board is never mutated when one
/// of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The game already reached a terminal status
    #[error("game is already over")]
    GameOver,

    /// No piece stands on the origin square
    #[error("no piece on {0}")]
    EmptySquare(Square),

    /// The origin piece belongs to the side not on move
    #[error("piece on {square} belongs to {owner}, but {active} is to move")]
    NotYourPiece {
        square: Square,
        owner: Color,
        active: Color,
    },

    /// The destination is not in the generated target set
    #[error("illegal move {from} -> {to}")]
    IllegalMove { from: Square, to: Square },

    /// Input arrived while the computer opponent owns the turn
    #[error("it is not your turn")]
    NotYourTurn,
}

/// Errors produced while reading positions or square names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("invalid square name: {0:?}")]
    BadSquare(String),

    #[error("expected 8 ranks in placement, found {0}")]
    RankCount(usize),

    #[error("rank {rank} describes {files} files instead of 8")]
    FileCount { rank: usize, files: usize },

    #[error("invalid piece character {0:?}")]
    BadPiece(char),
}
