//! Simplified algebraic notation.
//!
//! Pawn moves render as the destination (`e4`) or `<file>x<dest>` when
//! capturing (`exd5`). Other pieces render as their letter, an optional `x`
//! and the destination (`Nf3`, `Qxh7`). There is no disambiguation and no
//! check suffix.

use crate::{board::Board, types::*};

/// Notation for `mv`, computed against the board *before* the move is made.
/// Returns the bare coordinate pair when the origin is empty.
pub fn notation(board: &Board, mv: Move) -> String {
    let Some(piece) = board.piece_at(mv.from) else {
        return mv.to_string();
    };
    let is_capture = board.piece_at(mv.to).is_some();

    let mut san = String::with_capacity(5);
    match piece.kind {
        PieceKind::Pawn => {
            if is_capture {
                san.push(mv.from.file_char());
                san.push('x');
            }
        }
        kind => {
            san.push(kind.letter());
            if is_capture {
                san.push('x');
            }
        }
    }
    san.push_str(&mv.to.name());
    san
}
