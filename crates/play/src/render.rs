//! Text board for the terminal.

use std::collections::BTreeSet;
use std::fmt::Write;

use chess_core::{Board, Square};

/// Renders `board` with White at the bottom unless `black_at_bottom`.
/// Squares in `marks` are shown as `*` when empty and bracketed otherwise.
pub fn board_text(board: &Board, black_at_bottom: bool, marks: &BTreeSet<Square>) -> String {
    let rows: Vec<u8> = if black_at_bottom {
        (0..8).rev().collect()
    } else {
        (0..8).collect()
    };
    let cols: Vec<u8> = if black_at_bottom {
        (0..8).rev().collect()
    } else {
        (0..8).collect()
    };

    let mut out = String::new();
    for &row in &rows {
        let _ = write!(out, "{} ", 8 - row);
        for &col in &cols {
            let Some(sq) = Square::new(row, col) else {
                continue;
            };
            let marked = marks.contains(&sq);
            let cell = match (board.piece_at(sq), marked) {
                (Some(pc), true) => format!("[{}]", pc.fen_char()),
                (Some(pc), false) => format!(" {} ", pc.fen_char()),
                (None, true) => " * ".to_string(),
                (None, false) => " . ".to_string(),
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out.push_str("  ");
    for &col in &cols {
        let _ = write!(out, " {} ", (b'a' + col) as char);
    }
    out.push('\n');
    out
}
