use std::collections::BTreeSet;

use crate::{board::Board, types::*};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

const QUEEN_DIRS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Destination squares for the piece on `from`. Check is never considered.
/// An empty origin yields an empty set.
pub fn legal_targets(board: &Board, from: Square) -> BTreeSet<Square> {
    let mut out = Vec::with_capacity(28);
    if let Some(pc) = board.piece_at(from) {
        targets_into(board, from, pc, &mut out);
    }
    out.into_iter().collect()
}

/// Every `(from, to)` pair available to `color`, flattened in row-major board
/// order and then per-piece generation order.
pub fn moves_for(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    let mut buf = Vec::with_capacity(28);
    for (from, pc) in board.pieces(color) {
        buf.clear();
        targets_into(board, from, pc, &mut buf);
        moves.extend(buf.iter().map(|&to| Move::new(from, to)));
    }
    moves
}

/// Generate targets for `pc` standing on `from` into the provided buffer.
pub fn targets_into(board: &Board, from: Square, pc: Piece, out: &mut Vec<Square>) {
    match pc.kind {
        PieceKind::Pawn => gen_pawn(board, from, pc.color, out),
        PieceKind::Knight => gen_steps(board, from, pc.color, &KNIGHT_DELTAS, out),
        PieceKind::Bishop => gen_slider(board, from, pc.color, &BISHOP_DIRS, out),
        PieceKind::Rook => gen_slider(board, from, pc.color, &ROOK_DIRS, out),
        PieceKind::Queen => gen_slider(board, from, pc.color, &QUEEN_DIRS, out),
        PieceKind::King => gen_steps(board, from, pc.color, &KING_DELTAS, out),
    }
}

fn gen_pawn(board: &Board, from: Square, c: Color, out: &mut Vec<Square>) {
    let dir = c.forward();

    // forward 1
    if let Some(to) = from.offset(dir, 0) {
        if board.is_empty(to) {
            out.push(to);

            // forward 2 from start, both squares empty
            if from.row == c.pawn_row() {
                if let Some(to2) = from.offset(2 * dir, 0) {
                    if board.is_empty(to2) {
                        out.push(to2);
                    }
                }
            }
        }
    }

    // diagonal captures only
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc) {
            if let Some(tpc) = board.piece_at(to) {
                if tpc.color != c {
                    out.push(to);
                }
            }
        }
    }
}

fn gen_steps(board: &Board, from: Square, c: Color, deltas: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc) {
            match board.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => out.push(to),
                _ => {}
            }
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(to) = cur {
            match board.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => {
                    out.push(to);
                    break;
                }
                _ => break,
            }
            cur = to.offset(dr, dc);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
