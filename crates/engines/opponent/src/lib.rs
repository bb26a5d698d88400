//! Computer Opponent
//!
//! A heuristic move picker with three strength levels. There is no search:
//! every level looks only at the moves available right now.
//! - Easy: any move, uniformly at random
//! - Medium: a random capture half of the time when one exists
//! - Hard: always the most valuable capture, random otherwise

mod difficulty;

pub use difficulty::Difficulty;

use chess_core::{moves_for, Board, Color, Move, MovePolicy, PieceKind};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::trace;

#[cfg(test)]
mod lib_tests;

/// Value of a piece as a capture target.
pub fn capture_value(kind: PieceKind) -> u32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 100,
    }
}

/// Pick a move for `color` according to `difficulty`.
///
/// Returns `None` when `color` has no moves.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    color: Color,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Move> {
    let moves = moves_for(board, color);
    if moves.is_empty() {
        return None;
    }

    // Generated targets are never own pieces, so any occupant is a capture.
    let mut captures: Vec<(Move, u32)> = moves
        .iter()
        .filter_map(|mv| board.piece_at(mv.to).map(|pc| (*mv, capture_value(pc.kind))))
        .collect();

    let picked = match difficulty {
        Difficulty::Easy => None,
        Difficulty::Medium => {
            if !captures.is_empty() && rng.gen_bool(0.5) {
                captures.choose(rng).map(|(mv, _)| *mv)
            } else {
                None
            }
        }
        Difficulty::Hard => {
            // stable: equal values keep enumeration order
            captures.sort_by(|a, b| b.1.cmp(&a.1));
            captures.first().map(|(mv, _)| *mv)
        }
    };

    let mv = picked.or_else(|| moves.choose(rng).copied());
    trace!(%color, %difficulty, candidates = moves.len(), captures = captures.len(), ?mv, "opponent move");
    mv
}

/// A computer player at a fixed difficulty.
///
/// Owns its random source so it can be seeded for reproducible games.
#[derive(Debug, Clone)]
pub struct Opponent {
    difficulty: Difficulty,
    rng: StdRng,
    name: String,
}

impl Opponent {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, StdRng::from_entropy())
    }

    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(difficulty, StdRng::seed_from_u64(seed))
    }

    fn with_rng(difficulty: Difficulty, rng: StdRng) -> Self {
        Self {
            difficulty,
            rng,
            name: format!("Opponent ({difficulty})"),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl MovePolicy for Opponent {
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        choose_move(board, color, self.difficulty, &mut self.rng)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
