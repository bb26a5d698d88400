pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod types;

// Re-export core game logic (not policy-specific)
pub use board::*;
pub use error::*;
pub use game::*;
pub use movegen::*;
pub use notation::notation;
pub use types::*;

// =============================================================================
// MovePolicy trait: implemented by every computer player
// =============================================================================

/// Trait that all computer players must implement.
///
/// The session layer and the self-play harness only see this trait, so
/// policies can be swapped without touching the rules code.
pub trait MovePolicy: Send {
    /// Pick a move for `color` on `board`.
    ///
    /// # Returns
    /// `None` when `color` has no moves at all; the caller treats that as a
    /// win for the other side.
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Move>;

    /// Returns the policy's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
