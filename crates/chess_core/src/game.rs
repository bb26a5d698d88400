//! Game state machine: turn order, selection, history and terminal status.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    board::Board,
    error::MoveError,
    movegen::legal_targets,
    notation::notation,
    types::*,
};

/// Game status. There is no draw: the only ways out are king capture,
/// resignation, or a side running out of moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    InProgress,
    /// The given color captured the opposing king (or the opponent had no moves)
    Won(Color),
    /// The given color resigned
    Resigned(Color),
}

impl Status {
    pub fn is_over(self) -> bool {
        self != Status::InProgress
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            Status::InProgress => None,
            Status::Won(c) => Some(c),
            Status::Resigned(c) => Some(c.other()),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::InProgress => write!(f, "in progress"),
            Status::Won(c) => write!(f, "{c} wins"),
            Status::Resigned(c) => write!(f, "{c} resigned, {} wins", c.other()),
        }
    }
}

/// A recorded move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub mv: Move,
    /// Side that made the move
    pub color: Color,
    pub notation: String,
    /// Kind of the piece that stood on the destination, if any
    pub captured: Option<PieceKind>,
}

/// Outcome of a click on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Nothing happened (empty square or opponent piece while idle)
    Ignored,
    /// An own piece was selected; these are its targets
    Selected(BTreeSet<Square>),
    /// The selected square was clicked again
    Deselected,
    /// The selected piece moved
    Moved(MoveRecord),
}

/// Represents the current state of a game
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Color,
    selected: Option<Square>,
    targets: BTreeSet<Square>,
    history: Vec<MoveRecord>,
    status: Status,
    /// Bumped on reset and on every terminal transition
    epoch: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Color::White)
    }

    /// Start from an arbitrary position with `active` to move.
    pub fn from_board(board: Board, active: Color) -> Self {
        Self {
            board,
            active,
            selected: None,
            targets: BTreeSet::new(),
            history: Vec::new(),
            status: Status::InProgress,
            epoch: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_color(&self) -> Color {
        self.active
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Targets of the current selection (empty while idle).
    pub fn selected_targets(&self) -> &BTreeSet<Square> {
        &self.targets
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    /// Read-only query used for highlighting. Does not touch the selection.
    pub fn legal_targets(&self, sq: Square) -> BTreeSet<Square> {
        legal_targets(&self.board, sq)
    }

    /// Handle a click on `sq`.
    ///
    /// While idle, clicking an own piece selects it and anything else is
    /// ignored. While a piece is selected, clicking it again deselects,
    /// clicking a target moves, and clicking anywhere else drops the
    /// selection and reports `IllegalMove`.
    pub fn select(&mut self, sq: Square) -> Result<Selection, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        let Some(from) = self.selected else {
            return Ok(match self.board.piece_at(sq) {
                Some(pc) if pc.color == self.active => {
                    self.targets = legal_targets(&self.board, sq);
                    self.selected = Some(sq);
                    Selection::Selected(self.targets.clone())
                }
                _ => Selection::Ignored,
            });
        };

        if from == sq {
            self.clear_selection();
            return Ok(Selection::Deselected);
        }

        if !self.targets.contains(&sq) {
            self.clear_selection();
            return Err(MoveError::IllegalMove { from, to: sq });
        }

        self.apply(from, sq).map(Selection::Moved)
    }

    /// Validate and play `from -> to` for the side on move.
    pub fn apply(&mut self, from: Square, to: Square) -> Result<MoveRecord, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        // any rejection drops the current selection
        let piece = self.validate(from, to).inspect_err(|_| self.clear_selection())?;

        let mv = Move::new(from, to);
        let record = MoveRecord {
            mv,
            color: self.active,
            notation: notation(&self.board, mv),
            captured: self.board.piece_at(to).map(|pc| pc.kind),
        };

        self.board.set_piece(to, Some(piece));
        self.board.clear(from);
        self.history.push(record.clone());
        self.clear_selection();
        debug!(color = %record.color, notation = %record.notation, "move applied");

        self.check_game_end();
        if !self.status.is_over() {
            self.active = self.active.other();
        }

        Ok(record)
    }

    /// `color` gives up. Rejected once the game is over.
    pub fn resign(&mut self, color: Color) -> Result<Status, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        self.finish(Status::Resigned(color));
        Ok(self.status)
    }

    /// `color` has no moves at all; the other side wins.
    pub fn declare_no_moves(&mut self, color: Color) -> Result<Status, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        self.finish(Status::Won(color.other()));
        Ok(self.status)
    }

    /// Back to the initial position. Anything scheduled against the old
    /// epoch becomes stale.
    pub fn reset(&mut self) {
        let epoch = self.epoch + 1;
        *self = Self::new();
        self.epoch = epoch;
        debug!(epoch, "game reset");
    }

    fn validate(&self, from: Square, to: Square) -> Result<Piece, MoveError> {
        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::EmptySquare(from))?;
        if piece.color != self.active {
            return Err(MoveError::NotYourPiece {
                square: from,
                owner: piece.color,
                active: self.active,
            });
        }
        if !legal_targets(&self.board, from).contains(&to) {
            return Err(MoveError::IllegalMove { from, to });
        }
        Ok(piece)
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.targets.clear();
    }

    /// A missing king ends the game; the board is left as it is.
    fn check_game_end(&mut self) {
        for color in [Color::White, Color::Black] {
            if !self.board.has_king(color) {
                self.finish(Status::Won(color.other()));
                return;
            }
        }
    }

    fn finish(&mut self, status: Status) {
        self.clear_selection();
        self.status = status;
        self.epoch += 1;
        info!(%status, moves = self.history.len(), "game over");
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
