use crate::error::BoardParseError;
use crate::types::*;

/// 8x8 mailbox indexed `[row][col]`. An empty cell is `None`, so a cell can
/// never carry a kind without a color or the other way round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// The standard initial position.
    pub fn standard() -> Self {
        let mut b = Board::empty();
        for color in [Color::White, Color::Black] {
            for col in 0..8 {
                b.cells[color.pawn_row() as usize][col] = Some(Piece::new(color, PieceKind::Pawn));
            }
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                b.cells[color.back_row() as usize][col] = Some(Piece::new(color, kind));
            }
        }
        b
    }

    /// Parses the piece-placement field of a FEN string. The first rank
    /// listed (rank 8) becomes row 0. Trailing FEN fields are ignored.
    pub fn from_placement(fen: &str) -> Result<Self, BoardParseError> {
        let placement = fen.split_whitespace().next().unwrap_or("");
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(BoardParseError::RankCount(ranks.len()));
        }

        let mut board = Board::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as usize;
                } else {
                    let kind = PieceKind::from_letter(ch).ok_or(BoardParseError::BadPiece(ch))?;
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if col < 8 {
                        board.cells[row][col] = Some(Piece::new(color, kind));
                    }
                    col += 1;
                }
                if col > 8 {
                    return Err(BoardParseError::FileCount {
                        rank: 8 - row,
                        files: col,
                    });
                }
            }
            if col != 8 {
                return Err(BoardParseError::FileCount {
                    rank: 8 - row,
                    files: col,
                });
            }
        }
        Ok(board)
    }

    /// Renders the board as a FEN piece-placement field.
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for (row, cells) in self.cells.iter().enumerate() {
            let mut gap = 0;
            for cell in cells {
                match cell {
                    None => gap += 1,
                    Some(pc) => {
                        if gap > 0 {
                            out.push(char::from(b'0' + gap));
                            gap = 0;
                        }
                        out.push(pc.fen_char());
                    }
                }
            }
            if gap > 0 {
                out.push(char::from(b'0' + gap));
            }
            if row < 7 {
                out.push('/');
            }
        }
        out
    }

    /// `None` for empty squares and for coordinates off the board.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells
            .get(sq.row as usize)
            .and_then(|row| row.get(sq.col as usize))
            .copied()
            .flatten()
    }

    /// Off-board coordinates are ignored.
    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        if let Some(cell) = self
            .cells
            .get_mut(sq.row as usize)
            .and_then(|row| row.get_mut(sq.col as usize))
        {
            *cell = pc;
        }
    }

    pub fn clear(&mut self, sq: Square) {
        self.set_piece(sq, None);
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Squares holding `color`'s pieces, in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(pc) if pc.color == color => Some((sq, pc)),
            _ => None,
        })
    }

    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.pieces(color).filter(|(_, pc)| pc.kind == kind).count()
    }

    pub fn has_king(&self, color: Color) -> bool {
        self.pieces(color).any(|(_, pc)| pc.kind == PieceKind::King)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
