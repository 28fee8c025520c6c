use super::super::state::Board;
use super::super::types::{MoveList, Piece, Square};

/// The eight adjacent squares.
pub(crate) const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

impl Board {
    /// King rule: one step in any direction, no castling and no check-safety
    /// filtering.
    pub(crate) fn king_moves(&self, from: Square, piece: Piece, out: &mut MoveList) {
        self.leaper_moves(from, piece, &KING_OFFSETS, out);
    }
}
