use super::super::state::Board;
use super::super::types::{MoveList, Piece, Square};

/// The eight L-shaped knight jumps.
pub(crate) const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, -1),
    (2, 1),
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
];

impl Board {
    pub(crate) fn knight_moves(&self, from: Square, piece: Piece, out: &mut MoveList) {
        self.leaper_moves(from, piece, &KNIGHT_OFFSETS, out);
    }
}
