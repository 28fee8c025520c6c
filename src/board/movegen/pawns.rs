use super::super::state::Board;
use super::super::types::{Move, MoveList, Piece, Square};

impl Board {
    /// Pawn rule: a forward run of one square (two while unmoved), each step
    /// requiring an empty target and the run stopping at the first blocked or
    /// off-board square; the two forward diagonals only as captures.
    pub(crate) fn pawn_moves(&self, from: Square, piece: Piece, out: &mut MoveList) {
        let dir = piece.forward();
        let steps = if piece.has_moved() { 1 } else { 2 };

        // Advancing never captures, so the scan breaks on any occupant.
        let mut current = from;
        for _ in 0..steps {
            match current.offset(dir, 0) {
                Some(next) if self.is_empty(next) => {
                    out.push(Move::new(from, next));
                    current = next;
                }
                _ => break,
            }
        }

        for d_col in [-1, 1] {
            if let Some(diagonal) = from.offset(dir, d_col) {
                if self.has_enemy(diagonal, piece.color()) {
                    out.push(Move::new(from, diagonal));
                }
            }
        }
    }
}
