use super::super::state::Board;
use super::super::types::{Move, MoveList, Piece, Square};

/// Unit directions for rook rays.
pub(crate) const ROOK_DIRS: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Unit directions for bishop rays.
pub(crate) const BISHOP_DIRS: [(i32, i32); 4] = [(-1, 1), (-1, -1), (1, 1), (1, -1)];

/// Unit directions for queen rays (all eight).
pub(crate) const QUEEN_DIRS: [(i32, i32); 8] = [
    (-1, 1),
    (-1, -1),
    (1, 1),
    (1, -1),
    (-1, 0),
    (0, 1),
    (1, 0),
    (0, -1),
];

impl Board {
    pub(crate) fn bishop_moves(&self, from: Square, piece: Piece, out: &mut MoveList) {
        self.slider_moves(from, piece, &BISHOP_DIRS, out);
    }

    pub(crate) fn rook_moves(&self, from: Square, piece: Piece, out: &mut MoveList) {
        self.slider_moves(from, piece, &ROOK_DIRS, out);
    }

    pub(crate) fn queen_moves(&self, from: Square, piece: Piece, out: &mut MoveList) {
        self.slider_moves(from, piece, &QUEEN_DIRS, out);
    }

    /// Slider rule: walk each ray one step at a time. Empty squares extend
    /// the ray, an enemy occupant is included and ends it, a friendly
    /// occupant ends it without being included.
    fn slider_moves(
        &self,
        from: Square,
        piece: Piece,
        directions: &[(i32, i32)],
        out: &mut MoveList,
    ) {
        for &(d_row, d_col) in directions {
            let mut current = from;
            while let Some(next) = current.offset(d_row, d_col) {
                match self.occupant(next) {
                    None => {
                        out.push(Move::new(from, next));
                        current = next;
                    }
                    Some(occupant) => {
                        if occupant.color() != piece.color() {
                            out.push(Move::new(from, next));
                        }
                        break;
                    }
                }
            }
        }
    }
}
