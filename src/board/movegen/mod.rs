//! Pseudo-legal move generation.
//!
//! Each piece kind maps through a fixed capability table to one of four
//! movement algorithms: the pawn advance/capture rule, the two leaper offset
//! enumerations (knight, king), and the slider ray walk (bishop, rook, queen).
//! Generated moves respect occupancy and board bounds but not check safety.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::state::Board;
use super::types::{Move, MoveList, Piece, Square};

/// One movement rule: fills `out` with the candidate moves for `piece`
/// standing on `from`, given current occupancy.
type MoveRule = fn(&Board, Square, Piece, &mut MoveList);

/// Capability table indexed by [`PieceKind::index`](super::types::PieceKind).
const MOVE_RULES: [MoveRule; 6] = [
    Board::pawn_moves,
    Board::knight_moves,
    Board::bishop_moves,
    Board::rook_moves,
    Board::queen_moves,
    Board::king_moves,
];

impl Board {
    /// Dispatch to the movement rule for `piece`'s kind and return the fresh
    /// candidate list.
    pub(crate) fn piece_moves(&self, from: Square, piece: Piece) -> MoveList {
        let mut moves = MoveList::new();
        MOVE_RULES[piece.kind().index()](self, from, piece, &mut moves);
        moves
    }

    /// Shared leaper rule: each offset is a candidate iff it lands on the
    /// board and the target is empty or enemy-occupied.
    fn leaper_moves(
        &self,
        from: Square,
        piece: Piece,
        offsets: &[(i32, i32)],
        out: &mut MoveList,
    ) {
        for &(d_row, d_col) in offsets {
            if let Some(to) = from.offset(d_row, d_col) {
                if self.is_empty_or_enemy(to, piece.color()) {
                    out.push(Move::new(from, to));
                }
            }
        }
    }
}
