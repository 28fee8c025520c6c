//! Chess board representation and pseudo-legal move logic.
//!
//! A mailbox board (8x8 grid of optional pieces) that generates each piece's
//! candidate moves from current occupancy, validates a chosen move by
//! membership in that candidate list, and applies it by mutating the grid.
//! Moves are pseudo-legal: geometry and occupancy are respected, check safety
//! is not.
//!
//! # Example
//! ```
//! use chessboard::board::Board;
//!
//! let mut board = Board::new();
//! // The knight on b1 has two opening moves.
//! let moves = board.generate_moves(7, 1).unwrap();
//! assert_eq!(moves.len(), 2);
//! board.apply_move(moves[0]).unwrap();
//! ```

mod builder;
mod error;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::BoardError;
pub use state::Board;
pub use types::{in_range, Color, Move, MoveList, Piece, PieceKind, Square};
