//! Core value types: squares, pieces, and moves.

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveList};
pub use piece::{Color, Piece, PieceKind};
pub use square::{in_range, Square};
