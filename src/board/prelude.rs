//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chessboard::board::prelude::*;
//! ```

pub use super::{Board, BoardBuilder, BoardError, Color, Move, MoveList, Piece, PieceKind, Square};
