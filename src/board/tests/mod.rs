//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-kind move generation counts and blocking rules
//! - `apply.rs` - Move validation and application
//! - `edge_cases.rs` - Board-edge and blocked-piece positions
//! - `proptest.rs` - Property-based tests


use super::{Move, Square};

/// Shorthand square constructor for test positions.
pub(crate) fn sq(row: usize, col: usize) -> Square {
    Square::new(row, col).unwrap()
}

/// Shorthand move constructor.
pub(crate) fn mv(from: (usize, usize), to: (usize, usize)) -> Move {
    Move::new(sq(from.0, from.1), sq(to.0, to.1))
}
