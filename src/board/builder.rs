//! Fluent builder for constructing board positions.
//!
//! Allows creating positions piece by piece rather than starting every test
//! from the full initial arrangement.
//!
//! # Example
//! ```
//! use chessboard::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::new(4, 4).unwrap(), Color::White, PieceKind::Rook)
//!     .piece(Square::new(4, 7).unwrap(), Color::Black, PieceKind::Pawn)
//!     .build();
//! ```

use super::state::Board;
use super::types::{Color, Move, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
    last_move: Option<Move>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            last_move: None,
        }
    }

    /// Place an unmoved piece on the board.
    #[must_use]
    pub fn piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.place(square, Piece::new(kind, color))
    }

    /// Place a pre-built piece, e.g. one with its moved flag already set.
    #[must_use]
    pub fn place(mut self, square: Square, piece: Piece) -> Self {
        // Replace any existing piece on this square
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Seed the board's last-move record.
    #[must_use]
    pub const fn last_move(mut self, mv: Move) -> Self {
        self.last_move = Some(mv);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            board.set(square, Some(piece));
        }
        board.last_move = self.last_move;
        board
    }
}
