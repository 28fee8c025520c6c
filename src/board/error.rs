//! Error types for board operations.

use std::fmt;

use super::types::{Color, Move, Square};

/// Error type for board access and move application failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinates outside the 8x8 board
    InvalidSquare { row: usize, col: usize },
    /// No piece on the selected square
    NoPiece { square: Square },
    /// Move is not in the candidate list generated for its source square
    IllegalMove { mv: Move },
    /// Piece on the selected square belongs to the side not on turn
    WrongTurn { square: Square, turn: Color },
    /// Invalid algebraic square notation
    InvalidNotation { notation: String },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidSquare { row, col } => {
                write!(f, "Square ({row}, {col}) is outside the board (must be 0-7)")
            }
            BoardError::NoPiece { square } => {
                write!(f, "No piece on square {square}")
            }
            BoardError::IllegalMove { mv } => {
                write!(f, "Move {mv} is not legal for the piece on {}", mv.from())
            }
            BoardError::WrongTurn { square, turn } => {
                write!(f, "Piece on {square} cannot move, it is {turn}'s turn")
            }
            BoardError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for BoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_square_message() {
        let err = BoardError::InvalidSquare { row: 9, col: 3 };
        assert!(err.to_string().contains('9'));
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_no_piece_message() {
        let err = BoardError::NoPiece {
            square: Square::new(4, 4).unwrap(),
        };
        assert!(err.to_string().contains("e4"));
    }

    #[test]
    fn test_illegal_move_message() {
        let mv = Move::new(Square::new(6, 4).unwrap(), Square::new(3, 4).unwrap());
        let err = BoardError::IllegalMove { mv };
        assert!(err.to_string().contains("e2e5"));
    }

    #[test]
    fn test_wrong_turn_message() {
        let err = BoardError::WrongTurn {
            square: Square::new(1, 0).unwrap(),
            turn: Color::White,
        };
        assert!(err.to_string().contains("a7"));
        assert!(err.to_string().contains("White"));
    }

    #[test]
    fn test_error_equality_and_clone() {
        let err = BoardError::InvalidSquare { row: 8, col: 0 };
        assert_eq!(err.clone(), err);
    }
}
