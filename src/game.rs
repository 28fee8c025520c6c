//! Game session: a board plus turn alternation.
//!
//! The board itself does not know whose turn it is; this thin session object
//! owns that toggle and is what a surrounding game loop holds on to.

use crate::board::{Board, BoardError, Color, Move, MoveList, Square};

/// One running game: the board and the side to move.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// Start a game from the standard position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            turn: Color::White,
        }
    }

    /// Read access to the board, for rendering.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Candidate moves for the piece on (`row`, `col`), rejecting selection
    /// of the idle side's pieces.
    ///
    /// # Errors
    ///
    /// `InvalidSquare`, `NoPiece`, or `WrongTurn` if the piece belongs to the
    /// side not on turn.
    pub fn moves_for(&self, row: usize, col: usize) -> Result<MoveList, BoardError> {
        let square = Square::new(row, col).ok_or(BoardError::InvalidSquare { row, col })?;
        let piece = self
            .board
            .occupant(square)
            .ok_or(BoardError::NoPiece { square })?;
        if piece.color() != self.turn {
            return Err(BoardError::WrongTurn {
                square,
                turn: self.turn,
            });
        }
        self.board.moves_from(square)
    }

    /// Apply `mv` for the side on turn and hand the turn to the opponent.
    ///
    /// # Errors
    ///
    /// `NoPiece`, `WrongTurn`, or `IllegalMove`; the board and turn are
    /// unchanged on error.
    pub fn play(&mut self, mv: Move) -> Result<(), BoardError> {
        let from = mv.from();
        let piece = self
            .board
            .occupant(from)
            .ok_or(BoardError::NoPiece { square: from })?;
        if piece.color() != self.turn {
            return Err(BoardError::WrongTurn {
                square: from,
                turn: self.turn,
            });
        }
        self.board.apply_move(mv)?;
        self.turn = self.turn.opponent();
        Ok(())
    }
}
