//! Board state: occupancy grid, move validation, and move application.

use std::fmt;

use super::error::BoardError;
use super::types::{Color, Move, MoveList, Piece, PieceKind, Square};

/// Column order of the back rank in the starting position.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 mailbox board: one optional occupant per square, plus the most
/// recently applied move.
///
/// Move generation is pure: [`Board::generate_moves`] returns a fresh
/// candidate list that snapshots occupancy at the moment of the call. Any
/// mutation of the board invalidates previously returned lists; callers
/// re-generate after [`Board::apply_move`].
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) squares: [[Option<Piece>; 8]; 8],
    pub(crate) last_move: Option<Move>,
}

impl Board {
    /// Create a board with the standard chess starting arrangement.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for color in Color::BOTH {
            let back = color.back_rank();
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                board.squares[back][col] = Some(Piece::new(kind, color));
            }
            let pawns = color.pawn_rank();
            for col in 0..8 {
                board.squares[pawns][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Create a board with no pieces.
    #[must_use]
    pub(crate) fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            last_move: None,
        }
    }

    /// Occupant of a square, if any.
    #[inline]
    #[must_use]
    pub fn occupant(&self, square: Square) -> Option<Piece> {
        self.squares[square.row()][square.col()]
    }

    /// Raw-coordinate occupancy read for the rendering layer. Out-of-range
    /// coordinates read as empty.
    #[inline]
    #[must_use]
    pub fn occupant_at(&self, row: usize, col: usize) -> Option<Piece> {
        Square::new(row, col).and_then(|sq| self.occupant(sq))
    }

    /// The most recently applied move.
    #[inline]
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    #[inline]
    pub(crate) fn is_empty(&self, square: Square) -> bool {
        self.occupant(square).is_none()
    }

    #[inline]
    pub(crate) fn has_enemy(&self, square: Square, of: Color) -> bool {
        matches!(self.occupant(square), Some(p) if p.color() != of)
    }

    #[inline]
    pub(crate) fn is_empty_or_enemy(&self, square: Square, of: Color) -> bool {
        match self.occupant(square) {
            None => true,
            Some(p) => p.color() != of,
        }
    }

    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row()][square.col()] = piece;
    }

    /// Generate the pseudo-legal candidate moves for the piece on
    /// (`row`, `col`).
    ///
    /// # Errors
    ///
    /// `InvalidSquare` if the coordinates leave the board, `NoPiece` if the
    /// square is empty.
    pub fn generate_moves(&self, row: usize, col: usize) -> Result<MoveList, BoardError> {
        let square = Square::new(row, col).ok_or(BoardError::InvalidSquare { row, col })?;
        self.moves_from(square)
    }

    /// Generate the pseudo-legal candidate moves for the piece on `square`.
    ///
    /// # Errors
    ///
    /// `NoPiece` if the square is empty.
    pub fn moves_from(&self, square: Square) -> Result<MoveList, BoardError> {
        let piece = self.occupant(square).ok_or(BoardError::NoPiece { square })?;
        Ok(self.piece_moves(square, piece))
    }

    /// Whether `mv` is in the candidate list generated for its source square.
    ///
    /// Candidate lists are recomputed here rather than cached, so the answer
    /// always reflects current occupancy.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        match self.moves_from(mv.from()) {
            Ok(moves) => moves.contains(mv),
            Err(_) => false,
        }
    }

    /// Validate and apply `mv`: clear the source square, place the mover on
    /// the destination, set its moved flag, and record the move.
    ///
    /// A capture simply overwrites the destination occupant; no capture
    /// bookkeeping is kept.
    ///
    /// # Errors
    ///
    /// `NoPiece` if the source square is empty, `IllegalMove` if `mv` is not
    /// among the moves generated for the source piece.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), BoardError> {
        let piece = self.occupant(mv.from()).ok_or(BoardError::NoPiece {
            square: mv.from(),
        })?;
        if !self.piece_moves(mv.from(), piece).contains(mv) {
            return Err(BoardError::IllegalMove { mv });
        }
        self.commit(mv, piece);
        Ok(())
    }

    /// Unchecked mutation step shared by `apply_move`.
    fn commit(&mut self, mv: Move, mut piece: Piece) {
        piece.mark_moved();
        self.set(mv.from(), None);
        self.set(mv.to(), Some(piece));
        self.last_move = Some(mv);

        #[cfg(feature = "logging")]
        log::trace!("applied {} ({} {:?})", mv, piece.color(), piece.kind());
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    /// ASCII grid with rank and file labels, White at the bottom.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} |", 8 - row)?;
            for col in 0..8 {
                let ch = self.squares[row][col].map_or('.', Piece::symbol);
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   ----------------")?;
        write!(f, "    a b c d e f g h")
    }
}
