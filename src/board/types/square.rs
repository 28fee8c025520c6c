//! Square type and coordinate utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::BoardError;

/// Bounds check for a single board coordinate.
///
/// Both one- and two-coordinate guards compose from this: a pawn's forward
/// scan only needs the row checked, everything else checks row and column.
#[inline]
#[must_use]
pub const fn in_range(coord: i32) -> bool {
    0 <= coord && coord <= 7
}

/// A square on the chess board.
///
/// Rows run 0-7 top to bottom (row 0 is Black's back rank), columns 0-7 left
/// to right. A `Square` can only be constructed in bounds, so holding one is
/// proof the coordinates are valid for grid access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    row: usize,
    col: usize,
}

impl Square {
    /// Top-left corner (a8), used as the move-list fill sentinel.
    pub(crate) const ORIGIN: Square = Square { row: 0, col: 0 };

    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Get the row (0-7, where 0 = Black's back rank)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Get the column (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Step by a signed row/column offset, `None` if the result leaves the
    /// board. This is the guard in front of every occupancy read during
    /// move generation.
    #[inline]
    #[must_use]
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        let row = self.row as i32 + d_row;
        let col = self.col as i32 + d_col;
        if in_range(row) && in_range(col) {
            Some(Square {
                row: row as usize,
                col: col as usize,
            })
        } else {
            None
        }
    }

    /// Letter for a column index ('a' for 0 through 'h' for 7), used by the
    /// presentation layer for notation display.
    #[must_use]
    pub fn alphacol(col: usize) -> Option<char> {
        if col < 8 {
            Some((col as u8 + b'a') as char)
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Row 0 is rank 8 in algebraic notation.
        write!(f, "{}{}", (self.col as u8 + b'a') as char, 8 - self.row)
    }
}

impl FromStr for Square {
    type Err = BoardError;

    /// Parse algebraic notation such as "e4" or "a8".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BoardError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let file = chars.next().ok_or_else(invalid)?;
        let rank = chars.next().ok_or_else(invalid)?;
        if chars.next().is_some() || !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(invalid());
        }
        let col = file as usize - 'a' as usize;
        let row = 8 - (rank as usize - '0' as usize);
        Ok(Square { row, col })
    }
}
