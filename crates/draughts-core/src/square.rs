//! Board square representation.

use std::fmt;
use thiserror::Error;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: u8 = 8;

/// Errors that can occur when parsing square or move notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid square '{0}': expected two digits 0-7 (row, column)")]
    InvalidSquare(String),

    #[error("invalid move '{0}': expected 'rc-rc' or 'rcxrc'")]
    InvalidMove(String),
}

/// A (row, col) position on the board, both 0-indexed.
///
/// Row 0 is Dark's back rank and row 7 is Light's. Only squares where
/// `row + col` is odd can hold pieces; see [`Square::is_playable`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square, returning `None` when either coordinate is off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Creates a square from signed coordinates, as produced by direction
    /// arithmetic.
    #[inline]
    pub const fn from_signed(row: i8, col: i8) -> Option<Self> {
        if Self::is_in_bounds(row, col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Returns true if the signed coordinates lie on the board.
    #[inline]
    pub const fn is_in_bounds(row: i8, col: i8) -> bool {
        row >= 0 && row < BOARD_SIZE as i8 && col >= 0 && col < BOARD_SIZE as i8
    }

    /// Creates a square from its index (row * 8 + col).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        Self::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> usize {
        (self.row * BOARD_SIZE + self.col) as usize
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns true if pieces may stand on this square.
    #[inline]
    pub const fn is_playable(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Returns the square `steps` steps away along direction `(dr, dc)`,
    /// if it is on the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8, steps: i8) -> Option<Self> {
        Self::from_signed(self.row as i8 + dr * steps, self.col as i8 + dc * steps)
    }

    /// Iterates over every square on the board, row by row.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE * BOARD_SIZE).filter_map(Square::from_index)
    }

    /// Iterates over the 32 playable squares, row by row.
    pub fn playable() -> impl Iterator<Item = Square> {
        Self::all().filter(|sq| sq.is_playable())
    }

    /// Parses a square from notation: row digit then column digit (e.g. "21").
    pub fn from_notation(s: &str) -> Result<Self, NotationError> {
        let bytes = s.as_bytes();
        let invalid = || NotationError::InvalidSquare(s.to_string());
        if bytes.len() != 2 || !bytes[0].is_ascii_digit() || !bytes[1].is_ascii_digit() {
            return Err(invalid());
        }
        Square::new(bytes[0] - b'0', bytes[1] - b'0').ok_or_else(invalid)
    }

    /// Returns the notation for this square.
    pub fn to_notation(self) -> String {
        format!("{}{}", self.row, self.col)
    }

    /// The unplayable corner (0, 0).
    pub const TOP_LEFT: Square = Square { row: 0, col: 0 };
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.col)
    }
}
