//! Board diagram parsing and serialization.
//!
//! A diagram lists the eight rows from row 0 to row 7, separated by `/` or
//! newlines. Each row has eight characters: `.` for an empty square,
//! `d`/`D` for a Dark man/king and `l`/`L` for a Light man/king.

use crate::{Piece, Square, BOARD_SIZE};
use thiserror::Error;

/// Errors that can occur when parsing board diagrams.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid diagram: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("row {row} has {len} squares, expected 8")]
    InvalidRowLength { row: usize, len: usize },

    #[error("invalid character '{ch}' in row {row}")]
    InvalidCharacter { ch: char, row: usize },

    #[error("piece on non-playable square {0}")]
    UnplayableSquare(Square),
}

/// Parsed board diagram.
///
/// The engine converts this into its board representation. Every piece in
/// a parsed layout stands on a playable square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    cells: [Option<Piece>; 64],
}

impl Layout {
    /// The standard starting diagram: Dark men on rows 0-2, Light men on rows 5-7.
    pub const STARTPOS: &'static str =
        ".d.d.d.d/d.d.d.d./.d.d.d.d/......../......../l.l.l.l./.l.l.l.l/l.l.l.l.";

    /// A diagram with no pieces.
    pub const EMPTY: &'static str = "......../......../......../......../......../......../......../........";

    /// Parses a diagram string.
    pub fn parse(diagram: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = diagram
            .split(|c| c == '/' || c == '\n')
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE as usize {
            return Err(LayoutError::InvalidRowCount(rows.len()));
        }

        let mut cells = [None; 64];
        for (row, text) in rows.iter().enumerate() {
            let len = text.chars().count();
            if len != BOARD_SIZE as usize {
                return Err(LayoutError::InvalidRowLength { row, len });
            }
            for (col, ch) in text.chars().enumerate() {
                if ch == '.' {
                    continue;
                }
                let piece =
                    Piece::from_char(ch).ok_or(LayoutError::InvalidCharacter { ch, row })?;
                // Both coordinates were bounded by the length checks above.
                let sq = Square::new(row as u8, col as u8)
                    .ok_or(LayoutError::InvalidRowLength { row, len })?;
                if !sq.is_playable() {
                    return Err(LayoutError::UnplayableSquare(sq));
                }
                cells[sq.index()] = Some(piece);
            }
        }

        Ok(Layout { cells })
    }

    /// Builds a layout from explicit placements.
    pub fn from_pieces<I>(pieces: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = (Square, Piece)>,
    {
        let mut cells = [None; 64];
        for (sq, piece) in pieces {
            if !sq.is_playable() {
                return Err(LayoutError::UnplayableSquare(sq));
            }
            cells[sq.index()] = Some(piece);
        }
        Ok(Layout { cells })
    }

    /// Returns the piece placed on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Iterates over every placed piece, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Converts the layout back to a diagram string, rows separated by `/`.
    pub fn to_diagram(&self) -> String {
        let mut out = String::with_capacity(71);
        for row in 0..BOARD_SIZE {
            if row > 0 {
                out.push('/');
            }
            for col in 0..BOARD_SIZE {
                let ch = Square::new(row, col)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', Piece::to_char);
                out.push(ch);
            }
        }
        out
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::parse(Self::STARTPOS).expect("STARTPOS is valid")
    }
}
