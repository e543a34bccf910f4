//! Draughts board representation.

use draughts_core::{Layout, LayoutError, Move, Piece, Side, Square, BOARD_SIZE};
use std::fmt;

/// An 8x8 board snapshot: which piece, if any, stands on each square.
///
/// Boards are small `Copy` values. Applying a move never mutates the board
/// it was called on; it returns a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Board { cells: [None; 64] }
    }

    /// Creates the standard starting board.
    pub fn startpos() -> Self {
        Self::from(&Layout::default())
    }

    /// Creates a board from a diagram string (see [`Layout`]).
    pub fn from_layout(diagram: &str) -> Result<Self, LayoutError> {
        Layout::parse(diagram).map(|layout| Self::from(&layout))
    }

    /// Converts the board to a diagram string, rows separated by `/`.
    pub fn to_layout(&self) -> String {
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

    /// Returns true if the signed coordinates lie on the board.
    #[inline]
    pub const fn is_in_bounds(row: i8, col: i8) -> bool {
        Square::is_in_bounds(row, col)
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_none()
    }

    /// Returns a copy of the board with `piece` placed on `sq`.
    ///
    /// `sq` must be playable.
    #[must_use]
    pub fn with_piece(self, sq: Square, piece: Piece) -> Self {
        debug_assert!(sq.is_playable(), "{sq:?} is not playable");
        self.with_piece_unchecked(sq, piece)
    }

    /// Like [`Board::with_piece`], but accepts any square.
    ///
    /// Only meant for exercising the move rules on diagrams drawn on the
    /// other square colour; regular play never produces such boards.
    #[doc(hidden)]
    #[must_use]
    pub fn with_piece_unchecked(mut self, sq: Square, piece: Piece) -> Self {
        self.cells[sq.index()] = Some(piece);
        self
    }

    /// Returns a copy of the board with `sq` cleared.
    #[must_use]
    pub fn without_piece(mut self, sq: Square) -> Self {
        self.cells[sq.index()] = None;
        self
    }

    /// Returns a new board with the piece on `from` relocated by `mov`.
    ///
    /// The source is cleared, a captured piece is removed, and the moving
    /// piece lands on the destination unchanged. Promotion is the
    /// executor's job (see [`apply_move`](crate::apply_move)).
    #[must_use]
    pub fn with_move(&self, from: Square, mov: Move) -> Self {
        let mut next = *self;
        let piece = next.cells[from.index()].take();
        if let Some(captured) = mov.captured() {
            next.cells[captured.index()] = None;
        }
        if let Some(piece) = piece {
            next.cells[mov.to().index()] = Some(piece);
        }
        next
    }

    /// Iterates over every piece on the board, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Iterates over the squares holding pieces of `side`.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |(_, p)| p.side == side)
            .map(|(sq, _)| sq)
    }

    /// Counts the pieces of `side`.
    pub fn count(&self, side: Side) -> usize {
        self.pieces_of(side).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl From<&Layout> for Board {
    fn from(layout: &Layout) -> Self {
        layout
            .pieces()
            .fold(Board::empty(), |board, (sq, piece)| board.with_piece(sq, piece))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_layout().split('/') {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
