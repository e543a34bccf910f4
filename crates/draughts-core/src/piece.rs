//! Draughts piece representation.

use crate::Side;

/// The rank of a piece: a plain man or a promoted king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Man = 0,
    King = 1,
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PieceKind::Man => write!(f, "Man"),
            PieceKind::King => write!(f, "King"),
        }
    }
}

/// A piece on the board: owning side plus rank.
///
/// Pieces are plain values. Moving, capturing or promoting a piece replaces
/// the value stored on the board rather than mutating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
}

impl Piece {
    /// Creates a piece.
    #[inline]
    pub const fn new(side: Side, kind: PieceKind) -> Self {
        Piece { side, kind }
    }

    /// Creates a man of the given side.
    #[inline]
    pub const fn man(side: Side) -> Self {
        Piece::new(side, PieceKind::Man)
    }

    /// Creates a king of the given side.
    #[inline]
    pub const fn king(side: Side) -> Self {
        Piece::new(side, PieceKind::King)
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    /// Returns true if `other` belongs to the opposing side.
    #[inline]
    pub fn is_opponent_of(self, other: Piece) -> bool {
        self.side != other.side
    }

    /// Returns the same piece promoted to a king.
    #[inline]
    pub const fn promoted(self) -> Self {
        Piece::king(self.side)
    }

    /// Returns the diagram character for this piece
    /// (`d`/`D` for Dark man/king, `l`/`L` for Light man/king).
    pub const fn to_char(self) -> char {
        match (self.side, self.kind) {
            (Side::Dark, PieceKind::Man) => 'd',
            (Side::Dark, PieceKind::King) => 'D',
            (Side::Light, PieceKind::Man) => 'l',
            (Side::Light, PieceKind::King) => 'L',
        }
    }

    /// Parses a diagram character into a piece.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'd' => Some(Piece::man(Side::Dark)),
            'D' => Some(Piece::king(Side::Dark)),
            'l' => Some(Piece::man(Side::Light)),
            'L' => Some(Piece::king(Side::Light)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.side, self.kind)
    }
}
