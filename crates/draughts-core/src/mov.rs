//! Move representation.

use crate::square::NotationError;
use crate::Square;
use std::fmt;

/// A draughts move, relative to an implicit source square.
///
/// The destination is always empty on the board the move was generated
/// against. For a capture, `captured` holds the opposing piece being jumped.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// A non-capturing step (or slide, for kings) onto an empty square.
    Simple { to: Square },
    /// A jump over the opposing piece on `captured`, landing on `to`.
    Capture { to: Square, captured: Square },
}

impl Move {
    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        match self {
            Move::Simple { to } | Move::Capture { to, .. } => to,
        }
    }

    /// Returns the square of the captured piece, if this is a capture.
    #[inline]
    pub const fn captured(self) -> Option<Square> {
        match self {
            Move::Simple { .. } => None,
            Move::Capture { captured, .. } => Some(captured),
        }
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        matches!(self, Move::Capture { .. })
    }

    /// A null move (used as placeholder, not a legal move: the top-left
    /// corner is never playable).
    pub const NULL: Move = Move::Simple {
        to: Square::TOP_LEFT,
    };

    /// Anchors this move to its source square.
    #[inline]
    pub const fn sourced(self, from: Square) -> SourcedMove {
        SourcedMove { from, mov: self }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Simple { to } => write!(f, "Simple(-{})", to),
            Move::Capture { to, captured } => write!(f, "Capture(x{} over {})", to, captured),
        }
    }
}

/// A move together with the square it starts from.
///
/// This is what an automated player hands back: the piece to move and the
/// move it makes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourcedMove {
    pub from: Square,
    pub mov: Move,
}

impl SourcedMove {
    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.mov.to()
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.mov.is_capture()
    }

    /// Returns the notation for this move: `21-30` for a simple move,
    /// `32x10` for a capture.
    pub fn to_notation(self) -> String {
        let sep = if self.is_capture() { 'x' } else { '-' };
        format!("{}{}{}", self.from, sep, self.to())
    }

    /// Parses the source and destination out of move notation.
    ///
    /// Notation does not carry the captured square, so this only returns
    /// the squares and whether a capture was written. The caller matches
    /// them against generated legal moves.
    pub fn parse_notation(s: &str) -> Result<(Square, Square, bool), NotationError> {
        let invalid = || NotationError::InvalidMove(s.to_string());
        if s.len() != 5 || !s.is_ascii() {
            return Err(invalid());
        }
        let capture = match &s[2..3] {
            "-" => false,
            "x" => true,
            _ => return Err(invalid()),
        };
        let from = Square::from_notation(&s[0..2]).map_err(|_| invalid())?;
        let to = Square::from_notation(&s[3..5]).map_err(|_| invalid())?;
        Ok((from, to, capture))
    }
}

impl fmt::Debug for SourcedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_notation())
    }
}

impl fmt::Display for SourcedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}
