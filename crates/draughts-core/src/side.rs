//! Player side representation.

/// Represents the two players in draughts.
///
/// Light starts on rows 5-7 and advances toward row 0; Dark starts on
/// rows 0-2 and advances toward row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    Light = 0,
    Dark = 1,
}

impl Side {
    /// Both sides, Light first (Light moves first in a new game).
    pub const ALL: [Side; 2] = [Side::Light, Side::Dark];

    /// Returns the opposite side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
        }
    }

    /// Returns the index (0 for Light, 1 for Dark).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the row step a man of this side takes when advancing
    /// (-1 for Light, +1 for Dark).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Light => -1,
            Side::Dark => 1,
        }
    }

    /// Returns the row on which a man of this side is promoted
    /// (0 for Light, 7 for Dark).
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Side::Light => 0,
            Side::Dark => 7,
        }
    }

    /// How far `row` lies along this side's direction of travel, from 0 on
    /// its own back rank to 7 on the promotion row.
    #[inline]
    pub const fn advancement(self, row: u8) -> u8 {
        match self {
            Side::Light => 7 - row,
            Side::Dark => row,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Light => write!(f, "Light"),
            Side::Dark => write!(f, "Dark"),
        }
    }
}
