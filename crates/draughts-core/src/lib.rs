//! Core types for draughts.
//!
//! This crate provides the fundamental types used across the draughts engine:
//! - [`Piece`], [`PieceKind`] and [`Side`] for piece representation
//! - [`Square`] for board coordinates
//! - [`Move`] and [`SourcedMove`] for move representation
//! - Board diagram parsing and serialization ([`Layout`])

mod layout;
mod mov;
mod piece;
mod side;
mod square;

pub use layout::{Layout, LayoutError};
pub use mov::{Move, SourcedMove};
pub use piece::{Piece, PieceKind};
pub use side::Side;
pub use square::{NotationError, Square, BOARD_SIZE};
