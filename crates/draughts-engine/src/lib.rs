//! Draughts rules engine.
//!
//! This crate provides:
//! - [`Board`] - an immutable 8x8 board snapshot
//! - [`legal_moves`] - per-piece move generation on any board snapshot
//! - [`select_source`] and [`apply_move`] - validating and executing moves
//! - [`Game`] - the turn state machine, including chain captures
//! - [`has_any_legal_move`] and [`game_result`] - game-end detection
//!
//! # Example
//!
//! ```
//! use draughts_core::{Side, Square};
//! use draughts_engine::{legal_moves, Board, Game};
//!
//! let board = Board::startpos();
//! let from = Square::new(2, 1).unwrap();
//! assert_eq!(legal_moves(&board, from, false).len(), 2);
//!
//! let mut game = Game::new();
//! game.select(Square::new(5, 2).unwrap()).unwrap();
//! let step = game.move_to(Square::new(4, 3).unwrap()).unwrap();
//! assert!(step.turn_passed);
//! assert_eq!(game.side_to_move(), Side::Dark);
//! ```

mod board;
mod execute;
mod game;
pub mod movegen;
pub mod rules;

pub use board::Board;
pub use execute::{apply_move, select_source, Execution, GameEvent, SelectionError};
pub use game::{Game, GameError, Step, TurnState};
pub use movegen::{legal_moves, side_moves, MoveList, DIAGONALS};
pub use rules::{game_result, has_any_legal_move, GameResult};
