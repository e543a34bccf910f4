//! Game-end detection.
//!
//! A side that has no legal move when its turn begins loses. There are no
//! draws in this rule set.

use crate::movegen::legal_moves;
use crate::Board;
use draughts_core::Side;

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Light wins (Dark was left without a move).
    LightWins,
    /// Dark wins (Light was left without a move).
    DarkWins,
}

impl GameResult {
    /// The result in which `side` wins.
    #[inline]
    pub const fn won_by(side: Side) -> Self {
        match side {
            Side::Light => GameResult::LightWins,
            Side::Dark => GameResult::DarkWins,
        }
    }

    #[inline]
    pub const fn winner(self) -> Side {
        match self {
            GameResult::LightWins => Side::Light,
            GameResult::DarkWins => Side::Dark,
        }
    }

    #[inline]
    pub const fn loser(self) -> Side {
        self.winner().opposite()
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} wins", self.winner())
    }
}

/// Returns true if at least one piece of `side` has a legal move under
/// normal (non-chain) generation.
pub fn has_any_legal_move(board: &Board, side: Side) -> bool {
    board
        .pieces_of(side)
        .any(|sq| !legal_moves(board, sq, false).is_empty())
}

/// Returns the result if `side_to_move` cannot move, otherwise `None`.
pub fn game_result(board: &Board, side_to_move: Side) -> Option<GameResult> {
    if has_any_legal_move(board, side_to_move) {
        None
    } else {
        Some(GameResult::won_by(side_to_move.opposite()))
    }
}
