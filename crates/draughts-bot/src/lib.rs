//! Heuristic draughts opponent.
//!
//! The opponent looks one ply ahead only:
//! - if any of its pieces can capture, it captures, picking uniformly among
//!   every capture on the board
//! - otherwise it ranks moves by how far they advance toward promotion and
//!   picks at random from the best-ranked share, whose size shrinks as the
//!   [`Difficulty`] rises
//!
//! All randomness comes from a caller-supplied [`rand::Rng`], so games are
//! reproducible with a seeded generator.

mod bot;
mod difficulty;
mod policy;

pub use bot::{BotError, HeuristicBot, Turn};
pub use difficulty::{Difficulty, ParseDifficultyError};
pub use policy::{choose_continuation, choose_move, rank_by_advancement};
