//! Draughts Arena - plays heuristic bots against each other.
//!
//! # Modules
//!
//! - [`config`] - `arena.toml` loading and match presets
//! - [`game_runner`] - plays single games and whole matches
//! - [`json_output`] - JSON match reports

pub mod config;
pub mod game_runner;
pub mod json_output;
