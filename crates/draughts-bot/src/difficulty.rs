//! Difficulty tiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an unknown difficulty name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown difficulty '{0}': expected easy, medium or hard")]
pub struct ParseDifficultyError(String);

/// How strongly the opponent prefers its best-ranked quiet moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers, weakest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// The share of ranked moves cut from the random pool, in percent.
    #[inline]
    pub const fn factor_percent(self) -> usize {
        match self {
            Difficulty::Easy => 30,
            Difficulty::Medium => 60,
            Difficulty::Hard => 90,
        }
    }

    /// The difficulty factor (0.3, 0.6 or 0.9).
    #[inline]
    pub fn factor(self) -> f64 {
        self.factor_percent() as f64 / 100.0
    }

    /// Size of the random pool taken from the front of `count` ranked moves:
    /// `floor(count * (1 - factor))`, never less than one move.
    ///
    /// Computed in integer percent so that e.g. 20 moves on Hard yield a
    /// pool of exactly 2.
    pub const fn pool_size(self, count: usize) -> usize {
        let pool = count * (100 - self.factor_percent()) / 100;
        if pool == 0 && count > 0 {
            1
        } else {
            pool
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}
