//! Game execution for bot-versus-bot matches.
//!
//! [`GameRunner`] plays single games between two [`HeuristicBot`]s on the
//! full rules engine. Games that run past the ply cap are scored a draw;
//! the rules themselves have no draws.

use draughts_bot::{BotError, Difficulty, HeuristicBot};
use draughts_core::Side;
use draughts_engine::{Game, GameEvent, GameResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur during game execution.
#[derive(Error, Debug)]
pub enum RunnerError {
    /// A bot failed to complete its turn.
    #[error("{side} bot failed at ply {ply}: {source}")]
    Bot {
        side: Side,
        ply: usize,
        #[source]
        source: BotError,
    },
}

/// One turn of a game: the moves of a single piece, chain included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    /// "light" or "dark".
    pub side: &'static str,
    /// Every move of the turn in `rc-rc` / `rcxrc` notation.
    pub moves: Vec<String>,
    /// Pieces captured this turn.
    pub captures: usize,
    /// True if the moving man was crowned.
    pub promoted: bool,
}

/// The outcome of an arena game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchResult {
    /// Dark was left without a legal move.
    #[serde(rename = "light")]
    LightWins,
    /// Light was left without a legal move.
    #[serde(rename = "dark")]
    DarkWins,
    /// The ply cap was reached.
    #[serde(rename = "draw")]
    Draw,
}

impl From<GameResult> for MatchResult {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::LightWins => MatchResult::LightWins,
            GameResult::DarkWins => MatchResult::DarkWins,
        }
    }
}

/// A finished arena game.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    /// The seed the game's random generator was built from.
    pub seed: u64,
    pub result: MatchResult,
    /// Completed plies.
    pub plies: usize,
    pub turns: Vec<MoveRecord>,
    /// Final board in diagram notation.
    pub final_board: String,
}

/// Win/draw tally over a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub light_wins: u32,
    pub dark_wins: u32,
    pub draws: u32,
}

impl MatchSummary {
    pub fn record(&mut self, result: MatchResult) {
        match result {
            MatchResult::LightWins => self.light_wins += 1,
            MatchResult::DarkWins => self.dark_wins += 1,
            MatchResult::Draw => self.draws += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.light_wins + self.dark_wins + self.draws
    }
}

/// All games of a match and their tally.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub light: Difficulty,
    pub dark: Difficulty,
    pub max_plies: usize,
    pub summary: MatchSummary,
    pub games: Vec<GameRecord>,
}

/// Plays games between a Light and a Dark bot.
#[derive(Debug, Clone, Copy)]
pub struct GameRunner {
    light: HeuristicBot,
    dark: HeuristicBot,
    max_plies: usize,
}

impl GameRunner {
    pub fn new(light: Difficulty, dark: Difficulty, max_plies: usize) -> Self {
        Self {
            light: HeuristicBot::new(light),
            dark: HeuristicBot::new(dark),
            max_plies,
        }
    }

    /// Plays one game from the starting position, drawing every random
    /// choice from a generator seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Bot`] if a bot cannot complete a turn.
    pub fn play_game(&self, seed: u64) -> Result<GameRecord, RunnerError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new();
        let mut turns = Vec::new();

        while !game.is_game_over() {
            if game.ply_count() >= self.max_plies {
                warn!(seed, plies = game.ply_count(), "ply cap reached, scoring a draw");
                break;
            }

            let side = game.side_to_move();
            let bot = match side {
                Side::Light => &self.light,
                Side::Dark => &self.dark,
            };
            let turn = bot
                .play_turn(&mut game, &mut rng)
                .map_err(|source| RunnerError::Bot {
                    side,
                    ply: game.ply_count(),
                    source,
                })?;

            turns.push(MoveRecord {
                side: side_name(side),
                moves: turn.moves.iter().map(|m| m.to_notation()).collect(),
                captures: turn
                    .events
                    .iter()
                    .filter(|e| matches!(e, GameEvent::PieceCaptured { .. }))
                    .count(),
                promoted: turn
                    .events
                    .iter()
                    .any(|e| matches!(e, GameEvent::Promoted { .. })),
            });
        }

        let result = game.result().map(MatchResult::from).unwrap_or(MatchResult::Draw);
        Ok(GameRecord {
            seed,
            result,
            plies: game.ply_count(),
            turns,
            final_board: game.board().to_layout(),
        })
    }

    /// Plays `games` games. Game `i` uses seed `base_seed + i`.
    ///
    /// # Errors
    ///
    /// Stops at the first game a bot fails to complete.
    pub fn play_match(&self, games: u32, base_seed: u64) -> Result<MatchReport, RunnerError> {
        let mut summary = MatchSummary::default();
        let mut records = Vec::with_capacity(games as usize);

        for i in 0..games {
            let record = self.play_game(base_seed.wrapping_add(u64::from(i)))?;
            info!(
                game = i + 1,
                seed = record.seed,
                result = ?record.result,
                plies = record.plies,
                "game finished"
            );
            summary.record(record.result);
            records.push(record);
        }

        info!(
            light = %self.light.difficulty,
            dark = %self.dark.difficulty,
            light_wins = summary.light_wins,
            dark_wins = summary.dark_wins,
            draws = summary.draws,
            "match finished"
        );

        Ok(MatchReport {
            light: self.light.difficulty,
            dark: self.dark.difficulty,
            max_plies: self.max_plies,
            summary,
            games: records,
        })
    }
}

/// Picks a base seed when none is configured.
pub fn random_seed() -> u64 {
    rand::rng().random()
}

fn side_name(side: Side) -> &'static str {
    match side {
        Side::Light => "light",
        Side::Dark => "dark",
    }
}
