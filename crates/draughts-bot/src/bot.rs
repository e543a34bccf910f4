//! A computer player driving a [`Game`].

use crate::{choose_continuation, choose_move, Difficulty};
use draughts_core::{Side, SourcedMove};
use draughts_engine::{Game, GameError, GameEvent};
use rand::Rng;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BotError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("{0} has no legal move")]
    NoLegalMoves(Side),

    #[error("{0} is in the middle of a chain capture")]
    ChainPending(Side),
}

/// Everything the bot did in one turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Turn {
    /// The moves played, more than one for a chain capture.
    pub moves: Vec<SourcedMove>,
    pub events: Vec<GameEvent>,
}

/// Plays whole turns with [`choose_move`], resolving chain captures with
/// [`choose_continuation`] until the turn passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeuristicBot {
    pub difficulty: Difficulty,
}

impl HeuristicBot {
    pub const fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// Plays one full turn for the side to move.
    ///
    /// Fails if the game is over, or if a chain capture is already pending
    /// for the side to move (that chain belongs to whoever started it).
    pub fn play_turn<R: Rng + ?Sized>(&self, game: &mut Game, rng: &mut R) -> Result<Turn, BotError> {
        if game.is_game_over() {
            return Err(GameError::GameAlreadyOver.into());
        }
        let side = game.side_to_move();
        if game.in_chain() {
            return Err(BotError::ChainPending(side));
        }

        let first = choose_move(game.board(), side, self.difficulty, rng)
            .ok_or(BotError::NoLegalMoves(side))?;

        let mut turn = Turn::default();
        let mut next = first;
        loop {
            let step = game.play(next)?;
            turn.moves.push(next);
            turn.events.extend(step.events);
            if step.turn_passed {
                break;
            }
            next = match game.selection() {
                Some((from, moves)) => choose_continuation(from, moves, rng),
                None => None,
            }
            .ok_or(BotError::NoLegalMoves(side))?;
        }

        debug!(%side, difficulty = %self.difficulty, moves = turn.moves.len(), "turn played");
        Ok(turn)
    }
}
