//! Turn state machine.
//!
//! [`Game`] owns the authoritative board between plies and walks through
//! the selection flow a player goes through:
//! - pick one of the side to move's pieces ([`Game::select`])
//! - pick a destination among its legal moves ([`Game::move_to`])
//! - after a capture, keep capturing with the same piece while possible
//!
//! Automated players hand in a complete [`SourcedMove`] via [`Game::play`]
//! instead. Every rejected request leaves the board and the turn untouched.

use crate::execute::{apply_move, select_source, GameEvent, SelectionError};
use crate::movegen::{legal_moves, MoveList};
use crate::rules::{game_result, GameResult};
use crate::Board;
use draughts_core::{LayoutError, Move, Side, SourcedMove, Square};
use thiserror::Error;

/// Error type for game operations.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GameError {
    /// The chosen square cannot be moved from.
    #[error("invalid selection: {0}")]
    InvalidSelection(#[from] SelectionError),
    /// The destination is not among the selected piece's legal moves.
    #[error("illegal destination: {0}")]
    IllegalDestination(Square),
    /// A destination was given before any piece was selected.
    #[error("no piece selected")]
    NoSelection,
    /// The game has already ended.
    #[error("game has already ended")]
    GameAlreadyOver,
}

/// Where the side to move is in its turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnState {
    /// No piece chosen yet.
    AwaitingSelection,
    /// A piece is chosen and its legal moves are known.
    AwaitingDestination { from: Square, moves: MoveList },
    /// The piece on `from` just captured and must capture again.
    ChainCapture { from: Square, moves: MoveList },
    /// The game is over.
    Finished(GameResult),
}

/// What one applied move produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Events in the order they occurred, ending with
    /// [`GameEvent::GameOver`] if the move ended the game.
    pub events: Vec<GameEvent>,
    /// True if the turn passed to the other side.
    pub turn_passed: bool,
}

/// A draughts game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Side,
    state: TurnState,
    /// Every applied move, chain continuations included.
    history: Vec<SourcedMove>,
    /// Completed plies (a whole chain counts once).
    plies: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game from the starting board. Light moves first.
    pub fn new() -> Self {
        Self::from_board(Board::startpos(), Side::Light)
    }

    /// Creates a game from an arbitrary board.
    ///
    /// If `side_to_move` already has no legal move the game starts finished.
    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        let state = match game_result(&board, side_to_move) {
            Some(result) => TurnState::Finished(result),
            None => TurnState::AwaitingSelection,
        };
        Game {
            board,
            side_to_move,
            state,
            history: Vec::new(),
            plies: 0,
        }
    }

    /// Creates a game from a diagram string.
    pub fn from_layout(diagram: &str, side_to_move: Side) -> Result<Self, LayoutError> {
        Ok(Self::from_board(Board::from_layout(diagram)?, side_to_move))
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side whose turn it is.
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub fn state(&self) -> &TurnState {
        &self.state
    }

    /// Returns the game result if the game is over.
    pub fn result(&self) -> Option<GameResult> {
        match self.state {
            TurnState::Finished(result) => Some(result),
            _ => None,
        }
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.result().is_some()
    }

    /// Returns true while a piece is in the middle of a chain capture.
    pub fn in_chain(&self) -> bool {
        matches!(self.state, TurnState::ChainCapture { .. })
    }

    /// Returns the selected piece and its moves, if any.
    pub fn selection(&self) -> Option<(Square, &MoveList)> {
        match &self.state {
            TurnState::AwaitingDestination { from, moves }
            | TurnState::ChainCapture { from, moves } => Some((*from, moves)),
            _ => None,
        }
    }

    /// Returns the move history, chain continuations included.
    pub fn move_history(&self) -> &[SourcedMove] {
        &self.history
    }

    /// Returns the number of completed plies.
    pub fn ply_count(&self) -> usize {
        self.plies
    }

    /// Returns the legal moves of the piece on `from` on the current board.
    ///
    /// This is a read-only query and does not change the selection.
    pub fn legal_moves(&self, from: Square) -> MoveList {
        legal_moves(&self.board, from, false)
    }

    /// Selects the piece on `from` for the side to move.
    ///
    /// Selecting while another piece is selected switches to the new piece.
    /// An invalid selection clears the pending one. During a chain capture
    /// only the capturing piece may be selected.
    pub fn select(&mut self, from: Square) -> Result<&MoveList, GameError> {
        match self.state {
            TurnState::Finished(_) => return Err(GameError::GameAlreadyOver),
            TurnState::ChainCapture { from: chaining, .. } => {
                if chaining != from {
                    return Err(SelectionError::ChainInProgress(chaining).into());
                }
            }
            TurnState::AwaitingSelection | TurnState::AwaitingDestination { .. } => {
                match select_source(&self.board, from, self.side_to_move) {
                    Ok(moves) => self.state = TurnState::AwaitingDestination { from, moves },
                    Err(e) => {
                        self.state = TurnState::AwaitingSelection;
                        return Err(e.into());
                    }
                }
            }
        }

        match &self.state {
            TurnState::AwaitingDestination { moves, .. } | TurnState::ChainCapture { moves, .. } => {
                Ok(moves)
            }
            _ => Err(GameError::NoSelection),
        }
    }

    /// Drops the current selection. Has no effect during a chain capture.
    pub fn clear_selection(&mut self) {
        if matches!(self.state, TurnState::AwaitingDestination { .. }) {
            self.state = TurnState::AwaitingSelection;
        }
    }

    /// Moves the selected piece to `to`.
    pub fn move_to(&mut self, to: Square) -> Result<Step, GameError> {
        let (from, mov) = match &self.state {
            TurnState::Finished(_) => return Err(GameError::GameAlreadyOver),
            TurnState::AwaitingSelection => return Err(GameError::NoSelection),
            TurnState::AwaitingDestination { from, moves }
            | TurnState::ChainCapture { from, moves } => {
                let mov = moves.find_to(to).ok_or(GameError::IllegalDestination(to))?;
                (*from, mov)
            }
        };
        Ok(self.perform(from, mov))
    }

    /// Plays a complete move for the side to move.
    ///
    /// The move must be legal for its source piece; during a chain capture
    /// it must be one of the pending continuation captures.
    pub fn play(&mut self, m: SourcedMove) -> Result<Step, GameError> {
        let chain = match &self.state {
            TurnState::Finished(_) => return Err(GameError::GameAlreadyOver),
            TurnState::ChainCapture { from, moves } => Some((*from, moves.contains(&m.mov))),
            TurnState::AwaitingSelection | TurnState::AwaitingDestination { .. } => None,
        };
        if let Some((chaining, allowed)) = chain {
            if m.from != chaining {
                return Err(SelectionError::ChainInProgress(chaining).into());
            }
            if !allowed {
                return Err(GameError::IllegalDestination(m.to()));
            }
            return Ok(self.perform(m.from, m.mov));
        }

        match select_source(&self.board, m.from, self.side_to_move) {
            Ok(moves) if moves.contains(&m.mov) => Ok(self.perform(m.from, m.mov)),
            Ok(_) => Err(GameError::IllegalDestination(m.to())),
            Err(e) => {
                self.state = TurnState::AwaitingSelection;
                Err(e.into())
            }
        }
    }

    /// Applies a validated move and advances the state machine.
    fn perform(&mut self, from: Square, mov: Move) -> Step {
        let side = self.side_to_move;
        let exec = apply_move(&self.board, from, mov, side);
        let mut events = exec.events(side);

        self.board = exec.board;
        self.history.push(mov.sourced(from));

        if let Some(moves) = exec.continuation {
            self.state = TurnState::ChainCapture { from: exec.to, moves };
            return Step {
                events,
                turn_passed: false,
            };
        }

        self.plies += 1;
        self.side_to_move = side.opposite();
        self.state = match game_result(&self.board, self.side_to_move) {
            Some(result) => {
                events.push(GameEvent::GameOver {
                    winner: result.winner(),
                });
                TurnState::Finished(result)
            }
            None => TurnState::AwaitingSelection,
        };

        Step {
            events,
            turn_passed: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draughts_core::Piece;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.side_to_move(), Side::Light);
        assert_eq!(game.state(), &TurnState::AwaitingSelection);
        assert_eq!(game.ply_count(), 0);
        assert!(!game.is_game_over());
    }

    #[test]
    fn select_then_move() {
        let mut game = Game::new();
        let moves = game.select(sq(5, 2)).unwrap();
        assert_eq!(moves.len(), 2);
        let step = game.move_to(sq(4, 3)).unwrap();
        assert!(step.turn_passed);
        assert!(step.events.is_empty());
        assert_eq!(game.side_to_move(), Side::Dark);
        assert_eq!(game.ply_count(), 1);
        assert_eq!(game.move_history()[0].to_notation(), "52-43");
        assert_eq!(game.state(), &TurnState::AwaitingSelection);
    }

    #[test]
    fn invalid_selection_clears_pending_one() {
        let mut game = Game::new();
        game.select(sq(5, 2)).unwrap();
        let err = game.select(sq(2, 1)).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidSelection(SelectionError::OpponentPiece(sq(2, 1)))
        );
        assert_eq!(game.state(), &TurnState::AwaitingSelection);
        assert_eq!(game.board(), &Board::startpos());
    }

    #[test]
    fn reselect_switches_piece() {
        let mut game = Game::new();
        game.select(sq(5, 2)).unwrap();
        game.select(sq(5, 0)).unwrap();
        let (from, moves) = game.selection().unwrap();
        assert_eq!(from, sq(5, 0));
        assert_eq!(moves.len(), 1);
    }

    #[test]
    fn illegal_destination_keeps_selection() {
        let mut game = Game::new();
        game.select(sq(5, 2)).unwrap();
        assert_eq!(
            game.move_to(sq(3, 2)),
            Err(GameError::IllegalDestination(sq(3, 2)))
        );
        assert_eq!(game.selection().map(|(from, _)| from), Some(sq(5, 2)));
        assert_eq!(game.board(), &Board::startpos());
        assert_eq!(game.side_to_move(), Side::Light);
    }

    #[test]
    fn move_without_selection() {
        let mut game = Game::new();
        assert_eq!(game.move_to(sq(4, 3)), Err(GameError::NoSelection));
    }

    #[test]
    fn clear_selection() {
        let mut game = Game::new();
        game.select(sq(5, 2)).unwrap();
        game.clear_selection();
        assert_eq!(game.state(), &TurnState::AwaitingSelection);
    }

    #[test]
    fn chain_capture_keeps_turn_until_done() {
        let board = Board::empty()
            .with_piece(sq(5, 4), Piece::man(Side::Light))
            .with_piece(sq(4, 3), Piece::man(Side::Dark))
            .with_piece(sq(2, 1), Piece::man(Side::Dark))
            .with_piece(sq(0, 7), Piece::man(Side::Dark));
        let mut game = Game::from_board(board, Side::Light);

        game.select(sq(5, 4)).unwrap();
        let step = game.move_to(sq(3, 2)).unwrap();
        assert!(!step.turn_passed);
        assert!(game.in_chain());
        assert_eq!(game.side_to_move(), Side::Light);
        assert_eq!(game.ply_count(), 0);

        // Another piece cannot be picked mid-chain, and the chain survives.
        assert_eq!(
            game.select(sq(0, 7)),
            Err(GameError::InvalidSelection(SelectionError::ChainInProgress(
                sq(3, 2)
            )))
        );
        game.clear_selection();
        assert!(game.in_chain());

        let step = game.move_to(sq(1, 0)).unwrap();
        assert!(step.turn_passed);
        assert_eq!(game.side_to_move(), Side::Dark);
        assert_eq!(game.ply_count(), 1);
        assert_eq!(game.move_history().len(), 2);
        assert_eq!(game.board().count(Side::Dark), 1);
    }

    #[test]
    fn capturing_last_piece_ends_game() {
        let board = Board::empty()
            .with_piece(sq(3, 2), Piece::man(Side::Light))
            .with_piece(sq(2, 1), Piece::man(Side::Dark));
        let mut game = Game::from_board(board, Side::Light);
        let step = game
            .play(
                Move::Capture {
                    to: sq(1, 0),
                    captured: sq(2, 1),
                }
                .sourced(sq(3, 2)),
            )
            .unwrap();
        assert_eq!(
            step.events,
            vec![
                GameEvent::PieceCaptured {
                    by: Side::Light,
                    at: sq(2, 1)
                },
                GameEvent::GameOver {
                    winner: Side::Light
                },
            ]
        );
        assert_eq!(game.result(), Some(GameResult::LightWins));
        assert_eq!(game.select(sq(1, 0)), Err(GameError::GameAlreadyOver));
        assert_eq!(game.move_to(sq(0, 1)), Err(GameError::GameAlreadyOver));
    }

    #[test]
    fn play_rejects_illegal_move() {
        let mut game = Game::new();
        let bogus = Move::Simple { to: sq(3, 2) }.sourced(sq(5, 2));
        assert_eq!(
            game.play(bogus),
            Err(GameError::IllegalDestination(sq(3, 2)))
        );
        let wrong_side = Move::Simple { to: sq(3, 2) }.sourced(sq(2, 1));
        assert_eq!(
            game.play(wrong_side),
            Err(GameError::InvalidSelection(SelectionError::OpponentPiece(
                sq(2, 1)
            )))
        );
        assert_eq!(game.board(), &Board::startpos());
    }

    #[test]
    fn from_board_detects_finished_game() {
        let board = Board::empty().with_piece(sq(5, 2), Piece::man(Side::Light));
        let game = Game::from_board(board, Side::Dark);
        assert_eq!(game.result(), Some(GameResult::LightWins));
    }

    #[test]
    fn from_layout() {
        let game = Game::from_layout(draughts_core::Layout::STARTPOS, Side::Dark).unwrap();
        assert_eq!(game.side_to_move(), Side::Dark);
        assert!(Game::from_layout("nonsense", Side::Dark).is_err());
    }

    #[test]
    fn play_from_invalid_source_clears_selection() {
        let mut game = Game::new();
        game.select(sq(5, 2)).unwrap();
        let foreign = Move::Simple { to: sq(3, 2) }.sourced(sq(2, 1));
        assert_eq!(
            game.play(foreign),
            Err(GameError::InvalidSelection(SelectionError::OpponentPiece(
                sq(2, 1)
            )))
        );
        assert_eq!(game.state(), &TurnState::AwaitingSelection);
        assert_eq!(game.selection(), None);
        assert_eq!(game.board(), &Board::startpos());
    }

    #[test]
    fn play_to_illegal_destination_keeps_selection() {
        let mut game = Game::new();
        game.select(sq(5, 2)).unwrap();
        let bogus = Move::Simple { to: sq(3, 2) }.sourced(sq(5, 2));
        assert_eq!(
            game.play(bogus),
            Err(GameError::IllegalDestination(sq(3, 2)))
        );
        assert_eq!(game.selection().map(|(from, _)| from), Some(sq(5, 2)));
    }
}
