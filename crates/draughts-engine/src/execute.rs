//! Move execution.
//!
//! [`select_source`] validates a piece choice and returns its moves;
//! [`apply_move`] turns a chosen move into a new board plus everything the
//! caller needs to react to it: captures, promotion, and whether the same
//! piece must keep capturing.

use crate::movegen::{legal_moves, MoveList};
use crate::Board;
use draughts_core::{Move, Side, Square};
use thiserror::Error;

/// Reasons a square cannot be selected as the piece to move.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no piece on {0}")]
    Empty(Square),

    #[error("the piece on {0} belongs to the opponent")]
    OpponentPiece(Square),

    #[error("the piece on {0} has no legal moves")]
    NoLegalMoves(Square),

    #[error("the piece on {0} must continue its capture")]
    ChainInProgress(Square),
}

/// Something the presentation layer should surface to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// `by` captured the piece standing on `at`.
    PieceCaptured { by: Side, at: Square },
    /// A man of `side` was crowned on `at`.
    Promoted { side: Side, at: Square },
    /// The game ended; the other side had no legal move.
    GameOver { winner: Side },
}

/// The outcome of applying one move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    /// The board after the move.
    pub board: Board,
    /// Where the moved piece now stands.
    pub to: Square,
    /// The square of the removed piece, for a capture.
    pub captured: Option<Square>,
    /// True if the move crowned a man.
    pub promoted: bool,
    /// Further captures the same piece must choose from before the turn
    /// passes. `None` means the turn is complete.
    pub continuation: Option<MoveList>,
}

impl Execution {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Returns true if the mover's turn is over.
    #[inline]
    pub fn turn_passes(&self) -> bool {
        self.continuation.is_none()
    }

    /// Events produced by this move, in the order they happened.
    pub fn events(&self, side: Side) -> Vec<GameEvent> {
        let mut events = Vec::with_capacity(2);
        if let Some(at) = self.captured {
            events.push(GameEvent::PieceCaptured { by: side, at });
        }
        if self.promoted {
            events.push(GameEvent::Promoted { side, at: self.to });
        }
        events
    }
}

/// Checks that `side` may move the piece on `from` and returns its moves.
pub fn select_source(board: &Board, from: Square, side: Side) -> Result<MoveList, SelectionError> {
    let piece = board.piece_at(from).ok_or(SelectionError::Empty(from))?;
    if piece.side != side {
        return Err(SelectionError::OpponentPiece(from));
    }
    let moves = legal_moves(board, from, false);
    if moves.is_empty() {
        return Err(SelectionError::NoLegalMoves(from));
    }
    Ok(moves)
}

/// Applies `mov` for the piece of `side` on `from`.
///
/// The given board is left untouched. A man reaching `side`'s promotion row
/// is crowned in the same step, and after a capture the moved piece is
/// probed for further captures on the new board using the rules of its new
/// rank.
pub fn apply_move(board: &Board, from: Square, mov: Move, side: Side) -> Execution {
    debug_assert!(board.piece_at(from).is_some_and(|p| p.side == side));

    let to = mov.to();
    let mut next = board.with_move(from, mov);

    let mut promoted = false;
    if let Some(piece) = next.piece_at(to) {
        if !piece.is_king() && to.row() == side.promotion_row() {
            next = next.with_piece(to, piece.promoted());
            promoted = true;
        }
    }

    let continuation = if mov.is_capture() {
        Some(legal_moves(&next, to, true)).filter(|moves| moves.has_capture())
    } else {
        None
    };

    Execution {
        board: next,
        to,
        captured: mov.captured(),
        promoted,
        continuation,
    }
}
