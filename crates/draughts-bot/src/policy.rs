//! Move choice.

use crate::Difficulty;
use draughts_core::{Side, SourcedMove, Square};
use draughts_engine::{side_moves, Board, MoveList};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::cmp::Reverse;
use tracing::debug;

/// Picks a move for `side`, or `None` if `side` has no legal move and has
/// therefore lost.
///
/// Captures are mandatory across the whole side: if any piece can capture,
/// one capture is drawn uniformly from all of them. Otherwise the quiet
/// moves are ranked by [`rank_by_advancement`] and one is drawn uniformly
/// from the first [`Difficulty::pool_size`] entries.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    side: Side,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<SourcedMove> {
    let moves = side_moves(board, side);
    if moves.is_empty() {
        debug!(%side, "no legal moves");
        return None;
    }

    let captures: Vec<SourcedMove> = moves.iter().copied().filter(|m| m.is_capture()).collect();
    if let Some(&choice) = captures.choose(rng) {
        debug!(%side, candidates = captures.len(), choice = %choice, "capturing");
        return Some(choice);
    }

    let ranked = rank_by_advancement(moves, side);
    let pool = difficulty.pool_size(ranked.len());
    let choice = ranked[rng.random_range(0..pool)];
    debug!(
        %side,
        %difficulty,
        candidates = ranked.len(),
        pool,
        choice = %choice,
        "quiet move"
    );
    Some(choice)
}

/// Picks the next capture of a chain for the piece on `from`.
///
/// Draws uniformly among the captures in `moves`; returns `None` if there
/// are none.
pub fn choose_continuation<R: Rng + ?Sized>(
    from: Square,
    moves: &MoveList,
    rng: &mut R,
) -> Option<SourcedMove> {
    let captures: Vec<SourcedMove> = moves
        .into_iter()
        .filter(|m| m.is_capture())
        .map(|m| m.sourced(from))
        .collect();
    let choice = captures.choose(rng).copied();
    if let Some(m) = choice {
        debug!(candidates = captures.len(), choice = %m, "continuing chain");
    }
    choice
}

/// Sorts moves so that the ones landing closest to `side`'s promotion row
/// come first. Moves of equal rank keep their generation order.
pub fn rank_by_advancement(mut moves: Vec<SourcedMove>, side: Side) -> Vec<SourcedMove> {
    moves.sort_by_key(|m| Reverse(side.advancement(m.to().row())));
    moves
}
