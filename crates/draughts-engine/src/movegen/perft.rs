//! Perft (performance test) for move generator validation.
//!
//! Perft counts the leaf nodes of the game tree at a given depth in plies.
//! A chain capture is one ply: each distinct sequence of continuation
//! captures is its own branch, and the turn only passes once the chain
//! ends.

use super::legal_moves;
use crate::{apply_move, Board};
use draughts_core::{Move, Side, Square};

/// Counts the number of leaf nodes at the given depth.
pub fn perft(board: &Board, side: Side, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0u64;
    for from in board.pieces_of(side) {
        for m in &legal_moves(board, from, false) {
            nodes += perft_ply(board, from, *m, side, depth);
        }
    }
    nodes
}

/// Follows one move, and any chain it starts, to the end of the ply.
fn perft_ply(board: &Board, from: Square, mov: Move, side: Side, depth: u32) -> u64 {
    let exec = apply_move(board, from, mov, side);
    match &exec.continuation {
        Some(next) => next
            .as_slice()
            .iter()
            .map(|m| perft_ply(&exec.board, exec.to, *m, side, depth))
            .sum(),
        None => perft(&exec.board, side.opposite(), depth - 1),
    }
}

/// Perft with divide - shows node count for each first move.
/// Useful for debugging to identify which moves have incorrect counts.
pub fn perft_divide(board: &Board, side: Side, depth: u32) -> Vec<(String, u64)> {
    let mut results = Vec::new();
    if depth == 0 {
        return results;
    }

    for from in board.pieces_of(side) {
        for m in &legal_moves(board, from, false) {
            let nodes = perft_ply(board, from, *m, side, depth);
            results.push((m.sourced(from).to_notation(), nodes));
        }
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
