//! Move generation.
//!
//! Moves are generated per piece on an arbitrary board snapshot, so the
//! executor can probe continuations on a hypothetical board without
//! touching the live one.
//!
//! - Men step and capture along their two forward diagonals only.
//! - Kings slide along all four diagonals. A king may capture the first
//!   opposing piece on a ray and land on any empty square beyond it, up to
//!   the next occupied square.
//! - Whenever a piece has a capture, only its captures are returned.

pub mod perft;

use crate::Board;
use draughts_core::{Move, Piece, Side, SourcedMove, Square};

/// The four diagonal directions as (row step, column step).
pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// A list of moves for a single piece with a fixed maximum capacity.
///
/// A king in the middle of an empty board reaches 13 squares, so a small
/// fixed-size array avoids heap allocations during generation.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Maximum number of moves a single piece can have.
    pub const MAX_MOVES: usize = 16;

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [Move::NULL; Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = m;
        self.len += 1;
    }

    /// Returns the number of moves.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    /// Clears the move list.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Retains only moves for which the predicate returns true.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        let mut write = 0;
        for read in 0..self.len {
            if f(&self.moves[read]) {
                self.moves[write] = self.moves[read];
                write += 1;
            }
        }
        self.len = write;
    }

    /// Returns true if any move in the list is a capture.
    pub fn has_capture(&self) -> bool {
        self.as_slice().iter().any(|m| m.is_capture())
    }

    /// Finds the move landing on `to`, if any.
    pub fn find_to(&self, to: Square) -> Option<Move> {
        self.as_slice().iter().copied().find(|m| m.to() == to)
    }

    /// Returns true if the list contains `m`.
    pub fn contains(&self, m: &Move) -> bool {
        self.as_slice().contains(m)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for MoveList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveList {}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Generates the legal moves for the piece on `from`.
///
/// With `chain_only` set, simple moves are never produced; this is the mode
/// used to look for further captures after a capture has just landed.
/// Returns an empty list for an empty square.
pub fn legal_moves(board: &Board, from: Square, chain_only: bool) -> MoveList {
    let mut moves = MoveList::new();
    let Some(piece) = board.piece_at(from) else {
        return moves;
    };

    if piece.is_king() {
        generate_king_moves(board, from, piece, chain_only, &mut moves);
    } else {
        generate_man_moves(board, from, piece, chain_only, &mut moves);
    }

    if moves.has_capture() {
        moves.retain(|m| m.is_capture());
    }
    moves
}

fn generate_man_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    chain_only: bool,
    moves: &mut MoveList,
) {
    let dr = piece.side.forward();

    // Men capture forward only.
    for dc in [-1, 1] {
        let Some(over) = from.offset(dr, dc, 1) else {
            continue;
        };
        let Some(target) = board.piece_at(over) else {
            continue;
        };
        if !piece.is_opponent_of(target) {
            continue;
        }
        if let Some(landing) = from.offset(dr, dc, 2) {
            if board.is_empty_at(landing) {
                moves.push(Move::Capture {
                    to: landing,
                    captured: over,
                });
            }
        }
    }

    if !moves.is_empty() || chain_only {
        return;
    }

    for dc in [-1, 1] {
        if let Some(to) = from.offset(dr, dc, 1) {
            if board.is_empty_at(to) {
                moves.push(Move::Simple { to });
            }
        }
    }
}

fn generate_king_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    chain_only: bool,
    moves: &mut MoveList,
) {
    for (dr, dc) in DIAGONALS {
        let mut enemy: Option<Square> = None;
        let mut step = 1;
        while let Some(sq) = from.offset(dr, dc, step) {
            step += 1;
            match board.piece_at(sq) {
                Some(other) if enemy.is_none() && piece.is_opponent_of(other) => {
                    enemy = Some(sq);
                }
                // Own piece, or a second piece behind the enemy: the ray is blocked.
                Some(_) => break,
                None => match enemy {
                    Some(captured) => moves.push(Move::Capture { to: sq, captured }),
                    None if !chain_only => moves.push(Move::Simple { to: sq }),
                    None => {}
                },
            }
        }
    }
}

/// Generates every legal move for every piece of `side`, each tagged with
/// its source square.
///
/// Each piece's list follows [`legal_moves`]: captures crowd out that
/// piece's own simple moves, but not other pieces' simple moves.
pub fn side_moves(board: &Board, side: Side) -> Vec<SourcedMove> {
    board
        .pieces_of(side)
        .flat_map(|from| {
            legal_moves(board, from, false)
                .as_slice()
                .iter()
                .map(move |m| m.sourced(from))
                .collect::<Vec<_>>()
        })
        .collect()
}
