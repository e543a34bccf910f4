//! Property tests for move generation and execution over random boards.

use draughts_core::{Move, Piece, Side, Square};
use draughts_engine::{apply_move, legal_moves, Board};
use proptest::prelude::*;

/// Random boards with pieces only on playable squares.
fn arb_board() -> impl Strategy<Value = Board> {
    proptest::collection::vec(0u8..7, 32).prop_map(|codes| {
        Square::playable()
            .zip(codes)
            .fold(Board::empty(), |board, (sq, code)| match code {
                3 => board.with_piece(sq, Piece::man(Side::Light)),
                4 => board.with_piece(sq, Piece::king(Side::Light)),
                5 => board.with_piece(sq, Piece::man(Side::Dark)),
                6 => board.with_piece(sq, Piece::king(Side::Dark)),
                _ => board,
            })
    })
}

/// Unit step and distance from `a` to `b`, if they share a diagonal.
fn diagonal(a: Square, b: Square) -> Option<(i8, i8, i8)> {
    let dr = b.row() as i8 - a.row() as i8;
    let dc = b.col() as i8 - a.col() as i8;
    if dr == 0 || dr.abs() != dc.abs() {
        return None;
    }
    Some((dr.signum(), dc.signum(), dr.abs()))
}

fn empty_between(board: &Board, from: Square, dr: i8, dc: i8, start: i8, end: i8) -> bool {
    (start..end).all(|k| from.offset(dr, dc, k).is_some_and(|sq| board.is_empty_at(sq)))
}

proptest! {
    #[test]
    fn man_moves_are_one_or_two_forward_steps(board in arb_board()) {
        for (from, piece) in board.pieces().filter(|(_, p)| !p.is_king()) {
            let forward = piece.side.forward();
            for m in &legal_moves(&board, from, false) {
                let (dr, dc, dist) = diagonal(from, m.to()).expect("diagonal move");
                prop_assert_eq!(dr, forward);
                prop_assert!(board.is_empty_at(m.to()));
                match *m {
                    Move::Simple { .. } => prop_assert_eq!(dist, 1),
                    Move::Capture { captured, .. } => {
                        prop_assert_eq!(dist, 2);
                        prop_assert_eq!(from.offset(dr, dc, 1), Some(captured));
                        let victim = board.piece_at(captured).expect("captured piece");
                        prop_assert!(piece.is_opponent_of(victim));
                    }
                }
            }
        }
    }

    #[test]
    fn king_moves_never_pass_a_second_piece(board in arb_board()) {
        for (from, piece) in board.pieces().filter(|(_, p)| p.is_king()) {
            for m in &legal_moves(&board, from, false) {
                let (dr, dc, dist) = diagonal(from, m.to()).expect("diagonal move");
                prop_assert!(board.is_empty_at(m.to()));
                match *m {
                    Move::Simple { .. } => {
                        prop_assert!(empty_between(&board, from, dr, dc, 1, dist));
                    }
                    Move::Capture { captured, .. } => {
                        let (cr, cc, cdist) = diagonal(from, captured).expect("same diagonal");
                        prop_assert_eq!((cr, cc), (dr, dc));
                        prop_assert!(cdist < dist);
                        prop_assert!(empty_between(&board, from, dr, dc, 1, cdist));
                        prop_assert!(empty_between(&board, from, dr, dc, cdist + 1, dist));
                        let victim = board.piece_at(captured).expect("captured piece");
                        prop_assert!(piece.is_opponent_of(victim));
                    }
                }
            }
        }
    }

    #[test]
    fn captures_are_exclusive(board in arb_board()) {
        for (from, _) in board.pieces() {
            let moves = legal_moves(&board, from, false);
            if moves.has_capture() {
                prop_assert!(moves.as_slice().iter().all(|m| m.is_capture()));
            }
        }
    }

    #[test]
    fn chain_only_is_the_capture_subset(board in arb_board()) {
        for (from, _) in board.pieces() {
            let chain = legal_moves(&board, from, true);
            prop_assert!(chain.as_slice().iter().all(|m| m.is_capture()));
            let full = legal_moves(&board, from, false);
            if full.has_capture() {
                prop_assert_eq!(chain, full);
            }
        }
    }

    #[test]
    fn turn_continues_exactly_while_captures_remain(board in arb_board()) {
        for (from, piece) in board.pieces() {
            for m in &legal_moves(&board, from, false) {
                let exec = apply_move(&board, from, *m, piece.side);
                let further = legal_moves(&exec.board, exec.to, true);
                if m.is_capture() {
                    prop_assert_eq!(exec.continuation.is_some(), further.has_capture());
                } else {
                    prop_assert!(exec.turn_passes());
                }
            }
        }
    }

    #[test]
    fn men_reaching_far_row_are_crowned(board in arb_board()) {
        for (from, piece) in board.pieces() {
            for m in &legal_moves(&board, from, false) {
                let exec = apply_move(&board, from, *m, piece.side);
                let landed = exec.board.piece_at(exec.to).expect("moved piece");
                let crowned = !piece.is_king() && exec.to.row() == piece.side.promotion_row();
                prop_assert_eq!(exec.promoted, crowned);
                prop_assert_eq!(landed.is_king(), piece.is_king() || crowned);
                prop_assert_eq!(landed.side, piece.side);
            }
        }
    }

    #[test]
    fn apply_move_leaves_input_board_untouched(board in arb_board()) {
        let snapshot = board;
        for (from, piece) in board.pieces() {
            for m in &legal_moves(&board, from, false) {
                let _ = apply_move(&board, from, *m, piece.side);
            }
        }
        prop_assert_eq!(board, snapshot);
    }
}
