//! Heuristic move ordering ahead of the alpha-beta recursion.
//!
//! Ordering only changes how early cutoffs happen; the searched value is the
//! same for any permutation.

use std::cmp::Reverse;

use chess_core::{count_attackers, is_square_attacked, Board, Move};

use crate::eval::piece_value;

/// Bonus when the captured piece has no defender.
const UNDEFENDED_VICTIM_BONUS: i32 = 500;
/// Multiplier applied to the promotion piece's value.
const PROMOTION_SCALE: i32 = 10;
const CASTLE_BONUS: i32 = 300;
/// Divisor applied to the mover's value when it lands on an attacked square.
const ATTACKED_LANDING_DIVISOR: i32 = 2;

/// Pre-search score of `mv` on `board` (the position before the move).
pub fn score_move(board: &Board, mv: &Move) -> i32 {
    let mut score = 0;
    let attacker = piece_value(mv.piece.kind);

    if let Some(victim) = mv.captured {
        score += piece_value(victim.kind) * 10 - attacker;
        if count_attackers(board, mv.capture_square(), victim.color) == 0 {
            score += UNDEFENDED_VICTIM_BONUS;
        }
    }
    if let Some(kind) = mv.promotion {
        score += piece_value(kind) * PROMOTION_SCALE;
    }
    if mv.is_castle {
        score += CASTLE_BONUS;
    }
    if is_square_attacked(board, mv.to, mv.piece.color.other()) {
        score -= attacker / ATTACKED_LANDING_DIVISOR;
    }
    score
}

/// Scores every move and sorts them best first. Equal scores keep their
/// generation order.
pub fn order_moves(board: &Board, moves: &mut [Move]) {
    for mv in moves.iter_mut() {
        mv.score = score_move(board, mv);
    }
    moves.sort_by_key(|mv| Reverse(mv.score));
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
