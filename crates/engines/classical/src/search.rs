//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Scores use the evaluator's convention: White maximises, Black minimises.

use chess_core::{legal_moves_for, Board, Color, Move, DEFAULT_MAX_MOVES};
use tracing::{debug, trace};

use crate::eval::evaluate_with;
use crate::ordering::order_moves;

/// Magnitude of a checkmate score before the remaining-depth adjustment.
pub const MATE_SCORE: i32 = 100_000;
/// Initial window bound, safely clear of any reachable score.
pub const INFINITY: i32 = i32::MAX / 2;

/// Per-search bookkeeping threaded through the recursion.
#[derive(Debug, Clone)]
pub struct SearchContext {
    /// Nodes visited, counting every move played.
    pub nodes: u64,
    /// Capacity handed to the move generator at every node.
    pub max_moves: usize,
    /// Move buffer reused by every leaf evaluation.
    scratch: Vec<Move>,
}

impl SearchContext {
    pub fn new(max_moves: usize) -> Self {
        Self {
            nodes: 0,
            max_moves,
            scratch: Vec::with_capacity(64),
        }
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MOVES)
    }
}

/// Best root move and its score, if the side to move has any move.
///
/// Ties keep the earliest move in searched order. A depth of 0 is searched as 1.
pub fn pick_best_move(board: &Board, depth: u8, ctx: &mut SearchContext) -> Option<(Move, i32)> {
    let depth = depth.max(1);
    let mut tmp = board.clone();
    let side = tmp.side_to_move;
    let maximizing = side == Color::White;

    let mut moves = Vec::with_capacity(64);
    legal_moves_for(&mut tmp, side, ctx.max_moves, &mut moves);
    if moves.is_empty() {
        debug!(?side, "no legal moves at root");
        return None;
    }
    order_moves(&tmp, &mut moves);

    let mut alpha = -INFINITY;
    let mut beta = INFINITY;
    let mut best: Option<(Move, i32)> = None;

    for mv in moves {
        let undo = tmp.apply_move(&mv);
        ctx.nodes += 1;
        let score = minimax(&mut tmp, depth - 1, alpha, beta, !maximizing, ctx);
        tmp.undo_move(&mv, undo);
        trace!(mv = %mv, score, "root move searched");

        let improves = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if improves {
            best = Some((mv, score));
            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
        }
    }

    if let Some((mv, score)) = best {
        debug!(
            best = %mv,
            score,
            depth,
            nodes = ctx.nodes,
            "search finished"
        );
    }
    best
}

/// Recursive minimax with alpha-beta pruning.
///
/// `maximizing` is the role of the side to move on `board`. A side with no
/// legal moves scores as mated (worse the sooner it happens) when in check,
/// otherwise as a 0 stalemate. The board is restored before returning.
pub fn minimax(
    board: &mut Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    ctx: &mut SearchContext,
) -> i32 {
    if depth == 0 {
        return evaluate_with(board, &mut ctx.scratch);
    }

    let side = board.side_to_move;
    let mut moves = Vec::with_capacity(64);
    legal_moves_for(board, side, ctx.max_moves, &mut moves);

    if moves.is_empty() {
        if !board.in_check(side) {
            return 0;
        }
        let mate = MATE_SCORE + depth as i32;
        return if maximizing { -mate } else { mate };
    }

    order_moves(board, &mut moves);

    let mut best = if maximizing { -INFINITY } else { INFINITY };
    for mv in moves {
        let undo = board.apply_move(&mv);
        ctx.nodes += 1;
        let score = minimax(board, depth - 1, alpha, beta, !maximizing, ctx);
        board.undo_move(&mv, undo);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if beta <= alpha {
            break;
        }
    }
    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
