//! Per-piece movement rules for a single proposed move.
//!
//! `is_pseudo_legal` answers "can this piece get there" ignoring king safety;
//! `check_move` adds the king-safety test and describes any refusal. Castling
//! and en passant are generated separately (see `movegen`), so they are not
//! accepted here.

use crate::{board::Board, error::IllegalMove, types::*};

/// Movement-pattern check for the piece on `from`, ignoring whether its own
/// king ends up attacked.
pub fn is_pseudo_legal(board: &Board, from: Coord, to: Coord) -> bool {
    let Some(pc) = board.piece_at(from) else {
        return false;
    };
    if from == to {
        return false;
    }
    // The destination must be empty or hold an enemy piece.
    if let Some(target) = board.piece_at(to)
        && target.color == pc.color
    {
        return false;
    }

    let dr = to.row - from.row;
    let dc = to.col - from.col;
    match pc.kind {
        PieceKind::Pawn => pawn_reaches(board, pc.color, from, to),
        PieceKind::Knight => matches!((dr.abs(), dc.abs()), (1, 2) | (2, 1)),
        PieceKind::Bishop => dr.abs() == dc.abs() && path_clear(board, from, to),
        PieceKind::Rook => (dr == 0 || dc == 0) && path_clear(board, from, to),
        PieceKind::Queen => {
            (dr == 0 || dc == 0 || dr.abs() == dc.abs()) && path_clear(board, from, to)
        }
        PieceKind::King => dr.abs() <= 1 && dc.abs() <= 1,
    }
}

/// Full single-move legality: pseudo-legal and does not expose the mover's king.
pub fn is_legal(board: &Board, from: Coord, to: Coord) -> bool {
    check_move(&mut board.clone(), from, to).is_ok()
}

/// Builds the `Move` for `from -> to` if the rules allow it for the side to move.
///
/// A pawn reaching the last rank is given a queen. The board is left exactly
/// as it was whether or not the move is accepted.
pub fn check_move(board: &mut Board, from: Coord, to: Coord) -> Result<Move, IllegalMove> {
    let pc = board.piece_at(from).ok_or(IllegalMove::NoPiece(from))?;
    if pc.color != board.side_to_move {
        return Err(IllegalMove::WrongSide(from));
    }
    if !is_pseudo_legal(board, from, to) {
        return Err(IllegalMove::MovementRule { from, to });
    }

    let mut mv = Move::new(from, to, pc, board.piece_at(to));
    if pc.kind == PieceKind::Pawn && to.row == pc.color.promotion_row() {
        mv.promotion = Some(PieceKind::Queen);
    }
    if exposes_king(board, &mv) {
        return Err(IllegalMove::ExposesKing { from, to });
    }
    Ok(mv)
}

/// Plays `mv`, tests the mover's king, and takes the move back.
pub fn exposes_king(board: &mut Board, mv: &Move) -> bool {
    let undo = board.apply_move(mv);
    let exposed = board.in_check(mv.piece.color);
    board.undo_move(mv, undo);
    exposed
}

fn pawn_reaches(board: &Board, c: Color, from: Coord, to: Coord) -> bool {
    let dr = to.row - from.row;
    let dc = to.col - from.col;
    let fwd = c.forward();

    if dc == 0 {
        if dr == fwd {
            return board.piece_at(to).is_none();
        }
        if dr == 2 * fwd && from.row == c.pawn_row() {
            let mid = Coord::at(from.row + fwd, from.col);
            return board.piece_at(mid).is_none() && board.piece_at(to).is_none();
        }
        return false;
    }

    // Diagonal steps only capture; en passant is the generator's business.
    dr == fwd && dc.abs() == 1 && board.piece_at(to).is_some_and(|p| p.color != c)
}

/// Every square strictly between `from` and `to` on a straight line is empty.
fn path_clear(board: &Board, from: Coord, to: Coord) -> bool {
    let step_r = (to.row - from.row).signum();
    let step_c = (to.col - from.col).signum();
    let mut at = Coord::at(from.row + step_r, from.col + step_c);
    while at != to {
        if board.piece_at(at).is_some() {
            return false;
        }
        at = Coord::at(at.row + step_r, at.col + step_c);
    }
    true
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
