use tracing::warn;

use crate::{
    attacks::{self, DIAGONAL, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL},
    board::{Board, king_home, rook_home},
    types::*,
};

/// Upper bound on moves kept per position. The most crowded legal position
/// known has 218 moves; the bound only exists to size buffers.
pub const DEFAULT_MAX_MOVES: usize = 256;

/// Generate all legal moves for the side to move, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`, cloning the position only once.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut tmp = board.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves for the side to move into the provided buffer.
pub fn legal_moves_into(board: &mut Board, out: &mut Vec<Move>) {
    let side = board.side_to_move;
    legal_moves_for(board, side, DEFAULT_MAX_MOVES, out);
}

/// Generate every legal move of `color`, keeping at most `max_moves`.
///
/// Order: castling, en passant, then the remaining moves in board-scan order
/// (a8..h8 down to a1..h1). The board is restored before returning.
pub fn legal_moves_for(board: &mut Board, color: Color, max_moves: usize, out: &mut Vec<Move>) {
    out.clear();
    castling_moves(board, color, out);
    en_passant_moves(board, color, out);
    piece_moves(board, color, out);

    // Filter illegal moves in-place by playing them on the mutable board.
    out.retain(|mv| {
        let undo = board.apply_move(mv);
        let exposed = board.in_check(color);
        board.undo_move(mv, undo);
        !exposed
    });

    if out.len() > max_moves {
        warn!(
            generated = out.len(),
            max_moves, "move list exceeded its capacity and was truncated"
        );
        out.truncate(max_moves);
    }
}

/// Number of legal moves `color` would have on this board.
pub fn count_legal_moves(board: &mut Board, color: Color) -> usize {
    let mut out = Vec::with_capacity(64);
    legal_moves_for(board, color, usize::MAX, &mut out);
    out.len()
}

/// The legal castling or en-passant move matching `from -> to`, if any.
pub(crate) fn special_move(board: &mut Board, from: Coord, to: Coord) -> Option<Move> {
    let color = board.side_to_move;
    let mut out = Vec::with_capacity(4);
    castling_moves(board, color, &mut out);
    en_passant_moves(board, color, &mut out);
    out.into_iter()
        .filter(|mv| mv.from == from && mv.to == to)
        .find(|mv| {
            let undo = board.apply_move(mv);
            let exposed = board.in_check(color);
            board.undo_move(mv, undo);
            !exposed
        })
}

fn castling_moves(board: &Board, c: Color, out: &mut Vec<Move>) {
    let home = king_home(c);
    let king = Piece::new(c, PieceKind::King);
    if board.piece_at(home) != Some(king) {
        return;
    }
    let rights = board.castling;
    if !rights.kingside(c) && !rights.queenside(c) {
        return;
    }
    // Can't castle out of check.
    if board.in_check(c) {
        return;
    }

    let enemy = c.other();
    let row = home.row;
    let rook = Some(Piece::new(c, PieceKind::Rook));

    // (has right, rook square, squares that must be empty, square the king crosses, king target)
    let wings = [
        (
            rights.kingside(c),
            rook_home(c, true),
            &[5i8, 6][..],
            5i8,
            6i8,
        ),
        (
            rights.queenside(c),
            rook_home(c, false),
            &[1i8, 2, 3][..],
            3i8,
            2i8,
        ),
    ];
    for (allowed, rook_sq, between, transit, target) in wings {
        if !allowed || board.piece_at(rook_sq) != rook {
            continue;
        }
        if between
            .iter()
            .any(|&col| board.piece_at(Coord::at(row, col)).is_some())
        {
            continue;
        }
        if attacks::is_square_attacked(board, Coord::at(row, transit), enemy) {
            continue;
        }
        let mut mv = Move::new(home, Coord::at(row, target), king, None);
        mv.is_castle = true;
        out.push(mv);
    }
}

fn en_passant_moves(board: &Board, c: Color, out: &mut Vec<Move>) {
    let Some(target) = board.en_passant else {
        return;
    };
    // The pawn that advanced two stands just past the square it skipped.
    let Some(victim_sq) = target.offset(-c.forward(), 0) else {
        return;
    };
    let victim = Piece::new(c.other(), PieceKind::Pawn);
    if board.piece_at(victim_sq) != Some(victim) || board.piece_at(target).is_some() {
        return;
    }

    let pawn = Piece::new(c, PieceKind::Pawn);
    for dc in [-1, 1] {
        if let Some(from) = victim_sq.offset(0, dc)
            && board.piece_at(from) == Some(pawn)
        {
            let mut mv = Move::new(from, target, pawn, Some(victim));
            mv.is_en_passant = true;
            out.push(mv);
        }
    }
}

fn piece_moves(board: &Board, c: Color, out: &mut Vec<Move>) {
    for (from, pc) in board.pieces() {
        if pc.color != c {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(board, from, pc, out),
            PieceKind::Knight => gen_steps(board, from, pc, &KNIGHT_OFFSETS, out),
            PieceKind::Bishop => gen_slider(board, from, pc, &DIAGONAL, out),
            PieceKind::Rook => gen_slider(board, from, pc, &ORTHOGONAL, out),
            PieceKind::Queen => {
                gen_slider(board, from, pc, &DIAGONAL, out);
                gen_slider(board, from, pc, &ORTHOGONAL, out);
            }
            PieceKind::King => gen_steps(board, from, pc, &KING_OFFSETS, out),
        }
    }
}

fn push_pawn_move(from: Coord, to: Coord, pc: Piece, captured: Option<Piece>, out: &mut Vec<Move>) {
    if to.row == pc.color.promotion_row() {
        for kind in PieceKind::PROMOTIONS {
            let mut mv = Move::new(from, to, pc, captured);
            mv.promotion = Some(kind);
            out.push(mv);
        }
    } else {
        out.push(Move::new(from, to, pc, captured));
    }
}

fn gen_pawn(board: &Board, from: Coord, pc: Piece, out: &mut Vec<Move>) {
    let fwd = pc.color.forward();

    // forward 1, then forward 2 from the starting row
    if let Some(to) = from.offset(fwd, 0)
        && board.piece_at(to).is_none()
    {
        push_pawn_move(from, to, pc, None, out);
        if from.row == pc.color.pawn_row()
            && let Some(to2) = from.offset(2 * fwd, 0)
            && board.piece_at(to2).is_none()
        {
            out.push(Move::new(from, to2, pc, None));
        }
    }

    // diagonal captures
    for dc in [-1, 1] {
        if let Some(to) = from.offset(fwd, dc)
            && let Some(target) = board.piece_at(to)
            && target.color != pc.color
        {
            push_pawn_move(from, to, pc, Some(target), out);
        }
    }
}

fn gen_steps(board: &Board, from: Coord, pc: Piece, offsets: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in offsets {
        if let Some(to) = from.offset(dr, dc) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to, pc, None)),
                Some(target) if target.color != pc.color => {
                    out.push(Move::new(from, to, pc, Some(target)))
                }
                _ => {}
            }
        }
    }
}

fn gen_slider(board: &Board, from: Coord, pc: Piece, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(to) = cur {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to, pc, None)),
                Some(target) if target.color != pc.color => {
                    out.push(Move::new(from, to, pc, Some(target)));
                    break;
                }
                _ => break,
            }
            cur = to.offset(dr, dc);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
