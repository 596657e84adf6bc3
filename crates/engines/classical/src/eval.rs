//! Static position evaluation.
//!
//! Scores are in centipawns from White's point of view: positive favours
//! White, negative favours Black, whoever is on move. The search assigns the
//! maximising role to White on that basis.

use chess_core::{count_attackers, legal_moves_for, Board, Color, Coord, Move, Piece, PieceKind};

/// Material values in centipawns, indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [i32; 6] = [100, 320, 330, 500, 900, 0];

/// Non-pawn material (both sides together) at or below which the endgame tables apply.
pub const ENDGAME_MATERIAL: i32 = 2600;

const DOUBLED_PAWN_PENALTY: i32 = 20;
const ISOLATED_PAWN_PENALTY: i32 = 15;
/// Passed-pawn bonus by ranks travelled from the pawn's own side (index 1 = starting rank).
const PASSED_PAWN_BONUS: [i32; 8] = [0, 5, 10, 20, 35, 60, 100, 0];
const ROOK_OPEN_FILE_BONUS: i32 = 25;
const ROOK_HALF_OPEN_FILE_BONUS: i32 = 12;
const BISHOP_PAIR_BONUS: i32 = 30;
const CASTLED_BONUS: i32 = 40;
const HANGING_PIECE_DIVISOR: i32 = 4;
const UNDERDEFENDED_PENALTY: i32 = 10;
const KING_ZONE_PENALTY: i32 = 5;
const MOBILITY_WEIGHT: i32 = 2;

// Piece-square tables from White's side, laid out as printed: row 0 is rank 8.
// Black reads them mirrored top to bottom.
type Table = [[i32; 8]; 8];

#[rustfmt::skip]
const PAWN_TABLE: Table = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    [ 50,  50,  50,  50,  50,  50,  50,  50],
    [ 10,  10,  20,  30,  30,  20,  10,  10],
    [  5,   5,  10,  25,  25,  10,   5,   5],
    [  0,   0,   0,  20,  20,   0,   0,   0],
    [  5,  -5, -10,   0,   0, -10,  -5,   5],
    [  5,  10,  10, -20, -20,  10,  10,   5],
    [  0,   0,   0,   0,   0,   0,   0,   0],
];

#[rustfmt::skip]
const PAWN_ENDGAME_TABLE: Table = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    [ 80,  80,  80,  80,  80,  80,  80,  80],
    [ 50,  50,  50,  50,  50,  50,  50,  50],
    [ 30,  30,  30,  30,  30,  30,  30,  30],
    [ 20,  20,  20,  20,  20,  20,  20,  20],
    [ 10,  10,  10,  10,  10,  10,  10,  10],
    [ 10,  10,  10,  10,  10,  10,  10,  10],
    [  0,   0,   0,   0,   0,   0,   0,   0],
];

#[rustfmt::skip]
const KNIGHT_TABLE: Table = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-30,   0,  10,  15,  15,  10,   0, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   0,  15,  20,  20,  15,   0, -30],
    [-30,   5,  10,  15,  15,  10,   5, -30],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

#[rustfmt::skip]
const BISHOP_TABLE: Table = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,  10,  10,   5,   0, -10],
    [-10,   5,   5,  10,  10,   5,   5, -10],
    [-10,   0,  10,  10,  10,  10,   0, -10],
    [-10,  10,  10,  10,  10,  10,  10, -10],
    [-10,   5,   0,   0,   0,   0,   5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

#[rustfmt::skip]
const ROOK_TABLE: Table = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    [  5,  10,  10,  10,  10,  10,  10,   5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [  0,   0,   0,   5,   5,   0,   0,   0],
];

#[rustfmt::skip]
const QUEEN_TABLE: Table = [
    [-20, -10, -10,  -5,  -5, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,   5,   5,   5,   0, -10],
    [ -5,   0,   5,   5,   5,   5,   0,  -5],
    [  0,   0,   5,   5,   5,   5,   0,  -5],
    [-10,   5,   5,   5,   5,   5,   0, -10],
    [-10,   0,   5,   0,   0,   0,   0, -10],
    [-20, -10, -10,  -5,  -5, -10, -10, -20],
];

#[rustfmt::skip]
const KING_MIDDLEGAME_TABLE: Table = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [ 20,  20,   0,   0,   0,   0,  20,  20],
    [ 20,  30,  10,   0,   0,  10,  30,  20],
];

#[rustfmt::skip]
const KING_ENDGAME_TABLE: Table = [
    [-50, -40, -30, -20, -20, -30, -40, -50],
    [-30, -20, -10,   0,   0, -10, -20, -30],
    [-30, -10,  20,  30,  30,  20, -10, -30],
    [-30, -10,  30,  40,  40,  30, -10, -30],
    [-30, -10,  30,  40,  40,  30, -10, -30],
    [-30, -10,  20,  30,  30,  20, -10, -30],
    [-30, -30,   0,   0,   0,   0, -30, -30],
    [-50, -30, -30, -30, -30, -30, -30, -50],
];

/// Returns the material value of a piece in centipawns.
#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.idx()]
}

/// Evaluates the position. Positive is good for White.
///
/// The board is only borrowed mutably to play and take back moves while
/// counting mobility; it is returned unchanged.
pub fn evaluate(board: &mut Board) -> i32 {
    let mut scratch = Vec::with_capacity(64);
    evaluate_with(board, &mut scratch)
}

/// `evaluate` with a caller-owned move buffer, so a search can reuse one
/// buffer for every leaf.
pub fn evaluate_with(board: &mut Board, scratch: &mut Vec<Move>) -> i32 {
    let endgame = is_endgame(board);
    let mut score = side_score(board, Color::White, endgame) - side_score(board, Color::Black, endgame);

    legal_moves_for(board, Color::White, usize::MAX, scratch);
    let white_moves = scratch.len() as i32;
    legal_moves_for(board, Color::Black, usize::MAX, scratch);
    let black_moves = scratch.len() as i32;
    score += MOBILITY_WEIGHT * (white_moves - black_moves);

    score
}

/// True once both sides together hold no more than `ENDGAME_MATERIAL` in pieces.
pub fn is_endgame(board: &Board) -> bool {
    let material: i32 = board
        .pieces()
        .filter(|(_, pc)| !matches!(pc.kind, PieceKind::Pawn | PieceKind::King))
        .map(|(_, pc)| piece_value(pc.kind))
        .sum();
    material <= ENDGAME_MATERIAL
}

/// Everything except mobility, for one side, as a positive-is-good number.
fn side_score(board: &Board, c: Color, endgame: bool) -> i32 {
    let mut score = 0;
    let mut bishops = 0;

    for (at, pc) in board.pieces() {
        if pc.color != c {
            continue;
        }
        score += piece_value(pc.kind) + square_bonus(pc, at, endgame);
        match pc.kind {
            PieceKind::Bishop => bishops += 1,
            PieceKind::Rook => score += rook_file_bonus(board, c, at.col),
            _ => {}
        }
    }

    if bishops >= 2 {
        score += BISHOP_PAIR_BONUS;
    }
    score += pawn_structure(board, c);
    score += king_safety(board, c);
    score
}

fn square_bonus(pc: Piece, at: Coord, endgame: bool) -> i32 {
    let table = match (pc.kind, endgame) {
        (PieceKind::Pawn, false) => &PAWN_TABLE,
        (PieceKind::Pawn, true) => &PAWN_ENDGAME_TABLE,
        (PieceKind::Knight, _) => &KNIGHT_TABLE,
        (PieceKind::Bishop, _) => &BISHOP_TABLE,
        (PieceKind::Rook, _) => &ROOK_TABLE,
        (PieceKind::Queen, _) => &QUEEN_TABLE,
        (PieceKind::King, false) => &KING_MIDDLEGAME_TABLE,
        (PieceKind::King, true) => &KING_ENDGAME_TABLE,
    };
    let row = match pc.color {
        Color::White => at.row,
        Color::Black => 7 - at.row,
    };
    table[row as usize][at.col as usize]
}

/// Rows of `c`'s pawns, per file.
fn pawn_rows(board: &Board, c: Color) -> [Vec<i8>; 8] {
    let mut files: [Vec<i8>; 8] = Default::default();
    let pawn = Piece::new(c, PieceKind::Pawn);
    for (at, pc) in board.pieces() {
        if pc == pawn {
            files[at.col as usize].push(at.row);
        }
    }
    files
}

/// Passed, doubled and isolated pawn adjustments for `c`.
pub(crate) fn pawn_structure(board: &Board, c: Color) -> i32 {
    let own = pawn_rows(board, c);
    let enemy = pawn_rows(board, c.other());
    let mut score = 0;

    for col in 0..8usize {
        let count = own[col].len() as i32;
        if count == 0 {
            continue;
        }
        if count > 1 {
            score -= DOUBLED_PAWN_PENALTY * (count - 1);
        }

        let neighbours = [col.checked_sub(1), (col < 7).then_some(col + 1)];
        let isolated = neighbours
            .iter()
            .flatten()
            .all(|&n| own[n].is_empty());
        if isolated {
            score -= ISOLATED_PAWN_PENALTY * count;
        }

        for &row in &own[col] {
            // Passed: no enemy pawn ahead on this file or the adjacent ones.
            let ahead = |r: i8| match c {
                Color::White => r < row,
                Color::Black => r > row,
            };
            let blocked = [Some(col), neighbours[0], neighbours[1]]
                .iter()
                .flatten()
                .any(|&f| enemy[f].iter().any(|&r| ahead(r)));
            if !blocked {
                let travelled = (row - c.back_row()).unsigned_abs() as usize;
                score += PASSED_PAWN_BONUS[travelled];
            }
        }
    }
    score
}

/// Open-file bonus for a rook of `c` standing on `col`.
pub(crate) fn rook_file_bonus(board: &Board, c: Color, col: i8) -> i32 {
    let mut own = false;
    let mut enemy = false;
    for row in 0..8 {
        match board.piece_at(Coord::at(row, col)) {
            Some(pc) if pc.kind == PieceKind::Pawn && pc.color == c => own = true,
            Some(pc) if pc.kind == PieceKind::Pawn => enemy = true,
            _ => {}
        }
    }
    match (own, enemy) {
        (false, false) => ROOK_OPEN_FILE_BONUS,
        (false, true) => ROOK_HALF_OPEN_FILE_BONUS,
        _ => 0,
    }
}

/// Castled bonus minus threats against `c`'s pieces and king.
pub(crate) fn king_safety(board: &Board, c: Color) -> i32 {
    let mut score = 0;
    if board.castling.has_castled(c) {
        score += CASTLED_BONUS;
    }
    score -= threat_penalty(board, c);

    let enemy = c.other();
    let king = board.king_square(c);
    let pressure: u32 = chess_core::attacks::KING_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| king.offset(dr, dc))
        .map(|sq| count_attackers(board, sq, enemy))
        .sum();
    score -= KING_ZONE_PENALTY * pressure as i32;
    score
}

/// Penalty for `c`'s pieces that are attacked and undefended or outnumbered.
pub(crate) fn threat_penalty(board: &Board, c: Color) -> i32 {
    let enemy = c.other();
    let mut penalty = 0;
    for (at, pc) in board.pieces() {
        if pc.color != c || pc.kind == PieceKind::King {
            continue;
        }
        let attackers = count_attackers(board, at, enemy) as i32;
        if attackers == 0 {
            continue;
        }
        let defenders = count_attackers(board, at, c) as i32;
        if defenders == 0 {
            penalty += piece_value(pc.kind) / HANGING_PIECE_DIVISOR;
        } else if attackers > defenders {
            penalty += UNDERDEFENDED_PENALTY * (attackers - defenders);
        }
    }
    penalty
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
