//! Attack detection on the mailbox board.
//!
//! One ray scan backs every "is this square attacked" question: check
//! detection, the king-safety filter in move generation, castling transit
//! squares, and the attacker/defender counts used by evaluation.

use crate::{board::Board, types::*};

pub const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// True if any piece of color `by` attacks `target`.
pub fn is_square_attacked(board: &Board, target: Coord, by: Color) -> bool {
    scan(board, target, by, true) > 0
}

/// Number of pieces of color `by` that directly attack `target`.
///
/// Pieces standing behind another attacker on the same ray are not counted.
pub fn count_attackers(board: &Board, target: Coord, by: Color) -> u32 {
    scan(board, target, by, false)
}

fn scan(board: &Board, target: Coord, by: Color, first_only: bool) -> u32 {
    let mut count = 0u32;

    // Rank/file rays: rook or queen anywhere before a blocker, king when adjacent.
    for (dr, dc) in ORTHOGONAL {
        let mut adjacent = true;
        let mut cur = target.offset(dr, dc);
        while let Some(at) = cur {
            if let Some(pc) = board.piece_at(at) {
                if pc.color == by
                    && (matches!(pc.kind, PieceKind::Rook | PieceKind::Queen)
                        || (adjacent && pc.kind == PieceKind::King))
                {
                    count += 1;
                    if first_only {
                        return count;
                    }
                }
                break;
            }
            adjacent = false;
            cur = at.offset(dr, dc);
        }
    }

    // Diagonals: bishop or queen before a blocker, pawn or king when adjacent.
    // A pawn of `by` attacks towards its own forward direction, so it sits
    // one row behind the target from its point of view.
    let pawn_row = -by.forward();
    for (dr, dc) in DIAGONAL {
        let mut adjacent = true;
        let mut cur = target.offset(dr, dc);
        while let Some(at) = cur {
            if let Some(pc) = board.piece_at(at) {
                if pc.color == by {
                    let attacks = match pc.kind {
                        PieceKind::Bishop | PieceKind::Queen => true,
                        PieceKind::King => adjacent,
                        PieceKind::Pawn => adjacent && dr == pawn_row,
                        _ => false,
                    };
                    if attacks {
                        count += 1;
                        if first_only {
                            return count;
                        }
                    }
                }
                break;
            }
            adjacent = false;
            cur = at.offset(dr, dc);
        }
    }

    for (dr, dc) in KNIGHT_OFFSETS {
        if let Some(at) = target.offset(dr, dc)
            && let Some(pc) = board.piece_at(at)
            && pc.color == by
            && pc.kind == PieceKind::Knight
        {
            count += 1;
            if first_only {
                return count;
            }
        }
    }

    count
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
