//! Plain-text board diagram.

use chess_core::{Board, Coord};

/// File letters above the grid.
pub const HEADER: &str = "  A B C D E F G H";

/// Renders the board with rank 8 at the top.
///
/// Uppercase letters are White, lowercase Black, a space is an empty square:
///
/// ```text
///   A B C D E F G H
/// 8|r|n|b|q|k|b|n|r|
/// ```
pub fn render_board(board: &Board) -> String {
    let mut out = String::with_capacity(9 * 20);
    out.push_str(HEADER);
    out.push('\n');
    for row in 0..8 {
        out.push_str(&format!("{}|", 8 - row));
        for col in 0..8 {
            let ch = board
                .piece_at(Coord::at(row, col))
                .map_or(' ', |pc| pc.to_char());
            out.push(ch);
            out.push('|');
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
