//! Opening book keyed by ply count.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use chess_core::{legal_moves, parse_move, Board, Move};

/// Candidate moves for one ply, written as move text (`7e5e`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntry {
    pub ply: u32,
    pub moves: Vec<String>,
}

impl BookEntry {
    pub fn new(ply: u32, moves: &[&str]) -> Self {
        Self {
            ply,
            moves: moves.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// The built-in book: the two main first moves for each side plus a
    /// developing knight move for Black's second.
    pub fn defaults() -> Vec<BookEntry> {
        vec![
            BookEntry::new(0, &["2e4e", "2d4d"]),
            BookEntry::new(1, &["7e5e", "7d5d"]),
            BookEntry::new(3, &["8b6c", "8g6f"]),
        ]
    }
}

#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    lines: HashMap<u32, Vec<String>>,
}

impl OpeningBook {
    /// Builds a book; entries sharing a ply are merged in order.
    pub fn new(entries: &[BookEntry]) -> Self {
        let mut lines: HashMap<u32, Vec<String>> = HashMap::new();
        for entry in entries {
            lines
                .entry(entry.ply)
                .or_default()
                .extend(entry.moves.iter().cloned());
        }
        Self { lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Book moves for this position that are legal right now.
    ///
    /// Entries that do not parse or are not legal here are skipped with a warning.
    pub fn candidates(&self, board: &Board) -> Vec<Move> {
        let Some(texts) = self.lines.get(&board.ply) else {
            return Vec::new();
        };
        let legal = legal_moves(board);

        let mut out = Vec::with_capacity(texts.len());
        for text in texts {
            let (from, to) = match parse_move(text) {
                Ok(squares) => squares,
                Err(err) => {
                    warn!(ply = board.ply, entry = %text, %err, "skipping malformed book entry");
                    continue;
                }
            };
            match legal.iter().find(|mv| mv.from == from && mv.to == to) {
                Some(mv) => out.push(*mv),
                None => warn!(ply = board.ply, entry = %text, "book move is not legal here"),
            }
        }
        out
    }

    /// A random legal book move for this position, or `None` to fall back to search.
    pub fn suggest<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Option<Move> {
        let picked = self.candidates(board).choose(rng).copied();
        if let Some(mv) = picked {
            debug!(ply = board.ply, mv = %mv, "book move");
        }
        picked
    }
}

#[cfg(test)]
#[path = "book_tests.rs"]
mod book_tests;
