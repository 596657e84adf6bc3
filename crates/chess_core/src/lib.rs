pub mod attacks;
pub mod board;
pub mod error;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod rules;
pub mod status;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use attacks::{count_attackers, is_square_attacked};
pub use board::*;
pub use error::*;
pub use movegen::*;
pub use notation::*;
pub use perft::{divide, perft};
pub use rules::{check_move, is_legal, is_pseudo_legal};
pub use status::*;
pub use types::*;

// =============================================================================
// Engine trait — implemented by move pickers
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Score in centipawns; positive favours White regardless of who moves
    pub score: i32,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Trait for anything that can pick a move for the side to move.
pub trait Engine {
    /// Search the position to a fixed depth.
    ///
    /// # Arguments
    /// * `board` - The current position to analyze
    /// * `depth` - Search depth in plies
    ///
    /// # Returns
    /// SearchResult containing best move, score, and statistics
    fn search(&mut self, board: &Board, depth: u8) -> SearchResult;

    /// Picks the move to play, consulting any opening knowledge first.
    /// Returns None when the side to move has no legal move.
    fn select_move(&mut self, board: &Board) -> Option<Move>;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
