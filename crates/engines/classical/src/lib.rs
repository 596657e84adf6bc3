//! Classical Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over a hand-tuned evaluation,
//! with an optional opening book consulted before searching.

pub mod book;
pub mod config;
pub mod eval;
pub mod ordering;
pub mod search;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use chess_core::{Board, Engine, Move, SearchResult};

pub use book::{BookEntry, OpeningBook};
pub use config::{ConfigError, EngineConfig};
pub use eval::evaluate;
pub use search::{minimax, pick_best_move, SearchContext, MATE_SCORE};

/// Classical chess engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Minimax search, White maximising and Black minimising
/// - Material, piece-square, pawn-structure, king-safety and mobility evaluation
/// - MVV-LVA style move ordering
/// - An opening book keyed by ply
#[derive(Debug, Clone)]
pub struct ClassicalEngine {
    config: EngineConfig,
    book: OpeningBook,
    rng: StdRng,
    /// Node counter for statistics
    nodes: u64,
}

impl Default for ClassicalEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassicalEngine {
    pub fn new() -> Self {
        // The default configuration always passes validation.
        Self::with_rng(EngineConfig::default(), StdRng::from_entropy())
    }

    /// Builds an engine after validating `config`.
    pub fn from_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_rng(config, StdRng::from_entropy()))
    }

    /// Deterministic book choices, for tests and reproducible games.
    pub fn with_seed(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_rng(config, StdRng::seed_from_u64(seed)))
    }

    fn with_rng(config: EngineConfig, rng: StdRng) -> Self {
        let book = OpeningBook::new(&config.book);
        Self {
            config,
            book,
            rng,
            nodes: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Plays `suggestion` when given, otherwise searches to the configured depth.
    pub fn select_with(&mut self, board: &Board, suggestion: Option<Move>) -> Option<Move> {
        if let Some(mv) = suggestion {
            debug!(mv = %mv, "playing suggested move");
            return Some(mv);
        }
        let depth = self.config.search_depth;
        self.search(board, depth).best_move
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, board: &Board, depth: u8) -> SearchResult {
        let mut ctx = SearchContext::new(self.config.max_moves);
        let result = search::pick_best_move(board, depth, &mut ctx);
        self.nodes = ctx.nodes;

        SearchResult {
            best_move: result.map(|(mv, _)| mv),
            score: result.map(|(_, s)| s).unwrap_or(0),
            depth,
            nodes: self.nodes,
        }
    }

    fn select_move(&mut self, board: &Board) -> Option<Move> {
        let suggestion = if self.config.use_book {
            self.book.suggest(board, &mut self.rng)
        } else {
            None
        };
        self.select_with(board, suggestion)
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
