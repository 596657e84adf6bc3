//! Engine configuration, loaded from TOML.
//!
//! Every field has a default, so a config file only needs the keys it changes:
//!
//! ```toml
//! search_depth = 4
//! use_book = true
//!
//! [[book]]
//! ply = 1
//! moves = ["7e5e", "7c5c"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use chess_core::DEFAULT_MAX_MOVES;

use crate::book::BookEntry;

/// The most legal moves any reachable position is known to have.
pub const MAX_KNOWN_MOVES: usize = 218;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("search_depth must be at least 1")]
    InvalidDepth,
    #[error("max_moves must be at least {min}, got {got}")]
    CapacityTooSmall { got: usize, min: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plies searched for every engine move.
    pub search_depth: u8,
    /// Move-list capacity per position.
    pub max_moves: usize,
    /// Consult the opening book before searching.
    pub use_book: bool,
    /// Opening book entries, keyed by ply.
    pub book: Vec<BookEntry>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: 3,
            max_moves: DEFAULT_MAX_MOVES,
            use_book: true,
            book: BookEntry::defaults(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth == 0 {
            return Err(ConfigError::InvalidDepth);
        }
        if self.max_moves < MAX_KNOWN_MOVES {
            return Err(ConfigError::CapacityTooSmall {
                got: self.max_moves,
                min: MAX_KNOWN_MOVES,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
