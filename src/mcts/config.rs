//! Search configuration parameters.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a search is constructed with unusable parameters.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid config: {msg}")]
    InvalidConfig { msg: &'static str },
}

/// Parameters for one move search.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Seed for playout randomness. Determinism is per worker and per
    /// playout only.
    pub seed: u64,

    /// Target total Monte-Carlo playouts before a move is returned.
    pub playouts_per_move: u32,

    /// Number of parallel search threads; must be at least 1.
    pub thread_count: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            playouts_per_move: 1000,
            thread_count: 1,
        }
    }
}

impl SearchConfig {
    /// Create a config from the three search parameters.
    #[must_use]
    pub fn new(seed: u64, playouts_per_move: u32, thread_count: usize) -> Self {
        Self {
            seed,
            playouts_per_move,
            thread_count,
        }
    }

    /// Create a new config with a custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom playout target.
    #[must_use]
    pub fn with_playouts(mut self, playouts_per_move: u32) -> Self {
        self.playouts_per_move = playouts_per_move;
        self
    }

    /// Create a new config with a custom thread count.
    #[must_use]
    pub fn with_threads(mut self, thread_count: usize) -> Self {
        self.thread_count = thread_count;
        self
    }

    /// Check the parameters a search cannot run without.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.playouts_per_move == 0 {
            return Err(SearchError::InvalidConfig {
                msg: "playouts_per_move must be > 0",
            });
        }
        if self.thread_count == 0 {
            return Err(SearchError::InvalidConfig {
                msg: "thread_count must be > 0",
            });
        }
        Ok(())
    }
}
