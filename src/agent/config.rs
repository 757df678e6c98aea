//! Minimax agent configuration.

use serde::{Deserialize, Serialize};

/// Minimax configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimaxConfig {
    /// Maximum search depth in plies (0 = unlimited).
    /// Positions at the limit are scored as a draw.
    pub max_depth: u32,

    /// Random seed for tie-breaking between equally good moves.
    pub seed: u64,

    /// Cache game values per position. Only used when `max_depth` is 0,
    /// since depth-limited values depend on the remaining depth.
    pub memoize: bool,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            max_depth: 0,
            seed: 42,
            memoize: true,
        }
    }
}

impl MinimaxConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom max depth.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Enable or disable the position cache.
    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    /// Whether the position cache is in effect.
    #[must_use]
    pub fn uses_cache(&self) -> bool {
        self.memoize && self.max_depth == 0
    }
}
