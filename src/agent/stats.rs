//! Search statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Statistics collected during one minimax search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions evaluated, including cache hits.
    pub nodes_visited: u64,

    /// Positions answered from the cache.
    pub cache_hits: u64,

    /// Deepest ply reached below the root.
    pub max_depth: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fraction of visited positions answered from the cache.
    #[must_use]
    pub fn cache_hit_rate(&self) -> f64 {
        if self.nodes_visited == 0 {
            0.0
        } else {
            self.cache_hits as f64 / self.nodes_visited as f64
        }
    }

    /// Positions visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
