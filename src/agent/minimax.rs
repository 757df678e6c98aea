//! Exhaustive minimax search.
//!
//! Every position is scored from the point of view of the player to move:
//! a terminal position is a win if `winner()` is that player and a loss
//! otherwise. A move is worth the reverse of the position it leads to. The
//! Hexapawn tree is small enough to search to the end from the opening, so
//! by default there is no depth limit and values are exact.

use std::time::Instant;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::MinimaxConfig;
use super::rng::GameRng;
use super::stats::SearchStats;
use super::Agent;
use crate::core::{Board, GameState, Move, Player};
use crate::error::Result;

/// Game value for the player to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Loss,
    Draw,
    Win,
}

impl Outcome {
    /// The same result seen from the opponent's side.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Outcome::Loss => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
            Outcome::Win => Outcome::Loss,
        }
    }

    /// Value of a finished game for the player to move.
    #[must_use]
    pub fn of_terminal(state: &GameState) -> Self {
        match state.winner() {
            Some(winner) if winner == state.next_player() => Outcome::Win,
            Some(_) => Outcome::Loss,
            None => Outcome::Draw,
        }
    }
}

/// Agent that plays a best move by exhaustive search.
///
/// Ties between equally valued moves are broken with a seeded RNG.
pub struct MinimaxAgent {
    config: MinimaxConfig,
    rng: GameRng,
    cache: FxHashMap<(Board, Player), Outcome>,
    stats: SearchStats,
}

impl MinimaxAgent {
    pub fn new(config: MinimaxConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            rng,
            cache: FxHashMap::default(),
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &MinimaxConfig {
        &self.config
    }

    /// Statistics of the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Drop all cached position values.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Game value of `state` for its player to move.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`GameState::apply_move`].
    pub fn solve(&mut self, state: &GameState) -> Result<Outcome> {
        self.stats.reset();
        let start = Instant::now();
        let outcome = self.best_result(state, 0)?;
        self.stats.time_us = start.elapsed().as_micros() as u64;
        Ok(outcome)
    }

    /// Value of every legal move for the player to move, in move order.
    ///
    /// Statistics are reset and cover this call only.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`GameState::apply_move`].
    pub fn evaluate_moves(&mut self, state: &GameState) -> Result<Vec<(Move, Outcome)>> {
        self.stats.reset();
        let start = Instant::now();
        let mut scored = Vec::new();
        for mv in state.legal_moves() {
            let child = state.apply_move(mv)?;
            scored.push((mv, self.best_result(&child, 1)?.reverse()));
        }
        self.stats.time_us = start.elapsed().as_micros() as u64;
        Ok(scored)
    }

    fn best_result(&mut self, state: &GameState, depth: u32) -> Result<Outcome> {
        self.stats.nodes_visited += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        if state.is_over() {
            return Ok(Outcome::of_terminal(state));
        }
        if self.config.max_depth > 0 && depth >= self.config.max_depth {
            return Ok(Outcome::Draw);
        }

        let key = (*state.board(), state.next_player());
        if self.config.uses_cache() {
            if let Some(&cached) = self.cache.get(&key) {
                self.stats.cache_hits += 1;
                return Ok(cached);
            }
        }

        let mut best = Outcome::Loss;
        for mv in state.legal_moves() {
            let child = state.apply_move(mv)?;
            let ours = self.best_result(&child, depth + 1)?.reverse();
            if ours > best {
                best = ours;
                if best == Outcome::Win {
                    break;
                }
            }
        }

        if self.config.uses_cache() {
            self.cache.insert(key, best);
        }
        Ok(best)
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, state: &GameState) -> Result<Option<Move>> {
        if state.is_over() {
            return Ok(None);
        }

        let scored = self.evaluate_moves(state)?;

        let Some(best) = scored.iter().map(|(_, outcome)| *outcome).max() else {
            return Ok(None);
        };
        let candidates: Vec<Move> = scored
            .iter()
            .filter(|(_, outcome)| *outcome == best)
            .map(|(mv, _)| *mv)
            .collect();
        let choice = self.rng.choose(candidates.as_slice()).copied();

        debug!(
            player = %state.next_player(),
            mv = ?choice,
            outcome = ?best,
            candidates = candidates.len(),
            nodes = self.stats.nodes_visited,
            cache_hit_rate = self.stats.cache_hit_rate(),
            nodes_per_second = self.stats.nodes_per_second(),
            "minimax selected move"
        );
        Ok(choice)
    }

    fn name(&self) -> &str {
        "minimax"
    }
}
