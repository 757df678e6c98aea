//! Uniform random agent.

use tracing::debug;

use super::rng::GameRng;
use super::Agent;
use crate::core::{GameState, Move};
use crate::error::Result;

/// Plays a uniformly random legal move.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    pub fn with_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, state: &GameState) -> Result<Option<Move>> {
        if state.is_over() {
            return Ok(None);
        }

        let moves = state.legal_moves();
        let choice = self.rng.choose(moves.as_slice()).copied();
        debug!(player = %state.next_player(), mv = ?choice, "random agent selected move");
        Ok(choice)
    }

    fn name(&self) -> &str {
        "random"
    }
}
