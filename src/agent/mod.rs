//! Search agents built on the rules engine.
//!
//! ## Overview
//!
//! Agents only use the public query surface of `GameState`:
//! `legal_moves`, `apply_move`, `is_over` and `winner`. States are
//! immutable, so an agent can explore as many branches as it likes without
//! copying or undoing anything itself.
//!
//! - `MinimaxAgent`: exhaustive search with seeded tie-breaking
//! - `RandomAgent`: uniform random legal moves
//!
//! ## Usage
//!
//! ```rust
//! use hexapawn::agent::{play_out, Agent, MinimaxAgent, MinimaxConfig, RandomAgent};
//! use hexapawn::core::GameState;
//!
//! let mut x = MinimaxAgent::new(MinimaxConfig::default());
//! let mut o = RandomAgent::new(7);
//!
//! let result = play_out(GameState::new_game(), &mut x, &mut o).unwrap();
//! assert!(result.final_state.is_over());
//! ```

pub mod config;
pub mod minimax;
pub mod random;
pub mod rng;
pub mod stats;

pub use config::MinimaxConfig;
pub use minimax::{MinimaxAgent, Outcome};
pub use random::RandomAgent;
pub use rng::GameRng;
pub use stats::SearchStats;

use tracing::debug;

use crate::core::{GameState, Move, Player};
use crate::error::Result;

/// A move-selection strategy.
pub trait Agent {
    /// Choose a move for the player to move.
    ///
    /// Returns `None` if the game is over or no move is available.
    fn select_move(&mut self, state: &GameState) -> Result<Option<Move>>;

    /// Short name used in logs.
    fn name(&self) -> &str;
}

/// Result of [`play_out`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayOut {
    pub final_state: GameState,
    pub plies: u32,
    pub winner: Option<Player>,
}

/// Play a game from `start` to the end, `x` and `o` moving in turn.
///
/// Agent moves go through [`GameState::try_apply_move`].
///
/// # Errors
///
/// Returns [`crate::Error::IllegalMove`] if an agent picks an illegal move.
pub fn play_out<X, O>(start: GameState, x: &mut X, o: &mut O) -> Result<PlayOut>
where
    X: Agent + ?Sized,
    O: Agent + ?Sized,
{
    let mut state = start;
    let mut plies = 0;

    while !state.is_over() {
        let (choice, name) = match state.next_player() {
            Player::X => (x.select_move(&state)?, x.name()),
            Player::O => (o.select_move(&state)?, o.name()),
        };
        let Some(mv) = choice else {
            break;
        };
        debug!(agent = name, player = %state.next_player(), %mv, "play");
        state = state.try_apply_move(mv)?;
        plies += 1;
    }

    Ok(PlayOut {
        final_state: state,
        plies,
        winner: state.winner(),
    })
}
