//! # hexapawn
//!
//! Rules engine for Hexapawn: three pawns a side on a 3x3 board.
//!
//! ## Rules
//!
//! - O starts on row 1, X on row 3; X moves first.
//! - A pawn steps one row forward onto an empty square, or one row forward
//!   diagonally onto an opposing pawn, capturing it.
//! - A player wins by reaching the opponent's starting row. The game also
//!   ends when either side runs out of pawns or of legal moves.
//!
//! ## Design
//!
//! - **Immutable snapshots**: `GameState::apply_move` returns a new state
//!   owning its own copy of the board. States are `Copy` and can be held
//!   by any number of search branches or threads without locks.
//! - **Total queries**: `legal_moves`, `is_over` and `winner` are defined
//!   for every state and never fail.
//!
//! ## Modules
//!
//! - `core`: points, players, board, moves, game state
//! - `rules`: move generation, terminal evaluation, perft
//! - `agent`: minimax and random agents
//! - `error`: crate error type

pub mod agent;
pub mod core;
pub mod error;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Board, GameState, Move, Player, Point};

pub use crate::rules::{perft, MoveList, PerftCounts};

pub use crate::agent::{
    play_out, Agent, GameRng, MinimaxAgent, MinimaxConfig, Outcome, PlayOut, RandomAgent,
    SearchStats,
};

pub use crate::error::{Error, Result};
