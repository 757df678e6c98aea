//! Hexapawn rules evaluated over a `GameState`.
//!
//! - `movegen`: candidate generation and move legality
//! - `terminal`: game-over detection and winner resolution
//! - `perft`: game-tree size counting
//!
//! All queries are pure: they read the state's board and never modify it.

pub mod movegen;
pub mod perft;
pub mod terminal;

pub use movegen::MoveList;
pub use perft::{perft, PerftCounts};
