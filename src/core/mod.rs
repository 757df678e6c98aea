//! Core game types: coordinates, players, board, moves and state.
//!
//! These are plain values. `Board` and `GameState` are `Copy`, so every
//! state owns its own board and can be shared freely across search trees.

pub mod action;
pub mod board;
pub mod player;
pub mod point;
pub mod state;

pub use action::Move;
pub use board::Board;
pub use player::Player;
pub use point::{Point, BOARD_SIZE};
pub use state::GameState;
