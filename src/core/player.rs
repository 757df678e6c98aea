//! Player identity.
//!
//! Exactly two players exist. O starts on row 1 and advances down the
//! board; X starts on row 3 and advances up. Each player's goal row is
//! the other's starting row. X moves first.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::point::BOARD_SIZE;

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Both players, in winner-precedence order.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// The opponent.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Row this player's pawns start on.
    #[must_use]
    pub const fn start_row(self) -> i8 {
        match self {
            Player::X => BOARD_SIZE,
            Player::O => 1,
        }
    }

    /// Row this player must reach to win.
    #[must_use]
    pub const fn goal_row(self) -> i8 {
        self.other().start_row()
    }

    /// Row delta of a single forward step.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Player::X => -1,
            Player::O => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => f.write_str("X"),
            Player::O => f.write_str("O"),
        }
    }
}
