//! Terminal detection and winner resolution.
//!
//! A game ends when a pawn stands on its goal row, when either side has no
//! pawns left, or when either side has no legal move. The winner is
//! resolved in a fixed order: X on goal, O on goal, O stuck, X stuck.

use crate::core::{GameState, Player};

impl GameState {
    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        let board = self.board();

        let goal_reached = board
            .occupied_points()
            .any(|(point, player)| point.row() == player.goal_row());
        let no_pawns = Player::ALL.iter().any(|&p| board.pawn_count(p) == 0);
        let no_moves = Player::ALL.iter().any(|&p| self.find_moves(p).is_empty());

        goal_reached || no_pawns || no_moves
    }

    /// The winner, if any condition decides one.
    ///
    /// Total over every state; gate on [`GameState::is_over`] to tell an
    /// unfinished game apart.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        if self.has_reached_goal(Player::X) {
            Some(Player::X)
        } else if self.has_reached_goal(Player::O) {
            Some(Player::O)
        } else if self.find_moves(Player::O).is_empty() {
            Some(Player::X)
        } else if self.find_moves(Player::X).is_empty() {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Whether `player` has a pawn on its goal row.
    #[must_use]
    pub fn has_reached_goal(&self, player: Player) -> bool {
        self.board()
            .occupied_points()
            .any(|(point, occupant)| occupant == player && point.row() == player.goal_row())
    }
}
