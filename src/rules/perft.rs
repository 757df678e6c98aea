//! Game-tree size counting.
//!
//! `perft` walks every legal line from a state to a fixed depth. Lines that
//! reach a terminal state before the final ply stop there and are counted
//! as game ends.

use crate::core::GameState;
use crate::error::Result;

/// Counts collected by [`perft`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    /// States reached at exactly the requested depth.
    pub nodes: u64,
    /// Moves on the final ply that captured a pawn.
    pub captures: u64,
    /// Terminal states reached before the requested depth.
    pub game_ends: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.game_ends += rhs.game_ends;
    }
}

/// Count move sequences of length `depth` from `state`.
///
/// # Errors
///
/// Propagates errors from [`GameState::apply_move`]; none occur for states
/// reached through legal play.
pub fn perft(state: &GameState, depth: u8) -> Result<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    if state.is_over() {
        return Ok(PerftCounts {
            game_ends: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in state.legal_moves() {
        let child = state.apply_move(mv)?;

        if depth == 1 {
            total.nodes += 1;
            if state.board().get(mv.to).is_some() {
                total.captures += 1;
            }
        } else {
            total.merge(perft(&child, depth - 1)?);
        }
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Player, Point};

    #[test]
    fn test_perft_depth_zero() {
        let counts = perft(&GameState::new_game(), 0).unwrap();
        assert_eq!(counts.nodes, 1);
    }

    #[test]
    fn test_perft_opening() {
        let state = GameState::new_game();

        let one = perft(&state, 1).unwrap();
        assert_eq!(one.nodes, 3);
        assert_eq!(one.captures, 0);

        let two = perft(&state, 2).unwrap();
        assert_eq!(two.nodes, 10);
        assert_eq!(two.captures, 4);
        assert_eq!(two.game_ends, 0);
    }

    #[test]
    fn test_perft_stops_at_terminal_state() {
        // O has no pawns; X could still move, but the game is over.
        let board = Board::empty().with_pawn(Point::new(2, 2), Player::X).unwrap();
        let state = GameState::from_board(board, Player::X);

        let counts = perft(&state, 3).unwrap();
        assert_eq!(counts.nodes, 0);
        assert_eq!(counts.game_ends, 1);
    }
}
