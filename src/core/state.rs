//! Game state snapshots.
//!
//! A `GameState` is immutable: applying a move returns a new state with its
//! own copy of the board, and the original stays valid. Search agents can
//! therefore hold any number of states from the same tree at once.
//!
//! Move generation lives in `rules::movegen`, terminal and winner
//! evaluation in `rules::terminal`.

use tracing::{trace, warn};

use super::action::Move;
use super::board::Board;
use super::player::Player;
use crate::error::{Error, Result};

/// Board, side to move and the last move applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    next_player: Player,
    last_move: Option<Move>,
}

impl GameState {
    /// Initial position, X to move.
    #[must_use]
    pub fn new_game() -> Self {
        Self::from_board(Board::new(), Player::X)
    }

    /// A state with an arbitrary board and no last move.
    #[must_use]
    pub fn from_board(board: Board, next_player: Player) -> Self {
        Self {
            board,
            next_player,
            last_move: None,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// State after `next_player` plays `mv`.
    ///
    /// Callers must only apply moves taken from [`GameState::legal_moves`].
    /// Debug builds assert this; release builds do not check it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the destination is off the grid.
    pub fn apply_move(&self, mv: Move) -> Result<GameState> {
        if !mv.to.is_on_grid() {
            return Err(Error::OutOfBounds { point: mv.to });
        }
        debug_assert!(
            self.is_legal(mv),
            "illegal move {mv} applied for {}",
            self.next_player
        );

        let mut board = self.board;
        board.place(self.next_player, mv.from, mv.to)?;
        trace!(player = %self.next_player, %mv, "applied move");

        Ok(GameState {
            board,
            next_player: self.next_player.other(),
            last_move: Some(mv),
        })
    }

    /// Checked variant of [`GameState::apply_move`] for untrusted input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalMove`] if `mv` is not one of the legal moves.
    pub fn try_apply_move(&self, mv: Move) -> Result<GameState> {
        if !self.is_legal(mv) {
            warn!(player = %self.next_player, %mv, "rejected illegal move");
            return Err(Error::IllegalMove {
                mv,
                player: self.next_player,
            });
        }
        self.apply_move(mv)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}
