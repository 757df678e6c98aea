//! Move generation and legality.
//!
//! Every pawn has at most three candidate destinations, one row forward:
//! the left diagonal, straight ahead and the right diagonal. A straight
//! move needs an empty destination; a diagonal move needs an opposing pawn
//! there (capture). Nothing else is legal.

use smallvec::SmallVec;

use crate::core::{GameState, Move, Player};

/// Legal moves for one side. Three pawns with three candidates each never
/// spill to the heap.
pub type MoveList = SmallVec<[Move; 9]>;

/// Column offsets of the candidate destinations, in enumeration order.
const CANDIDATE_COLS: [i8; 3] = [-1, 0, 1];

impl GameState {
    /// Legal moves for the player to move.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.find_moves(self.next_player())
    }

    /// Legal moves for `player` on the current board, whoever is to move.
    ///
    /// Grouped by originating pawn in row-major board order; each pawn
    /// contributes left diagonal, straight, right diagonal.
    #[must_use]
    pub fn find_moves(&self, player: Player) -> MoveList {
        let mut moves = MoveList::new();

        for (origin, occupant) in self.board().occupied_points() {
            if occupant != player {
                continue;
            }
            for d_col in CANDIDATE_COLS {
                let mv = Move::new(origin, origin.offset(player.forward(), d_col));
                if self.is_valid_move(mv, player) {
                    moves.push(mv);
                }
            }
        }

        moves
    }

    /// Whether `player` may play `mv` on the current board.
    ///
    /// Safe to call with arbitrary moves: the origin must hold one of
    /// `player`'s pawns and the step must go in `player`'s forward direction.
    #[must_use]
    pub fn is_valid_move(&self, mv: Move, player: Player) -> bool {
        let board = self.board();

        if !mv.to.is_on_grid() || board.get(mv.from) != Some(player) {
            return false;
        }
        if mv.row_delta() != player.forward() {
            return false;
        }

        let destination = board.get(mv.to);
        let is_forward = mv.col_delta() == 0 && destination.is_none();
        let is_capture = mv.col_delta().abs() == 1 && destination == Some(player.other());

        is_forward || is_capture
    }

    /// Whether `mv` is legal for the player to move.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.is_valid_move(mv, self.next_player())
    }
}
