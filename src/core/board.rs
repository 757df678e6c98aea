//! Board occupancy.
//!
//! The board is a fixed 3x3 array of optional pawns. It is `Copy`, so every
//! game state owns an independent snapshot and nothing is shared between
//! states after a move is applied.
//!
//! ## Rendering
//!
//! `Display` draws the board the way the command-line game shows it:
//!
//! ```text
//!    A   B   C
//! 1  O | O | O
//! 2    |   |
//! 3  X | X | X
//! ```

use std::fmt;

use super::player::Player;
use super::point::{Point, BOARD_SIZE, COL_NAMES};
use crate::error::{Error, Result};

const CELLS: usize = (BOARD_SIZE * BOARD_SIZE) as usize;

/// 3x3 pawn occupancy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Player>; CELLS],
}

impl Board {
    /// Initial layout: O on row 1, X on row 3, middle row empty.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::empty();
        for player in Player::ALL {
            for col in 1..=BOARD_SIZE {
                let point = Point::new(player.start_row(), col);
                board.cells[Self::index(point)] = Some(player);
            }
        }
        board
    }

    /// A board with no pawns.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [None; CELLS],
        }
    }

    /// Builder: put a pawn on `point`, replacing whatever was there.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `point` is off the grid.
    pub fn with_pawn(mut self, point: Point, player: Player) -> Result<Self> {
        if !point.is_on_grid() {
            return Err(Error::OutOfBounds { point });
        }
        self.cells[Self::index(point)] = Some(player);
        Ok(self)
    }

    /// Occupant of `point`, or `None` if it is empty or off the grid.
    #[must_use]
    pub fn get(&self, point: Point) -> Option<Player> {
        if point.is_on_grid() {
            self.cells[Self::index(point)]
        } else {
            None
        }
    }

    /// Move a pawn: clear `from`, put `player` on `to`.
    ///
    /// `from` is trusted; only `to` is bounds-checked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `to` is off the grid. The board is
    /// left untouched in that case.
    pub fn place(&mut self, player: Player, from: Point, to: Point) -> Result<()> {
        if !to.is_on_grid() {
            return Err(Error::OutOfBounds { point: to });
        }
        if from.is_on_grid() {
            self.cells[Self::index(from)] = None;
        }
        self.cells[Self::index(to)] = Some(player);
        Ok(())
    }

    /// Bounds predicate.
    #[must_use]
    pub const fn is_on_grid(point: Point) -> bool {
        point.is_on_grid()
    }

    /// Row `player` must reach to win.
    #[must_use]
    pub const fn goal_row(player: Player) -> i8 {
        player.goal_row()
    }

    /// Occupied points with their occupants, in row-major order.
    pub fn occupied_points(&self) -> impl Iterator<Item = (Point, Player)> + '_ {
        Point::all().filter_map(move |point| self.get(point).map(|player| (point, player)))
    }

    /// Number of pawns `player` has on the board.
    #[must_use]
    pub fn pawn_count(&self, player: Player) -> usize {
        self.cells.iter().filter(|cell| **cell == Some(player)).count()
    }

    fn index(point: Point) -> usize {
        debug_assert!(point.is_on_grid(), "index of off-grid point {point}");
        ((point.row() - 1) * BOARD_SIZE + (point.col() - 1)) as usize
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for name in COL_NAMES {
            write!(f, " {name}  ")?;
        }
        writeln!(f)?;

        for row in 1..=BOARD_SIZE {
            let pieces: Vec<String> = (1..=BOARD_SIZE)
                .map(|col| match self.get(Point::new(row, col)) {
                    Some(player) => player.to_string(),
                    None => " ".to_string(),
                })
                .collect();
            writeln!(f, "{row}  {}", pieces.join(" | "))?;
        }
        Ok(())
    }
}
