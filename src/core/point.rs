//! Board coordinates.
//!
//! Rows and columns are 1-based. A `Point` may lie off the grid: move
//! generation builds candidate destinations one step past the edge and
//! filters them afterwards, so coordinates are signed.
//!
//! ## Notation
//!
//! Points are written as a column letter followed by a row digit, the way
//! the board is labelled when rendered:
//!
//! ```
//! use hexapawn::core::Point;
//!
//! let p: Point = "B3".parse().unwrap();
//! assert_eq!(p, Point::new(3, 2));
//! assert_eq!(p.to_string(), "B3");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i8 = 3;

/// Column letters used in coordinate notation.
pub const COL_NAMES: [char; BOARD_SIZE as usize] = ['A', 'B', 'C'];

/// A (row, column) coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    row: i8,
    col: i8,
}

impl Point {
    /// Create a point without bounds checking.
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Create a point that must lie on the grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate is off the board.
    pub fn on_grid(row: i8, col: i8) -> Result<Self> {
        let point = Self::new(row, col);
        if point.is_on_grid() {
            Ok(point)
        } else {
            Err(Error::OutOfBounds { point })
        }
    }

    /// Row index (1 is the top row as rendered).
    #[must_use]
    pub const fn row(self) -> i8 {
        self.row
    }

    /// Column index (1 is column `A`).
    #[must_use]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// `1 <= row <= 3 && 1 <= col <= 3`.
    #[must_use]
    pub const fn is_on_grid(self) -> bool {
        1 <= self.row && self.row <= BOARD_SIZE && 1 <= self.col && self.col <= BOARD_SIZE
    }

    /// The point shifted by the given deltas. The result may be off the grid.
    #[must_use]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// Iterate over every on-grid point in row-major order.
    pub fn all() -> impl Iterator<Item = Point> {
        (1..=BOARD_SIZE).flat_map(|row| (1..=BOARD_SIZE).map(move |col| Point::new(row, col)))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_grid() {
            write!(f, "{}{}", COL_NAMES[(self.col - 1) as usize], self.row)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

impl FromStr for Point {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let invalid = || Error::InvalidCoordinate {
            input: s.to_string(),
        };

        let mut chars = text.chars();
        let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        if !letter.is_ascii_alphabetic() {
            return Err(invalid());
        }
        let row = digit.to_digit(10).ok_or_else(invalid)?;

        let col = (letter.to_ascii_uppercase() as u8 - b'A') as i8 + 1;
        Point::on_grid(row as i8, col)
    }
}
