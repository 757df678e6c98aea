//! A single ply: origin and destination.
//!
//! Moves are plain data. Whether a move is legal depends on the state it
//! is applied to, so nothing is checked at construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::point::Point;
use crate::error::{Error, Result};

/// Move a pawn from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Point,
    pub to: Point,
}

impl Move {
    #[must_use]
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    /// Row delta from origin to destination.
    #[must_use]
    pub const fn row_delta(&self) -> i8 {
        self.to.row() - self.from.row()
    }

    /// Column delta from origin to destination.
    #[must_use]
    pub const fn col_delta(&self) -> i8 {
        self.to.col() - self.from.col()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// Accepts `"A3-A2"`, `"A3 A2"` and `"A3A2"`.
///
/// The separator splits the input into exactly two coordinates before
/// either is parsed, so `"A-3A2"` is rejected.
impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidMove {
            input: s.to_string(),
        };

        let parts: Vec<&str> = if s.contains('-') {
            s.split('-').map(str::trim).collect()
        } else {
            s.split_whitespace().collect()
        };
        let (from, to) = match parts.as_slice() {
            [from, to] => (*from, *to),
            [compact] if compact.len() == 4 && compact.is_ascii() => compact.split_at(2),
            _ => return Err(invalid()),
        };

        Ok(Move::new(from.parse()?, to.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deltas() {
        let mv = Move::new(Point::new(3, 1), Point::new(2, 2));
        assert_eq!(mv.row_delta(), -1);
        assert_eq!(mv.col_delta(), 1);
    }

    #[test]
    fn test_parse_forms() {
        let expected = Move::new(Point::new(3, 1), Point::new(2, 1));
        assert_eq!("A3-A2".parse::<Move>().unwrap(), expected);
        assert_eq!("A3 A2".parse::<Move>().unwrap(), expected);
        assert_eq!("a3a2".parse::<Move>().unwrap(), expected);
        assert_eq!("  A3 - A2 ".parse::<Move>().unwrap(), expected);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("A3".parse::<Move>(), Err(Error::InvalidMove { .. })));
        assert!(matches!("A3-A2-A1".parse::<Move>(), Err(Error::InvalidMove { .. })));
        assert!(matches!("A3-X?".parse::<Move>(), Err(Error::InvalidCoordinate { .. })));
        assert!(matches!("A3-A4".parse::<Move>(), Err(Error::OutOfBounds { .. })));
        assert!(matches!("".parse::<Move>(), Err(Error::InvalidMove { .. })));
    }

    #[test]
    fn test_parse_rejects_split_coordinates() {
        assert!("A-3A2".parse::<Move>().is_err());
        assert!("A 3 A 2".parse::<Move>().is_err());
        assert!("A3-A 2".parse::<Move>().is_err());
        assert!("A3 - ".parse::<Move>().is_err());
    }

    #[test]
    fn test_display() {
        let mv = Move::new(Point::new(3, 2), Point::new(2, 3));
        assert_eq!(mv.to_string(), "B3-C2");
    }
}
