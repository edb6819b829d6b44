//! The two Xiangqi sides.

use std::fmt;
use std::ops::Not;

/// A side: Red (moves first, bottom of the board) or Black (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    Red = 0,
    Black = 1,
}

impl Side {
    /// Total number of sides.
    pub const COUNT: usize = 2;

    /// All sides in index order.
    pub const ALL: [Side; 2] = [Side::Red, Side::Black];

    /// Return the index (0 for Red, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposite side.
    #[inline]
    pub const fn flip(self) -> Side {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    /// Digit used for this side in the compact board encoding (1 = Red, 2 = Black).
    #[inline]
    pub const fn digit(self) -> u8 {
        self as u8 + 1
    }

    /// Parse a compact-encoding side digit. `0` (no side) is not a side.
    #[inline]
    pub const fn from_digit(digit: u8) -> Option<Side> {
        match digit {
            1 => Some(Side::Red),
            2 => Some(Side::Black),
            _ => None,
        }
    }

    /// Parse a side name, case-insensitive: `red`/`r` or `black`/`b`.
    pub fn from_name(name: &str) -> Option<Side> {
        match name.to_ascii_lowercase().as_str() {
            "red" | "r" => Some(Side::Red),
            "black" | "b" => Some(Side::Black),
            _ => None,
        }
    }

    /// Row delta of a forward pawn step for this side.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Red => -1,
            Side::Black => 1,
        }
    }

    /// Return `true` if `row` lies on this side's half of the river.
    #[inline]
    pub const fn owns_row(self, row: u8) -> bool {
        match self {
            Side::Red => row >= 5,
            Side::Black => row <= 4,
        }
    }
}

impl Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.flip()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Red => write!(f, "red"),
            Side::Black => write!(f, "black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Side;

    #[test]
    fn flip_roundtrip() {
        assert_eq!(Side::Red.flip(), Side::Black);
        assert_eq!(!Side::Black, Side::Red);
        assert_eq!(Side::Red.flip().flip(), Side::Red);
    }

    #[test]
    fn digits() {
        assert_eq!(Side::Red.digit(), 1);
        assert_eq!(Side::Black.digit(), 2);
        assert_eq!(Side::from_digit(1), Some(Side::Red));
        assert_eq!(Side::from_digit(2), Some(Side::Black));
        assert_eq!(Side::from_digit(0), None);
        assert_eq!(Side::from_digit(3), None);
    }

    #[test]
    fn names() {
        assert_eq!(Side::from_name("Red"), Some(Side::Red));
        assert_eq!(Side::from_name("b"), Some(Side::Black));
        assert_eq!(Side::from_name("white"), None);
        assert_eq!(format!("{}", Side::Black), "black");
    }

    #[test]
    fn river_halves() {
        assert!(Side::Red.owns_row(9));
        assert!(Side::Red.owns_row(5));
        assert!(!Side::Red.owns_row(4));
        assert!(Side::Black.owns_row(0));
        assert!(!Side::Black.owns_row(5));
    }
}
