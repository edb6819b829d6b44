//! Board squares addressed by row and column.

use std::fmt;

/// A square on the 10x9 board.
///
/// Row 0 is Black's back rank, row 9 is Red's. Index = row * 9 + col.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Number of rows.
    pub const ROWS: u8 = 10;
    /// Number of columns.
    pub const COLS: u8 = 9;
    /// Total number of squares.
    pub const COUNT: usize = 90;

    /// Create a square from a row and a column, returning `None` off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < Self::ROWS && col < Self::COLS {
            Some(Square(row * Self::COLS + col))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Square> {
        if index < Self::COUNT {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// Create a square without bounds checking.
    ///
    /// # Panics
    ///
    /// Debug-asserts that the coordinates are on the board.
    #[inline]
    pub(crate) const fn at(row: u8, col: u8) -> Square {
        debug_assert!(row < Self::ROWS && col < Self::COLS);
        Square(row * Self::COLS + col)
    }

    /// Return the zero-based index (0..90).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the row (0..10).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / Self::COLS
    }

    /// Return the column (0..9).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % Self::COLS
    }

    /// Step by a row/column delta, returning `None` if the result leaves the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row() as i8 + d_row;
        let col = self.col() as i8 + d_col;
        if row < 0 || col < 0 {
            return None;
        }
        Square::new(row as u8, col as u8)
    }

    /// Return `true` if the square lies inside either palace.
    #[inline]
    pub const fn in_palace(self) -> bool {
        let row = self.row();
        let col = self.col();
        col >= 3 && col <= 5 && (row <= 2 || row >= 7)
    }

    /// Iterate over all 90 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::COUNT as u8).map(Square)
    }
}

impl fmt::Display for Square {
    /// File letter `a`-`i` followed by rank `0`-`9`, counted from Red's side.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col()) as char;
        write!(f, "{}{}", file, Self::ROWS - 1 - self.row())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}
