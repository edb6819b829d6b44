//! Error types for the compact board encoding.

/// Errors that occur when parsing a compact board string.
///
/// The compact form is two digits per cell (kind digit, then side digit),
/// row-major, 90 cells.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompactError {
    /// The string has an odd number of characters, so it cannot be split into cells.
    #[error("compact board has odd length {length}")]
    OddLength {
        /// Number of characters found.
        length: usize,
    },
    /// The string describes more or fewer than 90 cells.
    #[error("compact board describes {found} cells, expected 90")]
    WrongCellCount {
        /// Number of cells described.
        found: usize,
    },
    /// A character is not an ASCII digit.
    #[error("invalid character '{character}' at offset {offset}")]
    InvalidCharacter {
        /// Byte offset of the character.
        offset: usize,
        /// The invalid character.
        character: char,
    },
    /// A kind digit outside 0-7.
    #[error("invalid piece kind digit {digit} in cell {cell}")]
    InvalidKind {
        /// Cell index (row * 9 + col).
        cell: usize,
        /// The digit found.
        digit: u8,
    },
    /// A side digit outside 0-2.
    #[error("invalid side digit {digit} in cell {cell}")]
    InvalidSide {
        /// Cell index (row * 9 + col).
        cell: usize,
        /// The digit found.
        digit: u8,
    },
    /// A piece kind without a side, or a side without a piece kind.
    #[error("cell {cell} mixes an empty and an occupied digit")]
    HalfEmptyCell {
        /// Cell index (row * 9 + col).
        cell: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::CompactError;

    #[test]
    fn display() {
        let err = CompactError::OddLength { length: 179 };
        assert_eq!(format!("{err}"), "compact board has odd length 179");
        let err = CompactError::InvalidSide { cell: 4, digit: 3 };
        assert_eq!(format!("{err}"), "invalid side digit 3 in cell 4");
    }
}
