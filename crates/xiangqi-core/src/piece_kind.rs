//! Xiangqi piece kinds.

use std::fmt;

/// The kind of a piece, without side information.
///
/// Discriminants are the digits used by the compact board encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Rook = 1,
    Horse = 2,
    Cannon = 3,
    Elephant = 4,
    Advisor = 5,
    King = 6,
    Pawn = 7,
}

impl PieceKind {
    /// Total number of piece kinds.
    pub const COUNT: usize = 7;

    /// All piece kinds in index order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::Rook,
        PieceKind::Horse,
        PieceKind::Cannon,
        PieceKind::Elephant,
        PieceKind::Advisor,
        PieceKind::King,
        PieceKind::Pawn,
    ];

    /// Return the contiguous index (0..7).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// Return the compact-encoding digit (1..=7).
    #[inline]
    pub const fn digit(self) -> u8 {
        self as u8
    }

    /// Parse a compact-encoding digit. `0` means an empty cell and is not a kind.
    #[inline]
    pub const fn from_digit(digit: u8) -> Option<PieceKind> {
        match digit {
            1 => Some(PieceKind::Rook),
            2 => Some(PieceKind::Horse),
            3 => Some(PieceKind::Cannon),
            4 => Some(PieceKind::Elephant),
            5 => Some(PieceKind::Advisor),
            6 => Some(PieceKind::King),
            7 => Some(PieceKind::Pawn),
            _ => None,
        }
    }

    /// Lowercase letter used in board dumps.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Rook => 'r',
            PieceKind::Horse => 'h',
            PieceKind::Cannon => 'c',
            PieceKind::Elephant => 'e',
            PieceKind::Advisor => 'a',
            PieceKind::King => 'k',
            PieceKind::Pawn => 'p',
        }
    }

    /// Parse a kind from its English name or its dump letter.
    pub fn from_name(name: &str) -> Option<PieceKind> {
        match name.to_ascii_lowercase().as_str() {
            "rook" | "chariot" | "r" => Some(PieceKind::Rook),
            "horse" | "knight" | "h" => Some(PieceKind::Horse),
            "cannon" | "c" => Some(PieceKind::Cannon),
            "elephant" | "bishop" | "e" => Some(PieceKind::Elephant),
            "advisor" | "guard" | "a" => Some(PieceKind::Advisor),
            "king" | "general" | "k" => Some(PieceKind::King),
            "pawn" | "soldier" | "p" => Some(PieceKind::Pawn),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
