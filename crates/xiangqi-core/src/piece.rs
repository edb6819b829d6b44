//! A piece with its side, bit-packed into a single byte.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::side::Side;

/// A piece belonging to one side, bit-packed into a single byte.
///
/// Bit layout:
/// - bits 0-2: [`PieceKind`] digit (1-7)
/// - bit 3: [`Side`] (0 = Red, 1 = Black)
///
/// Valid raw values are 1-7 (Red pieces) and 9-15 (Black pieces).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    pub const RED_ROOK: Piece = Piece::new(PieceKind::Rook, Side::Red);
    pub const RED_HORSE: Piece = Piece::new(PieceKind::Horse, Side::Red);
    pub const RED_CANNON: Piece = Piece::new(PieceKind::Cannon, Side::Red);
    pub const RED_ELEPHANT: Piece = Piece::new(PieceKind::Elephant, Side::Red);
    pub const RED_ADVISOR: Piece = Piece::new(PieceKind::Advisor, Side::Red);
    pub const RED_KING: Piece = Piece::new(PieceKind::King, Side::Red);
    pub const RED_PAWN: Piece = Piece::new(PieceKind::Pawn, Side::Red);

    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Side::Black);
    pub const BLACK_HORSE: Piece = Piece::new(PieceKind::Horse, Side::Black);
    pub const BLACK_CANNON: Piece = Piece::new(PieceKind::Cannon, Side::Black);
    pub const BLACK_ELEPHANT: Piece = Piece::new(PieceKind::Elephant, Side::Black);
    pub const BLACK_ADVISOR: Piece = Piece::new(PieceKind::Advisor, Side::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Side::Black);
    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Side::Black);

    /// Create a piece from a kind and a side.
    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Piece {
        Piece((side as u8) << 3 | kind.digit())
    }

    /// Return the piece kind (the lower 3 bits).
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match PieceKind::from_digit(self.0 & 0x07) {
            Some(kind) => kind,
            None => PieceKind::Pawn,
        }
    }

    /// Return the side (bit 3).
    #[inline]
    pub const fn side(self) -> Side {
        match self.0 >> 3 {
            0 => Side::Red,
            _ => Side::Black,
        }
    }

    /// Return the raw packed byte.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Dump character: uppercase for Red, lowercase for Black.
    #[inline]
    pub fn letter(self) -> char {
        let base = self.kind().letter();
        match self.side() {
            Side::Red => base.to_ascii_uppercase(),
            Side::Black => base,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side_prefix = match self.side() {
            Side::Red => 'R',
            Side::Black => 'B',
        };
        write!(f, "{}{}", side_prefix, self.kind().letter().to_ascii_uppercase())
    }
}
