//! Move representation.

use std::fmt;

use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::side::Side;
use crate::square::Square;

/// A move: origin square, destination square, and the piece that moves.
///
/// Captures are implicit: whatever stands on the destination is replaced.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    piece: Piece,
}

impl Move {
    /// Null move sentinel (a9 to a9 by the Red king). Never generated.
    pub const NULL: Move = Move {
        from: Square::at(0, 0),
        to: Square::at(0, 0),
        piece: Piece::RED_KING,
    };

    /// Create a move of `piece` from `from` to `to`.
    #[inline]
    pub const fn new(from: Square, to: Square, piece: Piece) -> Move {
        Move { from, to, piece }
    }

    /// Origin square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// The moving piece.
    #[inline]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    /// Kind of the moving piece.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.piece.kind()
    }

    /// Side of the moving piece.
    #[inline]
    pub const fn side(self) -> Side {
        self.piece.side()
    }

    /// Return `true` if this is the null move.
    #[inline]
    pub fn is_null(self) -> bool {
        self == Move::NULL
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.piece, self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({:?} {:?}->{:?})", self.piece, self.from, self.to)
    }
}

impl Default for Move {
    fn default() -> Self {
        Move::NULL
    }
}
