//! The Xiangqi board: a 10x9 grid of optional pieces.

use std::fmt;

use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::side::Side;
use crate::square::Square;

/// Back-rank kinds from column 0 to column 8.
const BACK_RANK: [PieceKind; 9] = [
    PieceKind::Rook,
    PieceKind::Horse,
    PieceKind::Elephant,
    PieceKind::Advisor,
    PieceKind::King,
    PieceKind::Advisor,
    PieceKind::Elephant,
    PieceKind::Horse,
    PieceKind::Rook,
];

/// Complete position: what stands on every square.
///
/// Which side moves next is not part of the board; the search is told.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board {
            cells: [None; Square::COUNT],
        }
    }

    /// Return the canonical initial layout (Black on rows 0-4, Red on rows 5-9).
    pub fn starting_position() -> Board {
        let mut board = Board::empty();

        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            let col = col as u8;
            board.put(Square::at(0, col), Piece::new(kind, Side::Black));
            board.put(Square::at(9, col), Piece::new(kind, Side::Red));
        }

        for col in [1, 7] {
            board.put(Square::at(2, col), Piece::BLACK_CANNON);
            board.put(Square::at(7, col), Piece::RED_CANNON);
        }

        for col in [0, 2, 4, 6, 8] {
            board.put(Square::at(3, col), Piece::BLACK_PAWN);
            board.put(Square::at(6, col), Piece::RED_PAWN);
        }

        board
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_some()
    }

    /// Place a piece, replacing whatever stood there.
    #[inline]
    pub fn put(&mut self, sq: Square, piece: Piece) {
        self.cells[sq.index()] = Some(piece);
    }

    /// Empty a square.
    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.cells[sq.index()] = None;
    }

    /// Apply a move in place: the moved piece lands on the destination and the
    /// origin is emptied.
    #[inline]
    pub fn apply_move(&mut self, mv: Move) {
        self.put(mv.to(), mv.piece());
        self.clear(mv.from());
    }

    /// Return a copy of the board with `mv` applied.
    pub fn make_move(&self, mv: Move) -> Board {
        let mut next = *self;
        next.apply_move(mv);
        next
    }

    /// Iterate over occupied squares in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_on(sq).map(|piece| (sq, piece)))
    }

    /// Iterate over the pieces of one side in row-major order.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.side() == side)
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as a 10x9 grid with the river marked.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in 0..Square::ROWS {
            write!(f, "{}  ", Square::ROWS - 1 - row)?;
            for col in 0..Square::COLS {
                let c = match board.piece_on(Square::at(row, col)) {
                    Some(piece) => piece.letter(),
                    None => '.',
                };
                if col + 1 < Square::COLS {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
            if row == 4 {
                writeln!(f, "   ~~~~~~~~~~~~~~~~~")?;
            }
        }
        write!(f, "   a b c d e f g h i")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::chess_move::Move;
    use crate::piece::Piece;
    use crate::side::Side;
    use crate::square::Square;

    #[test]
    fn starting_position_piece_on() {
        let board = Board::starting_position();
        assert_eq!(board.piece_on(Square::at(0, 4)), Some(Piece::BLACK_KING));
        assert_eq!(board.piece_on(Square::at(9, 4)), Some(Piece::RED_KING));
        assert_eq!(board.piece_on(Square::at(2, 1)), Some(Piece::BLACK_CANNON));
        assert_eq!(board.piece_on(Square::at(6, 8)), Some(Piece::RED_PAWN));
        assert_eq!(board.piece_on(Square::at(9, 2)), Some(Piece::RED_ELEPHANT));
        assert_eq!(board.piece_on(Square::at(4, 4)), None);
    }

    #[test]
    fn starting_piece_counts() {
        let board = Board::starting_position();
        assert_eq!(board.occupied().count(), 32);
        assert_eq!(board.pieces(Side::Red).count(), 16);
        assert_eq!(board.pieces(Side::Black).count(), 16);
    }

    #[test]
    fn apply_move_captures() {
        let mut board = Board::starting_position();
        let mv = Move::new(Square::at(7, 1), Square::at(0, 1), Piece::RED_CANNON);
        board.apply_move(mv);
        assert_eq!(board.piece_on(Square::at(0, 1)), Some(Piece::RED_CANNON));
        assert_eq!(board.piece_on(Square::at(7, 1)), None);
        assert_eq!(board.occupied().count(), 31);
    }

    #[test]
    fn make_move_leaves_original() {
        let board = Board::starting_position();
        let mv = Move::new(Square::at(6, 4), Square::at(5, 4), Piece::RED_PAWN);
        let next = board.make_move(mv);
        assert_eq!(board.piece_on(Square::at(6, 4)), Some(Piece::RED_PAWN));
        assert_eq!(next.piece_on(Square::at(5, 4)), Some(Piece::RED_PAWN));
        assert_ne!(board, next);
    }

    #[test]
    fn pretty_print() {
        let output = format!("{}", Board::starting_position().pretty());
        assert!(output.contains("r h e a k a e h r"));
        assert!(output.contains("R H E A K A E H R"));
        assert!(output.contains("~~~"));
        assert!(output.ends_with("a b c d e f g h i"));
    }
}
