//! Rook and cannon move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::square::Square;

use super::push_unless_own;

const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Rook: slide until the first piece, capturing it if it is an enemy.
pub(super) fn gen_rook(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    for (d_row, d_col) in ORTHOGONAL {
        let mut cursor = from.offset(d_row, d_col);
        while let Some(to) = cursor {
            if board.is_occupied(to) {
                push_unless_own(board, from, to, piece, out);
                break;
            }
            out.push(Move::new(from, to, piece));
            cursor = to.offset(d_row, d_col);
        }
    }
}

/// Cannon: slide over empty squares; capture only by jumping exactly one screen.
pub(super) fn gen_cannon(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    for (d_row, d_col) in ORTHOGONAL {
        let mut cursor = from.offset(d_row, d_col);
        let mut screened = false;
        while let Some(to) = cursor {
            match (screened, board.piece_on(to)) {
                (false, None) => out.push(Move::new(from, to, piece)),
                (false, Some(_)) => screened = true,
                (true, None) => {}
                (true, Some(_)) => {
                    push_unless_own(board, from, to, piece, out);
                    break;
                }
            }
            cursor = to.offset(d_row, d_col);
        }
    }
}
