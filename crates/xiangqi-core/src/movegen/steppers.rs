//! King, advisor, elephant, horse and pawn move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::push_unless_own;

const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Horse jumps as (target delta, leg delta). The leg square must be empty.
const HORSE_JUMPS: [((i8, i8), (i8, i8)); 8] = [
    ((-2, -1), (-1, 0)),
    ((-2, 1), (-1, 0)),
    ((2, -1), (1, 0)),
    ((2, 1), (1, 0)),
    ((-1, -2), (0, -1)),
    ((1, -2), (0, -1)),
    ((-1, 2), (0, 1)),
    ((1, 2), (0, 1)),
];

/// King: one orthogonal step inside the palace, plus the flying-general capture
/// when the two kings face each other on an open column.
pub(super) fn gen_king(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    for (d_row, d_col) in ORTHOGONAL {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        if to.in_palace() && piece.side().owns_row(to.row()) {
            push_unless_own(board, from, to, piece, out);
        }
    }

    let enemy_king = Piece::new(PieceKind::King, !piece.side());
    let step = piece.side().forward();
    let mut cursor = from.offset(step, 0);
    while let Some(to) = cursor {
        match board.piece_on(to) {
            Some(found) if found == enemy_king => {
                out.push(Move::new(from, to, piece));
                break;
            }
            Some(_) => break,
            None => cursor = to.offset(step, 0),
        }
    }
}

/// Advisor: one diagonal step inside the palace.
pub(super) fn gen_advisor(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    for (d_row, d_col) in DIAGONAL {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        if to.in_palace() && piece.side().owns_row(to.row()) {
            push_unless_own(board, from, to, piece, out);
        }
    }
}

/// Elephant: two diagonal steps, blocked by a piece on the eye, never across the river.
pub(super) fn gen_elephant(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    for (d_row, d_col) in DIAGONAL {
        let Some(eye) = from.offset(d_row, d_col) else {
            continue;
        };
        if board.is_occupied(eye) {
            continue;
        }
        let Some(to) = from.offset(2 * d_row, 2 * d_col) else {
            continue;
        };
        if piece.side().owns_row(to.row()) {
            push_unless_own(board, from, to, piece, out);
        }
    }
}

/// Horse: one orthogonal then one diagonal step; a piece on the leg blocks the jump.
pub(super) fn gen_horse(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    for ((d_row, d_col), (leg_row, leg_col)) in HORSE_JUMPS {
        let Some(leg) = from.offset(leg_row, leg_col) else {
            continue;
        };
        if board.is_occupied(leg) {
            continue;
        }
        if let Some(to) = from.offset(d_row, d_col) {
            push_unless_own(board, from, to, piece, out);
        }
    }
}

/// Pawn: one step forward; sideways steps too once across the river.
pub(super) fn gen_pawn(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let side = piece.side();
    if let Some(to) = from.offset(side.forward(), 0) {
        push_unless_own(board, from, to, piece, out);
    }
    if !side.owns_row(from.row()) {
        for d_col in [-1, 1] {
            if let Some(to) = from.offset(0, d_col) {
                push_unless_own(board, from, to, piece, out);
            }
        }
    }
}
