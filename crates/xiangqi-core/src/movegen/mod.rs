//! Pseudo-legal move generation.
//!
//! Moves follow the piece rules only; whether a move leaves the mover's own
//! king exposed is not checked. Losing the king is scored by evaluation.

mod sliders;
mod steppers;

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::side::Side;
use crate::square::Square;

use self::sliders::{gen_cannon, gen_rook};
use self::steppers::{gen_advisor, gen_elephant, gen_horse, gen_king, gen_pawn};

/// Generate every move for `side` into `out`, replacing its previous contents.
///
/// Pieces are visited in row-major order of their squares. The buffer is
/// reused by the caller to avoid one allocation per call.
pub fn generate_moves(board: &Board, side: Side, out: &mut Vec<Move>) {
    out.clear();
    for (sq, piece) in board.pieces(side) {
        match piece.kind() {
            PieceKind::Rook => gen_rook(board, sq, piece, out),
            PieceKind::Cannon => gen_cannon(board, sq, piece, out),
            PieceKind::Horse => gen_horse(board, sq, piece, out),
            PieceKind::Elephant => gen_elephant(board, sq, piece, out),
            PieceKind::Advisor => gen_advisor(board, sq, piece, out),
            PieceKind::King => gen_king(board, sq, piece, out),
            PieceKind::Pawn => gen_pawn(board, sq, piece, out),
        }
    }
}

/// Convenience wrapper returning a fresh vector.
pub fn moves_for(board: &Board, side: Side) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    generate_moves(board, side, &mut out);
    out
}

/// Push `from -> to` unless `to` holds a piece of the mover's own side.
#[inline]
fn push_unless_own(board: &Board, from: Square, to: Square, piece: Piece, out: &mut Vec<Move>) {
    match board.piece_on(to) {
        Some(target) if target.side() == piece.side() => {}
        _ => out.push(Move::new(from, to, piece)),
    }
}
