//! Positional bonuses on top of material.
//!
//! Tables are written from Red's point of view: row 0 is Black's back rank,
//! row 9 is Red's. Black looks them up through the vertically mirrored row.
//! Kinds without a table (advisor, elephant) get no bonus.

use xiangqi_core::{PieceKind, Side, Square};

type Table = [[i32; Square::COLS as usize]; Square::ROWS as usize];

/// Pawns gain value as they cross the river and close in on the palace.
#[rustfmt::skip]
const PAWN_PST: Table = [
    [ 0,  0,  0,  2,  4,  2,  0,  0,  0],
    [10, 15, 25, 32, 34, 32, 25, 15, 10],
    [10, 15, 22, 27, 27, 27, 22, 15, 10],
    [10, 13, 17, 19, 20, 19, 17, 13, 10],
    [ 5,  8, 10, 17, 19, 17, 10,  8,  5],
    [-3,  0,  3,  0,  6,  0,  3,  0, -3],
    [-3,  0, -3,  0,  5,  0, -3,  0, -3],
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0],
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0],
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0],
];

/// Horses are strong just across the river and weak on the back rank.
#[rustfmt::skip]
const HORSE_PST: Table = [
    [ 0,  0,  0,  6,  0,  6,  0,  0,  0],
    [ 0,  6, 13,  7,  4,  7, 13,  6,  0],
    [ 2,  8,  9, 13,  9, 13,  9,  8,  2],
    [ 3, 18, 10, 17, 10, 17, 10, 18,  3],
    [ 0, 10,  9, 13, 14, 13,  9, 10,  0],
    [ 0,  8, 11, 12, 13, 12, 11,  8,  0],
    [ 2,  4,  8,  5,  8,  5,  8,  4,  2],
    [ 3,  2,  4,  5,  2,  5,  4,  2,  3],
    [-5,  0,  2,  3,-12,  3,  2,  0, -5],
    [-2, -5,  0, -2,  0, -2,  0, -5, -2],
];

#[rustfmt::skip]
const ROOK_PST: Table = [
    [ 6,  8,  7, 13, 14, 13,  7,  8,  6],
    [ 6, 12,  9, 16, 33, 16,  9, 12,  6],
    [ 6,  8,  7, 14, 16, 14,  7,  8,  6],
    [ 6, 13, 13, 16, 16, 16, 13, 13,  6],
    [ 8, 11, 11, 14, 15, 14, 11, 11,  8],
    [ 8, 12, 12, 14, 15, 14, 12, 12,  8],
    [ 4,  9,  4, 12, 14, 12,  4,  9,  4],
    [-2,  8,  4, 12, 12, 12,  4,  8, -2],
    [ 0,  8,  6, 12,  0, 12,  6,  8,  0],
    [-6,  6,  4, 12,  0, 12,  4,  6, -6],
];

#[rustfmt::skip]
const CANNON_PST: Table = [
    [ 0,  0, -4, -9,-10, -9, -4,  0,  0],
    [-2, -2, -4, -8,-11, -8, -4, -2, -2],
    [-3, -3, -4, -9, -8, -9, -4, -3, -3],
    [-4, -1, -1, -2,  0, -2, -1, -1, -4],
    [-4, -4, -4, -4,  0, -4, -4, -4, -4],
    [-5, -4, -1, -4,  0, -4, -1, -4, -5],
    [-4, -4, -4, -4, -4, -4, -4, -4, -4],
    [-3, -4,  0, -1,  1, -1,  0, -4, -3],
    [-4, -3, -2, -2, -2, -2, -2, -3, -4],
    [-4, -4, -3, -1, -1, -1, -3, -4, -4],
];

/// King safety: stay on the back rank, centre file preferred.
#[rustfmt::skip]
const KING_PST: Table = [
    [0, 0, 0,  0,  0,  0, 0, 0, 0],
    [0, 0, 0,  0,  0,  0, 0, 0, 0],
    [0, 0, 0,  0,  0,  0, 0, 0, 0],
    [0, 0, 0,  0,  0,  0, 0, 0, 0],
    [0, 0, 0,  0,  0,  0, 0, 0, 0],
    [0, 0, 0,  0,  0,  0, 0, 0, 0],
    [0, 0, 0,  0,  0,  0, 0, 0, 0],
    [0, 0, 0,  1,  1,  1, 0, 0, 0],
    [0, 0, 0,  2,  2,  2, 0, 0, 0],
    [0, 0, 0, 11, 15, 11, 0, 0, 0],
];

/// Positional bonus for a `kind` piece of `side` on `sq`.
pub fn pst_value(kind: PieceKind, side: Side, sq: Square) -> i32 {
    let row = match side {
        Side::Red => sq.row() as usize,
        Side::Black => (Square::ROWS - 1 - sq.row()) as usize,
    };
    let col = sq.col() as usize;

    match kind {
        PieceKind::Pawn => PAWN_PST[row][col],
        PieceKind::Horse => HORSE_PST[row][col],
        PieceKind::Rook => ROOK_PST[row][col],
        PieceKind::Cannon => CANNON_PST[row][col],
        PieceKind::King => KING_PST[row][col],
        PieceKind::Advisor | PieceKind::Elephant => 0,
    }
}
