//! Compact board encoding: two digits per cell, row-major.
//!
//! Each cell is a kind digit (0 = empty, 1-7 = [`PieceKind`]) followed by a
//! side digit (0 = none, 1 = Red, 2 = Black). A full board is 180 digits.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::CompactError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::side::Side;
use crate::square::Square;

/// The compact string for the canonical initial layout.
pub const STARTING_COMPACT: &str = concat!(
    "122242526252422212",
    "000000000000000000",
    "003200000000003200",
    "720072007200720072",
    "000000000000000000",
    "000000000000000000",
    "710071007100710071",
    "003100000000003100",
    "000000000000000000",
    "112141516151412111",
);

impl FromStr for Board {
    type Err = CompactError;

    fn from_str(text: &str) -> Result<Board, CompactError> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        if chars.len() % 2 != 0 {
            return Err(CompactError::OddLength {
                length: chars.len(),
            });
        }
        let cells = chars.len() / 2;
        if cells != Square::COUNT {
            return Err(CompactError::WrongCellCount { found: cells });
        }

        let mut board = Board::empty();
        for (cell, pair) in chars.chunks_exact(2).enumerate() {
            let kind_digit = digit(pair[0])?;
            let side_digit = digit(pair[1])?;

            let sq = Square::at((cell / Square::COLS as usize) as u8, (cell % Square::COLS as usize) as u8);
            match (kind_digit, side_digit) {
                (0, 0) => {}
                (0, _) => return Err(CompactError::HalfEmptyCell { cell }),
                (_, 0) => {
                    // Validate the kind first so a bad digit is reported as such.
                    PieceKind::from_digit(kind_digit).ok_or(CompactError::InvalidKind {
                        cell,
                        digit: kind_digit,
                    })?;
                    return Err(CompactError::HalfEmptyCell { cell });
                }
                (k, s) => {
                    let kind = PieceKind::from_digit(k)
                        .ok_or(CompactError::InvalidKind { cell, digit: k })?;
                    let side = Side::from_digit(s)
                        .ok_or(CompactError::InvalidSide { cell, digit: s })?;
                    board.put(sq, Piece::new(kind, side));
                }
            }
        }

        Ok(board)
    }
}

fn digit((offset, character): (usize, char)) -> Result<u8, CompactError> {
    character
        .to_digit(10)
        .map(|d| d as u8)
        .ok_or(CompactError::InvalidCharacter { offset, character })
}

impl Board {
    /// Serialize the board to its compact 180-digit form.
    pub fn to_compact(&self) -> String {
        let mut out = String::with_capacity(Square::COUNT * 2);
        for sq in Square::all() {
            match self.piece_on(sq) {
                Some(piece) => {
                    out.push((b'0' + piece.kind().digit()) as char);
                    out.push((b'0' + piece.side().digit()) as char);
                }
                None => out.push_str("00"),
            }
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_compact())
    }
}
