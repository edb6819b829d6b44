//! Core Xiangqi types: board representation, compact encoding, and move generation.

mod board;
mod chess_move;
mod compact;
mod error;
mod movegen;
mod piece;
mod piece_kind;
mod side;
mod square;

pub use board::{Board, PrettyBoard};
pub use chess_move::Move;
pub use compact::STARTING_COMPACT;
pub use error::CompactError;
pub use movegen::{generate_moves, moves_for};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use side::Side;
pub use square::Square;
