//! Move generation seam used by the searcher.

use xiangqi_core::{Board, Move, Side, generate_moves};

/// Produces the moves the search expands.
pub trait MoveGenerator {
    /// Clear `out` and fill it with the moves `side` may play on `board`.
    ///
    /// Producing no moves is allowed; the node then has no children.
    fn generate(&self, board: &Board, side: Side, out: &mut Vec<Move>);
}

/// Standard Xiangqi piece movement.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl MoveGenerator for StandardRules {
    #[inline]
    fn generate(&self, board: &Board, side: Side, out: &mut Vec<Move>) {
        generate_moves(board, side, out);
    }
}

impl<G: MoveGenerator + ?Sized> MoveGenerator for &G {
    #[inline]
    fn generate(&self, board: &Board, side: Side, out: &mut Vec<Move>) {
        (**self).generate(board, side, out);
    }
}
