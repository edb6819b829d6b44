//! Static evaluation.
//!
//! Scores are material plus positional bonuses, computed from Red's side and
//! then turned toward the requested perspective.

pub mod pst;
pub mod values;

use xiangqi_core::{Board, Side};

use pst::pst_value;
use values::PieceValues;

/// Scores a finished position for the search.
pub trait Evaluator {
    /// Score `board` for `perspective`; higher is better for that side.
    ///
    /// The searcher requires the result to lie strictly between
    /// [`MIN_VALUE`](crate::MIN_VALUE) and [`MAX_VALUE`](crate::MAX_VALUE).
    fn evaluate(&self, board: &Board, perspective: Side) -> i32;
}

impl<E: Evaluator + ?Sized> Evaluator for &E {
    #[inline]
    fn evaluate(&self, board: &Board, perspective: Side) -> i32 {
        (**self).evaluate(board, perspective)
    }
}

/// Material and piece-square evaluator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterialEvaluator {
    values: PieceValues,
}

impl MaterialEvaluator {
    pub fn new(values: PieceValues) -> Self {
        Self { values }
    }
}

impl Evaluator for MaterialEvaluator {
    fn evaluate(&self, board: &Board, perspective: Side) -> i32 {
        let red = side_score(board, Side::Red, &self.values);
        let black = side_score(board, Side::Black, &self.values);
        let score = match perspective {
            Side::Red => red - black,
            Side::Black => black - red,
        };
        // Saturate rather than wrap; the searcher rejects anything past a sentinel.
        i32::try_from(score).unwrap_or(if score < 0 { i32::MIN } else { i32::MAX })
    }
}

/// Evaluate with the default piece values.
pub fn evaluate(board: &Board, perspective: Side) -> i32 {
    MaterialEvaluator::default().evaluate(board, perspective)
}

fn side_score(board: &Board, side: Side, values: &PieceValues) -> i64 {
    board
        .pieces(side)
        .map(|(sq, piece)| {
            i64::from(values.get(piece.kind())) + i64::from(pst_value(piece.kind(), side, sq))
        })
        .sum()
}
