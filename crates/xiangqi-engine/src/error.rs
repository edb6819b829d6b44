//! Search and evaluation errors.

use xiangqi_core::CompactError;

/// Errors that abort a search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A search needs at least one ply.
    #[error("search depth must be at least 1")]
    ZeroDepth,

    /// The evaluator produced a score on or beyond a sentinel.
    #[error("evaluation {score} is outside the open range ({min}, {max})")]
    ScoreOutOfRange {
        /// The offending score.
        score: i32,
        /// Lower sentinel.
        min: i32,
        /// Upper sentinel.
        max: i32,
    },

    /// No root-level move carries a usable value.
    #[error("no candidate move found")]
    NoCandidate,

    /// The root position could not be decoded.
    #[error("invalid position: {source}")]
    InvalidPosition {
        /// The decoding failure.
        #[from]
        source: CompactError,
    },
}

/// Errors from parsing a piece-value table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PieceValueError {
    /// The line names no known piece kind.
    #[error("line {line}: unknown piece kind '{name}'")]
    UnknownKind {
        /// 1-based line number.
        line: usize,
        /// The unrecognized name.
        name: String,
    },

    /// The kind has no value after it.
    #[error("line {line}: missing value")]
    MissingValue {
        /// 1-based line number.
        line: usize,
    },

    /// The value is not an integer.
    #[error("line {line}: invalid value '{value}'")]
    InvalidValue {
        /// 1-based line number.
        line: usize,
        /// The text that failed to parse.
        value: String,
    },

    /// The value is an integer but too large in magnitude.
    #[error("line {line}: value {value} is out of range")]
    OutOfRange {
        /// 1-based line number.
        line: usize,
        /// The value found.
        value: i64,
    },

    /// More than two fields on one line.
    #[error("line {line}: unexpected trailing field '{field}'")]
    TrailingField {
        /// 1-based line number.
        line: usize,
        /// The first extra field.
        field: String,
    },
}
