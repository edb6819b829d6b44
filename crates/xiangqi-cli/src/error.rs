//! Front-end errors.

use std::path::PathBuf;

use xiangqi_core::CompactError;
use xiangqi_engine::{PieceValueError, SearchError};

/// Errors that can occur while parsing commands or running searches.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A position string could not be decoded.
    #[error("invalid position: {source}")]
    InvalidPosition {
        /// The decoding failure.
        #[from]
        source: CompactError,
    },

    /// A command needs an argument that is not there.
    #[error("missing value for {param}")]
    MissingValue {
        /// The command or keyword missing its argument.
        param: String,
    },

    /// The depth is not an integer in 1..=255.
    #[error("invalid depth: {value}")]
    InvalidDepth {
        /// The text that failed to parse.
        value: String,
    },

    /// The side is neither red nor black.
    #[error("invalid side: {value}")]
    InvalidSide {
        /// The text that failed to parse.
        value: String,
    },

    /// The search itself failed.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// A piece-value file could not be parsed.
    #[error("piece values in {}: {source}", path.display())]
    PieceValues {
        /// File that was being read.
        path: PathBuf,
        /// The parse failure.
        source: PieceValueError,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

impl CliError {
    /// Return `true` if the line loop must stop on this error.
    ///
    /// Undecodable positions and failed searches are fatal; a mistyped
    /// argument is only logged.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            CliError::MissingValue { .. }
                | CliError::InvalidDepth { .. }
                | CliError::InvalidSide { .. }
        )
    }
}
