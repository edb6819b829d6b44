//! Fixed-depth search and evaluation for Xiangqi.

pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

pub use error::{PieceValueError, SearchError};
pub use eval::values::PieceValues;
pub use eval::{Evaluator, MaterialEvaluator, evaluate};
pub use rules::{MoveGenerator, StandardRules};
pub use search::node::{MAX_VALUE, MIN_VALUE, Role};
pub use search::pool::{DEFAULT_BATCH, NodeId, NodePool};
pub use search::{SearchConfig, SearchResult, SearchStats, Searcher};
