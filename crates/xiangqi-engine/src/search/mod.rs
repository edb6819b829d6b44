//! Fixed-depth tree search.
//!
//! The searcher runs in three phases over an explicit work stack:
//!
//! 1. **Expansion.** Root moves are pushed as minimizer nodes at depth 1. Nodes
//!    are popped depth first; pruned ones are skipped, interior ones are
//!    expanded and remembered for finalization, leaves are evaluated and
//!    reported to their parent.
//! 2. **Finalization.** Interior nodes that never collected every report push
//!    their current value upward, deepest first.
//! 3. **Selection.** The root move with the greatest value wins.
//!
//! Every node is handed back to the pool afterwards, also when a phase fails.

pub mod deque;
pub mod materialize;
pub mod node;
pub mod pool;

use std::time::{Duration, Instant};

use tracing::{debug, info};
use xiangqi_core::{Board, Move, Side};

use crate::error::SearchError;
use crate::eval::{Evaluator, MaterialEvaluator};
use crate::rules::{MoveGenerator, StandardRules};
use deque::TraversalDeque;
use materialize::Materializer;
use node::{MAX_VALUE, MIN_VALUE, Role, is_pruned, report_value};
use pool::{DEFAULT_BATCH, NodeId, NodePool};

/// Tunables for a [`Searcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Nodes allocated each time the pool runs dry.
    pub pool_batch: usize,
    /// Log every board along the chosen line at `debug` level.
    pub trace_best_line: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            pool_batch: DEFAULT_BATCH,
            trace_best_line: false,
        }
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Depth searched.
    pub depth: u8,
    /// Nodes skipped because they or an ancestor were pruned.
    pub cut_nodes: u64,
    /// Skipped nodes that would have been expanded rather than evaluated.
    pub internal_cuts: u64,
    /// Interior nodes expanded.
    pub expanded: u64,
    /// Leaves evaluated.
    pub evaluated: u64,
    /// Nodes taken from the pool.
    pub acquired: u64,
    /// Nodes returned to the pool.
    pub released: u64,
    /// Wall time of the search.
    pub elapsed: Duration,
}

/// Result of a completed search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Position after the chosen move.
    pub board: Board,
    /// The chosen root move.
    pub best_move: Move,
    /// Value of the chosen move from the searching side's perspective.
    pub score: i32,
    /// Chosen move followed by the replies that produced its value.
    pub line: Vec<Move>,
    pub stats: SearchStats,
}

/// Chosen root node and what was read from it before cleanup.
struct Selection {
    board: Board,
    best_move: Move,
    score: i32,
    line: Vec<Move>,
}

/// Fixed-depth searcher.
///
/// Owns every buffer a search needs, including the node pool, which persists
/// across calls. Independent searches need independent searchers.
pub struct Searcher<G = StandardRules, E = MaterialEvaluator> {
    config: SearchConfig,
    rules: G,
    evaluator: E,
    pool: NodePool,
    materializer: Materializer,
    work: TraversalDeque<NodeId>,
    pending: TraversalDeque<NodeId>,
    drain: TraversalDeque<NodeId>,
    moves: Vec<Move>,
    roots: Vec<NodeId>,
}

impl Searcher {
    /// Create a searcher with standard rules and the default evaluator.
    pub fn new(config: SearchConfig) -> Self {
        Self::with_parts(config, StandardRules, MaterialEvaluator::default())
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<G: MoveGenerator, E: Evaluator> Searcher<G, E> {
    /// Create a searcher with a custom move generator and evaluator.
    pub fn with_parts(config: SearchConfig, rules: G, evaluator: E) -> Self {
        Self {
            config,
            rules,
            evaluator,
            pool: NodePool::new(config.pool_batch),
            materializer: Materializer::new(),
            work: TraversalDeque::new(),
            pending: TraversalDeque::new(),
            drain: TraversalDeque::new(),
            moves: Vec::with_capacity(128),
            roots: Vec::new(),
        }
    }

    /// The node pool, for inspecting allocation counters.
    pub fn pool(&self) -> &NodePool {
        &self.pool
    }

    /// Search `max_depth` plies from `root` with `side` to move.
    ///
    /// # Errors
    ///
    /// - [`SearchError::ZeroDepth`] if `max_depth` is 0.
    /// - [`SearchError::ScoreOutOfRange`] if the evaluator returns a sentinel.
    /// - [`SearchError::NoCandidate`] if no root move ends up with a value,
    ///   for instance because `side` has no moves.
    pub fn search(
        &mut self,
        root: &Board,
        side: Side,
        max_depth: u8,
    ) -> Result<SearchResult, SearchError> {
        if max_depth == 0 {
            return Err(SearchError::ZeroDepth);
        }

        let start = Instant::now();
        self.pool.reset_counters();
        let mut stats = SearchStats {
            depth: max_depth,
            ..SearchStats::default()
        };

        let outcome = self.run(root, side, max_depth, &mut stats);
        self.reclaim();

        stats.acquired = self.pool.acquired();
        stats.released = self.pool.released();
        stats.elapsed = start.elapsed();
        let selection = outcome?;

        info!(
            depth = max_depth,
            cuts = stats.cut_nodes,
            internal_cuts = stats.internal_cuts,
            score = selection.score,
            elapsed_ms = stats.elapsed.as_millis() as u64,
            acquired = stats.acquired,
            released = stats.released,
            "search complete"
        );

        Ok(SearchResult {
            board: selection.board,
            best_move: selection.best_move,
            score: selection.score,
            line: selection.line,
            stats,
        })
    }

    /// Decode a compact position and search it.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidPosition`] if `text` is not a valid compact board,
    /// plus everything [`search`](Self::search) returns.
    pub fn search_compact(
        &mut self,
        text: &str,
        side: Side,
        max_depth: u8,
    ) -> Result<SearchResult, SearchError> {
        let board: Board = text.parse()?;
        self.search(&board, side, max_depth)
    }

    fn run(
        &mut self,
        root: &Board,
        side: Side,
        max_depth: u8,
        stats: &mut SearchStats,
    ) -> Result<Selection, SearchError> {
        self.seed(root, side);
        let non_root_pending = self.explore(root, side, max_depth, stats)?;
        self.finalize(non_root_pending);

        let best = self.select().ok_or(SearchError::NoCandidate)?;
        let board = self.materializer.materialize(&self.pool, best, root);
        let line = self.best_line(best);
        if self.config.trace_best_line {
            self.trace_best_line(best, root, side);
        }

        Ok(Selection {
            board,
            best_move: self.pool[best].mv(),
            score: self.pool[best].value(),
            line,
        })
    }

    /// Turn the root moves into depth-1 minimizer nodes on the work stack.
    fn seed(&mut self, root: &Board, side: Side) {
        self.work.clear();
        self.pending.clear();
        self.roots.clear();

        self.rules.generate(root, side, &mut self.moves);
        for &mv in &self.moves {
            let id = self.pool.acquire();
            self.pool[id].reset(mv, 1, Role::Minimizer, None);
            self.roots.push(id);
        }
        self.work.push_front_batch(&self.roots);
    }

    /// Phase 1. Returns how many non-root nodes were left on the pending stack.
    fn explore(
        &mut self,
        root: &Board,
        side: Side,
        max_depth: u8,
        stats: &mut SearchStats,
    ) -> Result<usize, SearchError> {
        let mut non_root_pending = 0;

        while let Some(id) = self.work.pop_front() {
            let depth = self.pool[id].depth();
            if is_pruned(&self.pool, id) {
                stats.cut_nodes += 1;
                if depth < max_depth {
                    stats.internal_cuts += 1;
                }
                continue;
            }

            let board = self.materializer.materialize(&self.pool, id, root);

            if depth < max_depth {
                self.pending.push_front(id);
                if self.pool[id].parent().is_some() {
                    non_root_pending += 1;
                }

                let mover = self.pool[id].mv().side().flip();
                let role = self.pool[id].role().opposite();
                self.rules.generate(&board, mover, &mut self.moves);
                for &mv in &self.moves {
                    let child = self.pool.acquire();
                    self.pool[child].reset(mv, depth + 1, role, Some(id));
                    self.pool[id].children.push(child);
                }
                self.work.push_front_batch(&self.pool[id].children);
                stats.expanded += 1;
            } else {
                let score = self.evaluator.evaluate(&board, side);
                if score <= MIN_VALUE || score >= MAX_VALUE {
                    return Err(SearchError::ScoreOutOfRange {
                        score,
                        min: MIN_VALUE,
                        max: MAX_VALUE,
                    });
                }
                stats.evaluated += 1;

                match self.pool[id].parent() {
                    Some(parent) => report_value(&mut self.pool, parent, score, id),
                    None => {
                        // One-ply search: the root move is its own leaf.
                        self.pool[id].absorb(score, None);
                        self.pending.push_front(id);
                    }
                }
            }
        }

        Ok(non_root_pending)
    }

    /// Phase 2. Push interior values upward until only root moves remain pending.
    fn finalize(&mut self, mut non_root_pending: usize) {
        while non_root_pending > 0 {
            let Some(id) = self.pending.pop_front() else {
                break;
            };
            match self.pool[id].parent() {
                None => self.pending.push_back(id),
                Some(parent) => {
                    let value = self.pool[id].value();
                    report_value(&mut self.pool, parent, value, id);
                    non_root_pending -= 1;
                }
            }
        }
    }

    /// Phase 3. Drain the pending stack and keep the strictly greatest value.
    fn select(&mut self) -> Option<NodeId> {
        let mut best: Option<(NodeId, i32)> = None;
        while let Some(id) = self.pending.pop_front() {
            let node = &self.pool[id];
            if node.is_unvalued() {
                continue;
            }
            if best.is_none_or(|(_, value)| node.value() > value) {
                best = Some((id, node.value()));
            }
        }
        best.map(|(id, _)| id)
    }

    fn best_line(&self, from: NodeId) -> Vec<Move> {
        let mut line = Vec::with_capacity(self.pool[from].depth() as usize + 4);
        let mut cursor = Some(from);
        while let Some(id) = cursor {
            line.push(self.pool[id].mv());
            cursor = self.pool[id].best_child();
        }
        line
    }

    fn trace_best_line(&mut self, from: NodeId, root: &Board, side: Side) {
        let mut cursor = Some(from);
        while let Some(id) = cursor {
            let board = self.materializer.materialize(&self.pool, id, root);
            let node = &self.pool[id];
            debug!(
                depth = node.depth(),
                mv = %node.mv(),
                value = node.value(),
                "best line\n{}",
                board.pretty()
            );
            if node.best_child().is_none() {
                let score = self.evaluator.evaluate(&board, side);
                debug!(score, "best line ends");
            }
            cursor = node.best_child();
        }
    }

    /// Release every root move and its attached subtree.
    fn reclaim(&mut self) {
        self.work.clear();
        self.pending.clear();
        self.drain.clear();

        self.drain.push_front_batch(&self.roots);
        while let Some(id) = self.drain.pop_front() {
            self.drain.push_front_batch(&self.pool[id].children);
            self.pool.release(id);
        }
        self.roots.clear();
    }
}
