use xiangqi_core::{Board, Move, Piece, STARTING_COMPACT, Side, Square, generate_moves, moves_for};
use xiangqi_engine::{
    Evaluator, MIN_VALUE, MaterialEvaluator, MoveGenerator, PieceValues, SearchConfig,
    SearchError, Searcher, StandardRules, evaluate,
};

fn config(pool_batch: usize) -> SearchConfig {
    SearchConfig {
        pool_batch,
        trace_best_line: false,
    }
}

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).unwrap()
}

#[test]
fn depth_one_matches_brute_force() {
    let board = Board::starting_position();
    for side in Side::ALL {
        let mut searcher = Searcher::new(config(1024));
        let result = searcher.search(&board, side, 1).unwrap();

        let best = moves_for(&board, side)
            .into_iter()
            .map(|mv| evaluate(&board.make_move(mv), side))
            .max()
            .unwrap();
        assert_eq!(result.score, best, "{side}");
        assert_eq!(evaluate(&result.board, side), best);
        assert_eq!(result.stats.cut_nodes, 0);
        assert_eq!(result.stats.evaluated, 44);
    }
}

#[test]
fn single_root_move_takes_the_worst_reply() {
    let mut board = Board::empty();
    board.put(sq(3, 0), Piece::BLACK_PAWN);
    board.put(sq(9, 4), Piece::RED_KING);
    board.put(sq(9, 0), Piece::RED_ROOK);

    let root_moves = moves_for(&board, Side::Black);
    assert_eq!(root_moves.len(), 1);
    let after = board.make_move(root_moves[0]);
    let replies = moves_for(&after, Side::Red);
    assert!(
        replies.iter().any(|mv| mv.to() == sq(4, 0)),
        "the rook can take the pawn"
    );
    let expected = replies
        .iter()
        .map(|&mv| evaluate(&after.make_move(mv), Side::Black))
        .min()
        .unwrap();

    let mut searcher = Searcher::new(config(64));
    let result = searcher.search(&board, Side::Black, 2).unwrap();

    assert_eq!(result.best_move, root_moves[0]);
    assert_eq!(result.board, after);
    assert_eq!(result.score, expected);
    assert_eq!(result.stats.cut_nodes, 0, "leaves under a lone root are never cut");
    assert_eq!(result.stats.evaluated, replies.len() as u64);
    assert_eq!(result.line.len(), 2);
    assert_eq!(result.line[1].to(), sq(4, 0), "the capture is the refutation");
}

#[test]
fn pool_conservation_over_several_batches() {
    let mut searcher = Searcher::new(config(500));
    let result = searcher
        .search(&Board::starting_position(), Side::Black, 3)
        .unwrap();

    assert!(result.stats.acquired > 500, "the pool had to grow");
    assert_eq!(result.stats.acquired, result.stats.released);
    assert_eq!(searcher.pool().capacity() % 500, 0);
    assert_eq!(searcher.pool().available(), searcher.pool().capacity());
}

#[test]
fn two_plies_never_cut() {
    let mut searcher = Searcher::new(config(4096));
    let result = searcher
        .search(&Board::starting_position(), Side::Black, 2)
        .unwrap();

    // Root moves have no siblings to be dominated by, and leaves only report.
    assert_eq!(result.stats.cut_nodes, 0);
    assert_eq!(result.stats.expanded, 44);
}

#[test]
fn sibling_dominance_cuts_subtrees() {
    let mut searcher = Searcher::new(config(4096));
    let result = searcher
        .search(&Board::starting_position(), Side::Black, 3)
        .unwrap();

    assert!(result.stats.cut_nodes > 0);
    assert_eq!(
        result.stats.internal_cuts, 0,
        "depth-2 nodes are only marked after their own leaves report"
    );
    assert!(result.stats.expanded > 44);
}

#[test]
fn compact_round_trip_through_search() {
    let mut searcher = Searcher::new(config(1024));
    let result = searcher
        .search_compact(STARTING_COMPACT, Side::Black, 1)
        .unwrap();
    let board: Board = result.board.to_compact().parse().unwrap();
    assert_eq!(board, result.board);
}

#[test]
fn odd_length_position_is_fatal() {
    let mut searcher = Searcher::new(config(16));
    let text = &STARTING_COMPACT[..179];
    let err = searcher.search_compact(text, Side::Black, 2).unwrap_err();
    assert!(matches!(err, SearchError::InvalidPosition { .. }));
    assert!(err.to_string().contains("odd length 179"));
}

#[test]
fn zero_depth_is_fatal() {
    let mut searcher = Searcher::new(config(16));
    let err = searcher
        .search_compact(STARTING_COMPACT, Side::Black, 0)
        .unwrap_err();
    assert_eq!(err, SearchError::ZeroDepth);
}

#[test]
fn no_root_moves_means_no_candidate() {
    let mut searcher = Searcher::new(config(16));
    let err = searcher.search(&Board::empty(), Side::Red, 3).unwrap_err();
    assert_eq!(err, SearchError::NoCandidate);
}

struct Constant(i32);

impl Evaluator for Constant {
    fn evaluate(&self, _: &Board, _: Side) -> i32 {
        self.0
    }
}

#[test]
fn sentinel_scores_are_fatal() {
    let mut searcher = Searcher::with_parts(config(256), StandardRules, Constant(MIN_VALUE));
    let err = searcher
        .search(&Board::starting_position(), Side::Black, 1)
        .unwrap_err();
    assert_eq!(
        err,
        SearchError::ScoreOutOfRange {
            score: MIN_VALUE,
            min: MIN_VALUE,
            max: xiangqi_engine::MAX_VALUE,
        }
    );

    let mut searcher = Searcher::with_parts(config(256), StandardRules, Constant(50_000));
    let err = searcher
        .search(&Board::starting_position(), Side::Black, 2)
        .unwrap_err();
    assert!(matches!(err, SearchError::ScoreOutOfRange { score: 50_000, .. }));
    assert_eq!(searcher.pool().acquired(), searcher.pool().released());
}

/// Only Black ever has moves.
struct BlackOnly;

impl MoveGenerator for BlackOnly {
    fn generate(&self, board: &Board, side: Side, out: &mut Vec<Move>) {
        generate_moves(board, side, out);
        if side == Side::Red {
            out.clear();
        }
    }
}

#[test]
fn root_moves_without_replies_are_never_selected() {
    let mut searcher =
        Searcher::with_parts(config(256), BlackOnly, MaterialEvaluator::default());
    let err = searcher
        .search(&Board::starting_position(), Side::Black, 2)
        .unwrap_err();
    assert_eq!(err, SearchError::NoCandidate);
    assert_eq!(searcher.pool().acquired(), 44);
    assert_eq!(searcher.pool().released(), 44);
}

#[test]
fn ties_go_to_the_first_root_drained() {
    let board = Board::starting_position();
    let last = *moves_for(&board, Side::Red).last().unwrap();

    // Pending is a stack, so the last generated root move is drained first.
    for depth in [1, 2] {
        let mut searcher = Searcher::with_parts(config(4096), StandardRules, Constant(7));
        let result = searcher.search(&board, Side::Red, depth).unwrap();
        assert_eq!(result.score, 7);
        assert_eq!(result.best_move, last, "depth {depth}");
    }
}

#[test]
fn oversized_piece_values_trip_the_range_check() {
    let mut board = Board::empty();
    board.put(sq(0, 3), Piece::BLACK_KING);
    board.put(sq(9, 4), Piece::RED_KING);
    board.put(sq(9, 0), Piece::RED_ROOK);
    board.put(sq(9, 8), Piece::RED_ROOK);

    let values: PieceValues = "rook 20000".parse().unwrap();
    let mut searcher =
        Searcher::with_parts(config(64), StandardRules, MaterialEvaluator::new(values));
    let err = searcher.search(&board, Side::Black, 1).unwrap_err();
    assert!(matches!(err, SearchError::ScoreOutOfRange { score, .. } if score <= MIN_VALUE));

    let mut values = PieceValues::default();
    values.set(xiangqi_core::PieceKind::Rook, i32::MAX);
    let mut searcher =
        Searcher::with_parts(config(64), StandardRules, MaterialEvaluator::new(values));
    let err = searcher.search(&board, Side::Black, 1).unwrap_err();
    assert_eq!(
        err,
        SearchError::ScoreOutOfRange {
            score: i32::MIN,
            min: MIN_VALUE,
            max: xiangqi_engine::MAX_VALUE,
        }
    );
}
