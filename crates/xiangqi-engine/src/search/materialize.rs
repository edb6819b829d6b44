//! Lazy board reconstruction.
//!
//! Nodes store only the move that produced them. The board for any node is
//! rebuilt on demand by replaying the moves on its parent chain over a copy of
//! the search's root board.

use xiangqi_core::{Board, Move};

use crate::search::pool::{NodeId, NodePool};

/// Rebuilds node boards, reusing one path buffer across calls.
#[derive(Debug, Default)]
pub struct Materializer {
    path: Vec<Move>,
}

impl Materializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the position reached after playing every move from the root-level
    /// ancestor of `id` down to `id` itself, starting from `root`.
    ///
    /// Neither the pool nor `root` is modified, so calling this twice for the
    /// same node gives the same board.
    pub fn materialize(&mut self, pool: &NodePool, id: NodeId, root: &Board) -> Board {
        self.path.clear();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = &pool[current];
            self.path.push(node.mv());
            cursor = node.parent();
        }

        let mut board = *root;
        for &mv in self.path.iter().rev() {
            board.apply_move(mv);
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use xiangqi_core::{Board, Move, Piece, Square};

    use super::Materializer;
    use crate::search::node::Role;
    use crate::search::pool::{NodeId, NodePool};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn attach(pool: &mut NodePool, mv: Move, parent: Option<NodeId>, depth: u8) -> NodeId {
        let id = pool.acquire();
        pool[id].reset(mv, depth, Role::Minimizer, parent);
        if let Some(parent) = parent {
            pool[parent].children.push(id);
        }
        id
    }

    #[test]
    fn replays_moves_in_root_to_node_order() {
        let root = Board::starting_position();
        let mut pool = NodePool::new(8);

        // Black horse out, red cannon to the centre, black horse again.
        let m1 = Move::new(sq(0, 1), sq(2, 2), Piece::BLACK_HORSE);
        let m2 = Move::new(sq(7, 1), sq(7, 4), Piece::RED_CANNON);
        let m3 = Move::new(sq(2, 2), sq(4, 3), Piece::BLACK_HORSE);
        let a = attach(&mut pool, m1, None, 1);
        let b = attach(&mut pool, m2, Some(a), 2);
        let c = attach(&mut pool, m3, Some(b), 3);

        let mut materializer = Materializer::new();
        let board = materializer.materialize(&pool, c, &root);

        assert_eq!(board.piece_on(sq(0, 1)), None);
        assert_eq!(board.piece_on(sq(2, 2)), None, "the horse moved on again");
        assert_eq!(board.piece_on(sq(4, 3)), Some(Piece::BLACK_HORSE));
        assert_eq!(board.piece_on(sq(7, 4)), Some(Piece::RED_CANNON));
        assert_eq!(board.piece_on(sq(7, 1)), None);
        let mut by_hand = root;
        for mv in [m1, m2, m3] {
            by_hand.apply_move(mv);
        }
        assert_eq!(board, by_hand);
    }

    #[test]
    fn idempotent_and_root_untouched() {
        let root = Board::starting_position();
        let mut pool = NodePool::new(4);
        let mv = Move::new(sq(3, 4), sq(4, 4), Piece::BLACK_PAWN);
        let id = attach(&mut pool, mv, None, 1);

        let mut materializer = Materializer::new();
        let first = materializer.materialize(&pool, id, &root);
        let second = materializer.materialize(&pool, id, &root);
        assert_eq!(first, second);
        assert_eq!(root, Board::starting_position());
        assert_eq!(first, root.make_move(mv));
    }

    #[test]
    fn capture_replaces_target() {
        let root = Board::starting_position();
        let mut pool = NodePool::new(4);
        // Red cannon jumps the black horse screen and takes the rook behind it.
        let mv = Move::new(sq(7, 1), sq(0, 1), Piece::RED_CANNON);
        let mut fake = root;
        fake.clear(sq(0, 1));
        fake.put(sq(0, 1), Piece::BLACK_ROOK);
        let id = attach(&mut pool, mv, None, 1);

        let board = Materializer::new().materialize(&pool, id, &fake);
        assert_eq!(board.piece_on(sq(0, 1)), Some(Piece::RED_CANNON));
        assert_eq!(board.pieces(xiangqi_core::Side::Black).count(), 15);
    }
}
