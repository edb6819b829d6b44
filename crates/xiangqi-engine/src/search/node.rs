//! Search tree nodes and the value-propagation protocol.
//!
//! A node aggregates the values its children report. Maximizers keep the
//! largest value seen, minimizers the smallest. Every report also runs the
//! sibling-dominance check: a node whose current value is already beaten by a
//! sibling, from the parent's point of view, is marked pruned and its subtree
//! is skipped by the traversal. This is not alpha-beta; bounds never travel
//! more than one level.

use xiangqi_core::Move;

use crate::search::pool::{NodeId, NodePool};

/// Lowest score sentinel: "nothing reported yet" for a maximizer.
pub const MIN_VALUE: i32 = -32_000;

/// Highest score sentinel: "nothing reported yet" for a minimizer.
pub const MAX_VALUE: i32 = 32_000;

/// Which direction a node's value moves as children report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    Maximizer,
    Minimizer,
    #[default]
    Unset,
}

impl Role {
    /// The role of this node's children.
    #[inline]
    pub const fn opposite(self) -> Role {
        match self {
            Role::Maximizer => Role::Minimizer,
            Role::Minimizer => Role::Maximizer,
            Role::Unset => Role::Unset,
        }
    }

    /// The sentinel a node of this role starts from; any real score improves it.
    #[inline]
    pub const fn worst(self) -> i32 {
        match self {
            Role::Maximizer => MIN_VALUE,
            Role::Minimizer | Role::Unset => MAX_VALUE,
        }
    }

    /// Return `true` if `candidate` strictly improves on `current` for this role.
    ///
    /// The untouched sentinel of the child role never counts as an improvement:
    /// a child that received nothing must not overwrite its parent.
    #[inline]
    pub const fn improves(self, candidate: i32, current: i32) -> bool {
        match self {
            Role::Maximizer => candidate != MAX_VALUE && candidate > current,
            Role::Minimizer => candidate != MIN_VALUE && candidate < current,
            Role::Unset => false,
        }
    }
}

/// One move in the search tree.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) mv: Move,
    pub(crate) depth: u8,
    pub(crate) role: Role,
    pub(crate) value: i32,
    pub(crate) reports: u32,
    pub(crate) pruned: bool,
    pub(crate) best_child: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) in_use: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            mv: Move::NULL,
            depth: 0,
            role: Role::Unset,
            value: MAX_VALUE,
            reports: 0,
            pruned: false,
            best_child: None,
            parent: None,
            children: Vec::new(),
            in_use: false,
        }
    }
}

impl Node {
    /// Reinitialize a pooled node for a new position in the tree.
    ///
    /// The children vector keeps its allocation.
    pub fn reset(&mut self, mv: Move, depth: u8, role: Role, parent: Option<NodeId>) {
        self.mv = mv;
        self.depth = depth;
        self.set_role(role);
        self.reports = 0;
        self.pruned = false;
        self.best_child = None;
        self.parent = parent;
        self.children.clear();
    }

    /// Set the role and the matching starting sentinel.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        self.value = role.worst();
    }

    /// Count one report and keep `value` if it improves the current one.
    pub fn absorb(&mut self, value: i32, source: Option<NodeId>) {
        self.reports += 1;
        if self.role.improves(value, self.value) {
            self.value = value;
            self.best_child = source;
        }
    }

    #[inline]
    pub fn mv(&self) -> Move {
        self.mv
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }

    #[inline]
    pub fn reports(&self) -> u32 {
        self.reports
    }

    /// This node's own pruned flag; see [`is_pruned`] for the inherited one.
    #[inline]
    pub fn pruned(&self) -> bool {
        self.pruned
    }

    #[inline]
    pub fn best_child(&self) -> Option<NodeId> {
        self.best_child
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Return `true` while the value is still the role's starting sentinel.
    #[inline]
    pub fn is_unvalued(&self) -> bool {
        self.value == self.role.worst()
    }
}

/// Report `value` (coming from `source`) to node `id` and propagate upward.
///
/// For each node on the way up:
/// 1. count the report and keep the value if it improves the node;
/// 2. mark the node pruned if a sibling already beats it for the parent's role;
/// 3. once all children have reported, forward the node's value to its parent;
///    otherwise, if the node or an ancestor is pruned, forward the parent's
///    worst sentinel so the parent still counts the report.
///
/// Propagation stops at the first node that has nothing to forward.
pub fn report_value(pool: &mut NodePool, id: NodeId, value: i32, source: NodeId) {
    let mut id = id;
    let mut value = value;
    let mut source = source;

    loop {
        pool[id].absorb(value, Some(source));

        let Some(parent) = pool[id].parent else {
            return;
        };

        let current = pool[id].value;
        let parent_role = pool[parent].role;
        let dominated = pool[parent]
            .children
            .iter()
            .any(|&sibling| parent_role.improves(pool[sibling].value, current));
        if dominated {
            pool[id].pruned = true;
        }

        let node = &pool[id];
        let forwarded = if node.reports as usize >= node.children.len() {
            node.value
        } else if is_pruned(pool, id) {
            parent_role.worst()
        } else {
            return;
        };

        source = id;
        id = parent;
        value = forwarded;
    }
}

/// Return `true` if the node or any of its ancestors is pruned.
pub fn is_pruned(pool: &NodePool, id: NodeId) -> bool {
    let mut cursor = Some(id);
    while let Some(current) = cursor {
        let node = &pool[current];
        if node.pruned {
            return true;
        }
        cursor = node.parent;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build `parent` with two children, each with two leaf children.
    /// Returns (parent, [a, b], [[a1, a2], [b1, b2]]).
    fn two_by_two(
        pool: &mut NodePool,
        parent_role: Role,
    ) -> (NodeId, [NodeId; 2], [[NodeId; 2]; 2]) {
        let parent = pool.acquire();
        pool[parent].reset(Move::NULL, 1, parent_role, None);

        let mut mids = [parent; 2];
        let mut leaves = [[parent; 2]; 2];
        for (i, mid) in mids.iter_mut().enumerate() {
            *mid = pool.acquire();
            pool[*mid].reset(Move::NULL, 2, parent_role.opposite(), Some(parent));
            pool[parent].children.push(*mid);
            for leaf in leaves[i].iter_mut() {
                *leaf = pool.acquire();
                pool[*leaf].reset(Move::NULL, 3, parent_role, Some(*mid));
                pool[*mid].children.push(*leaf);
            }
        }
        (parent, mids, leaves)
    }

    #[test]
    fn set_role_uses_sentinels() {
        let mut node = Node::default();
        node.set_role(Role::Maximizer);
        assert_eq!(node.value(), MIN_VALUE);
        node.set_role(Role::Minimizer);
        assert_eq!(node.value(), MAX_VALUE);
        assert!(node.is_unvalued());
    }

    #[test]
    fn absorb_is_monotonic() {
        let mut node = Node::default();
        node.set_role(Role::Maximizer);
        let mut last = node.value();
        for v in [5, 3, 9, -4, 9, 12, 0] {
            node.absorb(v, None);
            assert!(node.value() >= last);
            last = node.value();
        }
        assert_eq!(node.value(), 12);
        assert_eq!(node.reports(), 7);

        node.set_role(Role::Minimizer);
        for v in [5, 3, 9, -4] {
            node.absorb(v, None);
        }
        assert_eq!(node.value(), -4);
    }

    #[test]
    fn absorb_ignores_child_sentinel() {
        let mut node = Node::default();
        node.set_role(Role::Maximizer);
        node.absorb(MAX_VALUE, None);
        assert_eq!(node.value(), MIN_VALUE);
        assert_eq!(node.reports(), 1);

        node.set_role(Role::Minimizer);
        node.absorb(MIN_VALUE, None);
        assert_eq!(node.value(), MAX_VALUE);
    }

    #[test]
    fn reset_clears_children_and_flags() {
        let mut pool = NodePool::new(8);
        let (parent, mids, _) = two_by_two(&mut pool, Role::Minimizer);
        pool[mids[0]].pruned = true;
        pool[parent].reset(Move::NULL, 1, Role::Maximizer, None);
        assert!(pool[parent].children().is_empty());
        assert_eq!(pool[parent].value(), MIN_VALUE);
        assert_eq!(pool[parent].best_child(), None);
        assert_eq!(pool[parent].reports(), 0);
    }

    #[test]
    fn full_reports_propagate_minimax_value() {
        let mut pool = NodePool::new(16);
        let (parent, [a, b], [[a1, a2], [b1, b2]]) = two_by_two(&mut pool, Role::Minimizer);

        report_value(&mut pool, a, 5, a1);
        assert_eq!(pool[a].value(), 5);
        assert!(!pool[a].pruned());
        assert_eq!(pool[parent].reports(), 0, "a is still waiting for a2");

        report_value(&mut pool, b, 3, b1);
        assert!(!pool[b].pruned());

        report_value(&mut pool, a, 7, a2);
        assert!(pool[a].pruned(), "sibling b = 3 beats a = 7 for a minimizer");
        assert_eq!(pool[parent].value(), 7, "a had all reports, so it still forwards");
        assert_eq!(pool[parent].best_child(), Some(a));

        report_value(&mut pool, b, 4, b2);
        assert_eq!(pool[parent].value(), 4);
        assert_eq!(pool[parent].best_child(), Some(b));
        assert_eq!(pool[parent].reports(), 2);
    }

    #[test]
    fn pruned_node_forwards_parent_sentinel() {
        let mut pool = NodePool::new(16);
        let (parent, [a, b], [[a1, _], [b1, b2]]) = two_by_two(&mut pool, Role::Minimizer);

        report_value(&mut pool, b, 3, b1);
        report_value(&mut pool, b, 2, b2);
        assert_eq!(pool[parent].value(), 3);

        report_value(&mut pool, a, 5, a1);
        assert!(pool[a].pruned());
        assert_eq!(pool[parent].reports(), 2, "pruned a reported early");
        assert_eq!(pool[parent].value(), 3, "the sentinel never improves the parent");
    }

    #[test]
    fn maximizer_parent_prunes_lower_siblings() {
        let mut pool = NodePool::new(16);
        let (parent, [a, b], [[a1, a2], [b1, _]]) = two_by_two(&mut pool, Role::Maximizer);

        report_value(&mut pool, a, 6, a1);
        report_value(&mut pool, a, 8, a2);
        assert_eq!(pool[a].value(), 6);
        assert_eq!(pool[parent].value(), 6);

        report_value(&mut pool, b, 2, b1);
        assert!(pool[b].pruned(), "b can only fall below 2, a already gives 6");
        assert!(!pool[a].pruned());
        assert_eq!(pool[parent].value(), 6);
    }

    #[test]
    fn pruning_is_inherited_and_sticky() {
        let mut pool = NodePool::new(16);
        let (parent, [a, b], [[a1, a2], [b1, b2]]) = two_by_two(&mut pool, Role::Minimizer);

        report_value(&mut pool, b, 1, b1);
        report_value(&mut pool, a, 5, a1);
        assert!(pool[a].pruned());
        assert!(is_pruned(&pool, a2), "leaf under a pruned node is pruned");
        assert!(!pool[a2].pruned(), "but its own flag is untouched");

        report_value(&mut pool, b, 9, b2);
        report_value(&mut pool, a, 0, a2);
        assert!(pool[a].pruned(), "pruning never clears");
        assert!(!is_pruned(&pool, parent));
    }

    #[test]
    fn root_reports_do_not_propagate() {
        let mut pool = NodePool::new(4);
        let root = pool.acquire();
        pool[root].reset(Move::NULL, 1, Role::Minimizer, None);
        let child = pool.acquire();
        pool[child].reset(Move::NULL, 2, Role::Maximizer, Some(root));
        pool[root].children.push(child);

        report_value(&mut pool, root, 10, child);
        report_value(&mut pool, root, 12, child);
        assert_eq!(pool[root].value(), 10);
        assert_eq!(pool[root].reports(), 2);
        assert!(!is_pruned(&pool, root));
    }
}
