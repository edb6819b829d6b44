//! Arena-backed node pool.
//!
//! Nodes live in one growing `Vec` and are addressed by [`NodeId`]. Released
//! nodes go onto a free list and are handed out again by later acquisitions,
//! so a long search allocates in large batches instead of once per node.

use std::ops::{Index, IndexMut};

use tracing::{debug, warn};

use crate::search::deque::TraversalDeque;
use crate::search::node::Node;

/// Default number of nodes allocated whenever the free list runs dry.
pub const DEFAULT_BATCH: usize = 5_000_000;

/// Stable handle to a node inside a [`NodePool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Position of the node inside the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Reusable node allocator with acquire/release counters.
pub struct NodePool {
    nodes: Vec<Node>,
    free: TraversalDeque<NodeId>,
    batch: usize,
    acquired: u64,
    released: u64,
}

impl NodePool {
    /// Create an empty pool that grows `batch` nodes at a time.
    ///
    /// Nothing is allocated until the first [`acquire`](Self::acquire).
    pub fn new(batch: usize) -> Self {
        Self {
            nodes: Vec::new(),
            free: TraversalDeque::new(),
            batch: batch.max(1),
            acquired: 0,
            released: 0,
        }
    }

    /// Hand out a node. Its fields hold whatever the previous user left there;
    /// the caller must reset every field it reads.
    ///
    /// # Panics
    ///
    /// Panics if the arena would exceed `u32::MAX` nodes.
    pub fn acquire(&mut self) -> NodeId {
        if self.free.is_empty() {
            self.grow();
        }
        // grow() always adds at least one node.
        let id = self
            .free
            .pop_front()
            .expect("free list is refilled before popping");
        self.nodes[id.index()].in_use = true;
        self.acquired += 1;
        id
    }

    /// Return a node for reuse without touching its fields.
    ///
    /// Returns `false` and logs a warning if the node is not currently handed
    /// out; the free list is left unchanged in that case.
    pub fn release(&mut self, id: NodeId) -> bool {
        let node = &mut self.nodes[id.index()];
        if !node.in_use {
            warn!(node = id.index(), "release of a node that is not in use, skipping");
            return false;
        }
        node.in_use = false;
        self.free.push_back(id);
        self.released += 1;
        true
    }

    fn grow(&mut self) {
        let start = self.nodes.len();
        let end = start + self.batch;
        assert!(end <= u32::MAX as usize, "node pool exceeded u32 handles");
        debug!(from = start, to = end, "growing node pool");
        self.nodes.resize_with(end, Node::default);
        for index in start..end {
            self.free.push_back(NodeId(index as u32));
        }
    }

    /// Nodes handed out since the last [`reset_counters`](Self::reset_counters).
    #[inline]
    pub fn acquired(&self) -> u64 {
        self.acquired
    }

    /// Nodes returned since the last [`reset_counters`](Self::reset_counters).
    #[inline]
    pub fn released(&self) -> u64 {
        self.released
    }

    pub fn reset_counters(&mut self) {
        self.acquired = 0;
        self.released = 0;
    }

    /// Total nodes ever allocated by this pool.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    /// Nodes currently sitting on the free list.
    #[inline]
    pub fn available(&self) -> usize {
        self.free.len()
    }

    /// Nodes allocated per growth step.
    #[inline]
    pub fn batch(&self) -> usize {
        self.batch
    }
}

impl Index<NodeId> for NodePool {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}

impl IndexMut<NodeId> for NodePool {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }
}

impl std::fmt::Debug for NodePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodePool")
            .field("capacity", &self.nodes.len())
            .field("available", &self.free.len())
            .field("batch", &self.batch)
            .field("acquired", &self.acquired)
            .field("released", &self.released)
            .finish()
    }
}

impl Default for NodePool {
    fn default() -> Self {
        Self::new(DEFAULT_BATCH)
    }
}
