//! Double-ended traversal order over node handles.

use std::collections::VecDeque;

/// Ordered sequence of handles with O(1) insertion and removal at both ends.
///
/// Holds handles only; whoever owns the nodes is unaffected by what the deque
/// does. The search keeps one instance per role: the pool's free list, the
/// depth-first work stack, the finalization stack and the cleanup drain.
#[derive(Debug, Clone)]
pub struct TraversalDeque<T> {
    items: VecDeque<T>,
}

impl<T: Copy> TraversalDeque<T> {
    /// Create an empty deque.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Create an empty deque with room for `capacity` handles.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push_front(&mut self, item: T) {
        self.items.push_front(item);
    }

    /// Push a batch onto the front, keeping its order: `batch[0]` ends up first.
    pub fn push_front_batch(&mut self, batch: &[T]) {
        self.items.reserve(batch.len());
        for &item in batch.iter().rev() {
            self.items.push_front(item);
        }
    }

    #[inline]
    pub fn push_back(&mut self, item: T) {
        self.items.push_back(item);
    }

    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop every handle, keeping the allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate front to back without removing anything.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.items.iter().copied()
    }
}

impl<T: Copy> Default for TraversalDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}
