use std::collections::VecDeque;

/// A growable first-in-first-out queue of node indices.
///
/// Backed by a ring buffer that doubles its capacity when full, so pushes are
/// amortized O(1) and the queue can grow without bound.
pub struct FrontierQueue {
    queue: VecDeque<usize>,
}

impl FrontierQueue {
    /// Creates an empty queue with room for `capacity` nodes before it first grows.
    pub fn with_capacity(capacity: usize) -> Self {
        FrontierQueue {
            queue: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, node: usize) {
        self.queue.push_back(node);
    }

    /// Removes and returns the oldest node, or `None` once the frontier is exhausted.
    pub fn pop(&mut self) -> Option<usize> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl std::fmt::Debug for FrontierQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrontierQueue")
            .field("queue", &self.queue)
            .finish()
    }
}
