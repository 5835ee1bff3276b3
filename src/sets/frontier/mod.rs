//! FIFO frontier used by every breadth-first traversal in the crate.

mod frontier_queue;

pub use frontier_queue::*;
