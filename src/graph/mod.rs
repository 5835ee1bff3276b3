//! Directed graphs over dense node indices and their transitive closure.

mod adjacency_graph;
mod reachability;

pub use adjacency_graph::*;
pub use reachability::*;
