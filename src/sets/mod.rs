//! Specialized data structures for breadth-first traversals over node indices.
//!
//! # Submodules
//!
//! - [`frontier`]: FIFO queue driving every BFS
//! - [`matrix`]: Flat row-major bit matrices for reachability and Voronoi tie-sets
//! - [`visited`]: Packed membership sets for visited marks and the exclusion set

pub mod frontier;
pub mod matrix;
pub mod visited;
