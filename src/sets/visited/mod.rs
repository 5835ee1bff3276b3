//! Packed membership sets over node indices.
//!
//! Used as the "already enqueued" marks of every BFS in the crate and as the
//! storage behind the exclusion set.

mod packed_set;
mod visitor_set;

pub use packed_set::*;
pub use visitor_set::*;
