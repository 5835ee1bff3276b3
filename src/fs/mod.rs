//! File system I/O: loading voting graphs and writing exclusion zones.
//!
//! Graphs come in a plain-text adjacency format (see [`load_graph`]); zones
//! are written one node id per line, and each run can append a JSON line
//! summary.

mod adjacency_load;
mod report;
mod zone_write;

pub use adjacency_load::*;
pub use report::*;
pub use zone_write::*;
