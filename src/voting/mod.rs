//! Spatial voting on graphs.
//!
//! Candidates stand at nodes and every node is a voter who supports the
//! candidates closest to it by hop distance, splitting its vote evenly on
//! ties. On top of that vote allocation this module provides the
//! instant-runoff and plurality rules and the pairwise majority tournament.

mod irv;
mod majority;
mod plurality;
mod tie_break;
mod voronoi;

pub use irv::*;
pub use majority::*;
pub use plurality::*;
pub use tie_break::*;
pub use voronoi::*;
