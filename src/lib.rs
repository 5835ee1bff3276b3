pub mod batch;
pub mod error;
pub mod fs;
pub mod graph;
pub mod sets;
pub mod statistics;
pub mod voting;
pub mod zone;

pub use error::{Error, Result};
