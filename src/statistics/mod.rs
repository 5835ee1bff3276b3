//! Work counters for exclusion-zone estimation.
//!
//! This module provides a structure for collecting and aggregating how many
//! elections were run, how many random trials were drawn and how often they
//! grew the plausible-winner set.

mod stats;
pub use stats::*;
