//! Randomized estimation of the exclusion zone.
//!
//! The zone's complement, the plausible-winner set, is grown from the
//! winners of random-subset IRV elections and closed under the pairwise
//! loss relation. The search stops once it is complete or a Hoeffding-style
//! patience bound runs out.

mod estimator;
mod exclusion_set;
mod params;

pub use estimator::*;
pub use exclusion_set::*;
pub use params::*;
