//! Flat row-major boolean matrices.

mod bit_matrix;

pub use bit_matrix::*;
