//! Core numeric primitives (Scalar, Matrix).
//!
//! These types carry their numeric kind at runtime; every arithmetic
//! entry point dispatches on it.

mod matrix;
mod scalar;

pub use matrix::{Matrix, MatrixBuilder};
pub use scalar::{NumericKind, Op, Scalar};
