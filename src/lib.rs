//! Matriz: elementwise matrix arithmetic over runtime-dispatched numeric kinds.
//!
//! Matriz provides a single [`Matrix`] container whose cells share one of a
//! closed set of numeric kinds (i32, i64, f32, f64) chosen at runtime, the
//! four elementwise operations between matrices and between a matrix and a
//! scalar, and a small line-oriented text format for reading and writing
//! matrices. Kind-specific arithmetic is selected per cell by matching on
//! the operands; kinds never mix silently.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
//! let b = Matrix::from_vec(2, 2, vec![5, 6, 7, 8]).unwrap();
//!
//! let sum = a.add(&b).unwrap();
//! assert_eq!(sum.get(1, 1).unwrap(), Scalar::I32(12));
//!
//! // Broadcast a scalar against every cell.
//! let shifted = sum.add_scalar(10).unwrap();
//! assert_eq!(shifted.get(0, 0).unwrap(), Scalar::I32(16));
//!
//! // Shape mismatches are errors, not panics.
//! let tall = Matrix::from_vec(4, 1, vec![1, 2, 3, 4]).unwrap();
//! assert!(a.add(&tall).is_err());
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Scalar and Matrix types
//! - [`format`]: Line-oriented text format for matrix exchange
//! - [`error`]: Error type shared by every fallible operation

pub mod error;
pub mod format;
pub mod prelude;
pub mod primitives;

pub use error::{MatrizError, Result};
pub use primitives::{Matrix, MatrixBuilder, NumericKind, Op, Scalar};
