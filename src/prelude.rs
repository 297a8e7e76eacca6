//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use matriz::prelude::*;
//! ```

pub use crate::error::{MatrizError, Result};
pub use crate::format::{parse_matrix, read_matrix, write_matrix};
pub use crate::primitives::{Matrix, MatrixBuilder, NumericKind, Op, Scalar};
