//! Error types for matriz operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

use crate::primitives::NumericKind;

/// Main error type for matriz operations.
///
/// Provides detailed context about failures including shape and size
/// mismatches, unparseable tokens, numeric kind conflicts, and integer
/// division by zero.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::shape_mismatch((2, 3), (3, 2));
/// assert!(err.to_string().contains("shape mismatch"));
/// ```
#[derive(Debug)]
pub enum MatrizError {
    /// A requested shape has a zero dimension or a cell count that
    /// overflows `usize`.
    InvalidShape {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// Two matrices' dimensions differ where the operation needs them equal.
    ShapeMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// The number of values provided does not match the declared dimensions.
    SizeMismatch {
        /// Cell count implied by the dimensions
        expected: usize,
        /// Number of values actually provided
        actual: usize,
    },

    /// A text token could not be parsed as the requested target.
    NotANumber {
        /// The offending token
        token: String,
        /// What the token was supposed to parse as
        target: String,
    },

    /// Integer division by zero.
    DivisionByZero,

    /// Values of two different numeric kinds met where one kind is required.
    KindMismatch {
        /// Kind of the receiving matrix or first operand
        expected: NumericKind,
        /// Kind actually found
        actual: NumericKind,
    },

    /// A cell index lies outside the matrix bounds.
    IndexOutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Matrix row count
        rows: usize,
        /// Matrix column count
        cols: usize,
    },

    /// A builder was finished while at least one cell was still unpopulated.
    EmptyCell {
        /// Row of the first empty cell in row-major order
        row: usize,
        /// Column of the first empty cell
        col: usize,
    },

    /// I/O error while reading matrix text.
    Io(std::io::Error),
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::InvalidShape { rows, cols } => {
                write!(
                    f,
                    "Invalid shape {rows}x{cols}: dimensions must be at least 1 and the cell count must fit in usize"
                )
            }
            MatrizError::ShapeMismatch { expected, actual } => {
                write!(f, "Matrix shape mismatch: expected {expected}, got {actual}")
            }
            MatrizError::SizeMismatch { expected, actual } => {
                write!(f, "Size mismatch: expected {expected} values, got {actual}")
            }
            MatrizError::NotANumber { token, target } => {
                write!(f, "Not a number: {token:?} cannot be parsed as {target}")
            }
            MatrizError::DivisionByZero => write!(f, "Integer division by zero"),
            MatrizError::KindMismatch { expected, actual } => {
                write!(f, "Numeric kind mismatch: expected {expected}, got {actual}")
            }
            MatrizError::IndexOutOfRange {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "Index ({row}, {col}) out of range for a {rows}x{cols} matrix"
                )
            }
            MatrizError::EmptyCell { row, col } => {
                write!(f, "Cell ({row}, {col}) was never populated")
            }
            MatrizError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for MatrizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatrizError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MatrizError {
    fn from(err: std::io::Error) -> Self {
        MatrizError::Io(err)
    }
}

impl MatrizError {
    /// Create a shape mismatch error from two `(rows, cols)` pairs.
    #[must_use]
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::ShapeMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }

    /// Create a not-a-number error for a token that failed to parse.
    #[must_use]
    pub fn not_a_number(token: &str, target: &str) -> Self {
        Self::NotANumber {
            token: token.to_string(),
            target: target.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;
