//! Matrix type for 2D numeric data of a single runtime kind.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{NumericKind, Op, Scalar};
use crate::error::{MatrizError, Result};

/// A 2D matrix of [`Scalar`] cells sharing one [`NumericKind`]
/// (row-major storage).
///
/// A `Matrix` is always fully populated. Construction validates shape,
/// cell count, and kind uniformity up front, and incremental population
/// goes through [`MatrixBuilder`], which only yields a `Matrix` once every
/// cell has been set. Arithmetic therefore never meets an empty cell.
/// Deserialization runs the same checks, so a decoded payload cannot
/// carry a shape or kind its cells do not match.
///
/// All operations take their operands by reference and build a fresh
/// result; a failed operation leaves both operands untouched.
///
/// # Examples
///
/// ```
/// use matriz::{Matrix, NumericKind};
///
/// let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.kind(), NumericKind::I32);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    kind: NumericKind,
    cells: Vec<Scalar>,
}

// Unvalidated wire-side mirror of Matrix; derived deserialization goes
// through `TryFrom<RawMatrix>` instead of filling the fields directly.
#[derive(Deserialize)]
struct RawMatrix {
    rows: usize,
    cols: usize,
    kind: NumericKind,
    cells: Vec<Scalar>,
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = MatrizError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        let matrix = Matrix::from_vec(raw.rows, raw.cols, raw.cells)?;
        if matrix.kind != raw.kind {
            return Err(MatrizError::KindMismatch {
                expected: raw.kind,
                actual: matrix.kind,
            });
        }
        Ok(matrix)
    }
}

impl Matrix {
    /// Creates a new matrix from a vector of row-major data.
    ///
    /// The numeric kind is taken from the first value; every remaining
    /// value must share it.
    ///
    /// # Errors
    ///
    /// - [`MatrizError::InvalidShape`] if either dimension is zero or
    ///   rows * cols overflows `usize`.
    /// - [`MatrizError::SizeMismatch`] if data length doesn't equal
    ///   rows * cols.
    /// - [`MatrizError::KindMismatch`] if the values mix numeric kinds.
    pub fn from_vec<T: Into<Scalar>>(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let count = checked_cell_count(rows, cols)?;
        let cells: Vec<Scalar> = data.into_iter().map(Into::into).collect();
        if cells.len() != count {
            return Err(MatrizError::SizeMismatch {
                expected: count,
                actual: cells.len(),
            });
        }
        let kind = cells[0].kind();
        if let Some(stray) = cells.iter().find(|cell| cell.kind() != kind) {
            return Err(MatrizError::KindMismatch {
                expected: kind,
                actual: stray.kind(),
            });
        }
        Ok(Self {
            rows,
            cols,
            kind,
            cells,
        })
    }

    /// Creates a matrix with every cell set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidShape`] if either dimension is zero or
    /// the cell count overflows `usize`.
    pub fn filled<T: Into<Scalar>>(rows: usize, cols: usize, value: T) -> Result<Self> {
        let count = checked_cell_count(rows, cols)?;
        let value = value.into();
        Ok(Self {
            rows,
            cols,
            kind: value.kind(),
            cells: vec![value; count],
        })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns the numeric kind shared by every cell.
    #[must_use]
    pub fn kind(&self) -> NumericKind {
        self.kind
    }

    /// Returns true when both matrices have the same rows and cols.
    #[must_use]
    pub fn same_shape(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Gets the cell at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfRange`] if either index is out of
    /// bounds.
    pub fn get(&self, row: usize, col: usize) -> Result<Scalar> {
        let idx = checked_index(row, col, self.rows, self.cols)?;
        Ok(self.cells[idx])
    }

    /// Sets the cell at (row, col).
    ///
    /// # Errors
    ///
    /// - [`MatrizError::IndexOutOfRange`] if either index is out of bounds.
    /// - [`MatrizError::KindMismatch`] if the value's kind differs from the
    ///   matrix kind.
    pub fn set<T: Into<Scalar>>(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let value = value.into();
        if value.kind() != self.kind {
            return Err(MatrizError::KindMismatch {
                expected: self.kind,
                actual: value.kind(),
            });
        }
        let idx = checked_index(row, col, self.rows, self.cols)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Returns the cells as a row-major slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Scalar] {
        &self.cells
    }

    /// Combines two equally shaped matrices cell by cell under `op`.
    ///
    /// Shapes are validated before any cell is touched; each cell pair then
    /// goes through [`Scalar::apply`], so the operands' kinds must match
    /// and integer division checks every divisor.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::{Matrix, Op, Scalar};
    ///
    /// let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).expect("valid");
    /// let b = Matrix::from_vec(2, 2, vec![5, 6, 7, 8]).expect("valid");
    /// let sum = a.combine(&b, Op::Add).expect("same shape and kind");
    /// assert_eq!(sum.get(1, 1).expect("in bounds"), Scalar::I32(12));
    /// ```
    ///
    /// # Errors
    ///
    /// - [`MatrizError::ShapeMismatch`] if the shapes differ.
    /// - [`MatrizError::KindMismatch`] if the kinds differ.
    /// - [`MatrizError::DivisionByZero`] for an integer division meeting a
    ///   zero cell.
    pub fn combine(&self, other: &Self, op: Op) -> Result<Self> {
        if !self.same_shape(other) {
            return Err(MatrizError::shape_mismatch(self.shape(), other.shape()));
        }
        let mut cells = Vec::with_capacity(self.cells.len());
        for (&a, &b) in self.cells.iter().zip(other.cells.iter()) {
            cells.push(Scalar::apply(a, b, op)?);
        }
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            kind: self.kind,
            cells,
        })
    }

    /// Combines every cell with `scalar` on the right:
    /// `result[i][j] = self[i][j] op scalar`.
    ///
    /// # Errors
    ///
    /// - [`MatrizError::KindMismatch`] if the scalar's kind differs from
    ///   the matrix kind.
    /// - [`MatrizError::DivisionByZero`] for an integer division by a zero
    ///   scalar.
    pub fn combine_scalar<T: Into<Scalar>>(&self, scalar: T, op: Op) -> Result<Self> {
        let scalar = self.checked_operand(scalar.into())?;
        let mut cells = Vec::with_capacity(self.cells.len());
        for &cell in &self.cells {
            cells.push(Scalar::apply(cell, scalar, op)?);
        }
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            kind: self.kind,
            cells,
        })
    }

    /// Combines every cell with `scalar` on the left:
    /// `result[i][j] = scalar op self[i][j]`.
    ///
    /// For addition and multiplication this agrees with
    /// [`Matrix::combine_scalar`]; for subtraction and division the operand
    /// order matters and the two are distinct operations.
    ///
    /// # Errors
    ///
    /// - [`MatrizError::KindMismatch`] if the scalar's kind differs from
    ///   the matrix kind.
    /// - [`MatrizError::DivisionByZero`] for an integer division meeting a
    ///   zero cell.
    pub fn combine_scalar_left<T: Into<Scalar>>(&self, scalar: T, op: Op) -> Result<Self> {
        let scalar = self.checked_operand(scalar.into())?;
        let mut cells = Vec::with_capacity(self.cells.len());
        for &cell in &self.cells {
            cells.push(Scalar::apply(scalar, cell, op)?);
        }
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            kind: self.kind,
            cells,
        })
    }

    /// Adds another matrix cell by cell.
    ///
    /// # Errors
    ///
    /// See [`Matrix::combine`].
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.combine(other, Op::Add)
    }

    /// Subtracts another matrix cell by cell.
    ///
    /// # Errors
    ///
    /// See [`Matrix::combine`].
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.combine(other, Op::Sub)
    }

    /// Multiplies another matrix cell by cell (Hadamard product, not the
    /// matrix product).
    ///
    /// # Errors
    ///
    /// See [`Matrix::combine`].
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.combine(other, Op::Mul)
    }

    /// Divides by another matrix cell by cell. Integer kinds truncate and
    /// reject zero cells in `other`; float kinds follow IEEE-754.
    ///
    /// # Errors
    ///
    /// See [`Matrix::combine`].
    pub fn div(&self, other: &Self) -> Result<Self> {
        self.combine(other, Op::Div)
    }

    /// Adds `scalar` to every cell.
    ///
    /// # Errors
    ///
    /// See [`Matrix::combine_scalar`].
    pub fn add_scalar<T: Into<Scalar>>(&self, scalar: T) -> Result<Self> {
        self.combine_scalar(scalar, Op::Add)
    }

    /// Subtracts `scalar` from every cell.
    ///
    /// # Errors
    ///
    /// See [`Matrix::combine_scalar`].
    pub fn sub_scalar<T: Into<Scalar>>(&self, scalar: T) -> Result<Self> {
        self.combine_scalar(scalar, Op::Sub)
    }

    /// Multiplies every cell by `scalar`.
    ///
    /// # Errors
    ///
    /// See [`Matrix::combine_scalar`].
    pub fn mul_scalar<T: Into<Scalar>>(&self, scalar: T) -> Result<Self> {
        self.combine_scalar(scalar, Op::Mul)
    }

    /// Divides every cell by `scalar`.
    ///
    /// # Errors
    ///
    /// See [`Matrix::combine_scalar`].
    pub fn div_scalar<T: Into<Scalar>>(&self, scalar: T) -> Result<Self> {
        self.combine_scalar(scalar, Op::Div)
    }

    /// Subtracts every cell from `scalar`: `result[i][j] = scalar - self[i][j]`.
    ///
    /// # Errors
    ///
    /// See [`Matrix::combine_scalar_left`].
    pub fn scalar_sub<T: Into<Scalar>>(&self, scalar: T) -> Result<Self> {
        self.combine_scalar_left(scalar, Op::Sub)
    }

    /// Divides `scalar` by every cell: `result[i][j] = scalar / self[i][j]`.
    ///
    /// # Errors
    ///
    /// See [`Matrix::combine_scalar_left`].
    pub fn scalar_div<T: Into<Scalar>>(&self, scalar: T) -> Result<Self> {
        self.combine_scalar_left(scalar, Op::Div)
    }

    fn checked_operand(&self, scalar: Scalar) -> Result<Scalar> {
        if scalar.kind() != self.kind {
            return Err(MatrizError::KindMismatch {
                expected: self.kind,
                actual: scalar.kind(),
            });
        }
        Ok(scalar)
    }
}

// Renders as bracketed rows, one per line: "[[1, 2],\n [3, 4]]".
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for row in 0..self.rows {
            if row > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "[")?;
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.cells[row * self.cols + col])?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

/// Incremental construction arena for [`Matrix`].
///
/// A fresh builder has every cell empty. Cells are populated one at a time
/// (the text reader does this token by token), reading an unpopulated cell
/// yields `None`, and [`MatrixBuilder::finish`] hands out a [`Matrix`] only
/// once no empty cell remains. The transient empty state never escapes the
/// builder.
///
/// # Examples
///
/// ```
/// use matriz::{MatrixBuilder, NumericKind, Scalar};
///
/// let mut builder = MatrixBuilder::new(1, 2, NumericKind::I64).expect("valid shape");
/// assert_eq!(builder.get(0, 1).expect("in bounds"), None);
///
/// builder.set(0, 0, 7i64).expect("kind matches");
/// builder.set(0, 1, 9i64).expect("kind matches");
///
/// let m = builder.finish().expect("fully populated");
/// assert_eq!(m.get(0, 1).expect("in bounds"), Scalar::I64(9));
/// ```
#[derive(Debug, Clone)]
pub struct MatrixBuilder {
    rows: usize,
    cols: usize,
    kind: NumericKind,
    cells: Vec<Option<Scalar>>,
}

impl MatrixBuilder {
    /// Creates an all-empty builder for a rows x cols matrix of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidShape`] if either dimension is zero or
    /// the cell count overflows `usize`.
    pub fn new(rows: usize, cols: usize, kind: NumericKind) -> Result<Self> {
        let count = checked_cell_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            kind,
            cells: vec![None; count],
        })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the numeric kind every populated cell must carry.
    #[must_use]
    pub fn kind(&self) -> NumericKind {
        self.kind
    }

    /// Populates the cell at (row, col), replacing any earlier value.
    ///
    /// # Errors
    ///
    /// - [`MatrizError::IndexOutOfRange`] if either index is out of bounds.
    /// - [`MatrizError::KindMismatch`] if the value's kind differs from the
    ///   builder's kind.
    pub fn set<T: Into<Scalar>>(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let value = value.into();
        if value.kind() != self.kind {
            return Err(MatrizError::KindMismatch {
                expected: self.kind,
                actual: value.kind(),
            });
        }
        let idx = checked_index(row, col, self.rows, self.cols)?;
        self.cells[idx] = Some(value);
        Ok(())
    }

    /// Reads the cell at (row, col); `None` while it is unpopulated.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfRange`] if either index is out of
    /// bounds.
    pub fn get(&self, row: usize, col: usize) -> Result<Option<Scalar>> {
        let idx = checked_index(row, col, self.rows, self.cols)?;
        Ok(self.cells[idx])
    }

    /// Returns true once every cell has been populated.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Consumes the builder and produces the fully populated [`Matrix`].
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::EmptyCell`] naming the first unpopulated cell
    /// in row-major order.
    pub fn finish(self) -> Result<Matrix> {
        let Self {
            rows,
            cols,
            kind,
            cells,
        } = self;
        let mut filled = Vec::with_capacity(cells.len());
        for (idx, cell) in cells.into_iter().enumerate() {
            match cell {
                Some(value) => filled.push(value),
                None => {
                    return Err(MatrizError::EmptyCell {
                        row: idx / cols,
                        col: idx % cols,
                    })
                }
            }
        }
        Ok(Matrix {
            rows,
            cols,
            kind,
            cells: filled,
        })
    }
}

// Dimensions can arrive unbounded from parsed text, so the product is
// overflow-checked before any storage is sized from it.
fn checked_cell_count(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(MatrizError::InvalidShape { rows, cols });
    }
    rows.checked_mul(cols)
        .ok_or(MatrizError::InvalidShape { rows, cols })
}

fn checked_index(row: usize, col: usize, rows: usize, cols: usize) -> Result<usize> {
    if row >= rows || col >= cols {
        return Err(MatrizError::IndexOutOfRange {
            row,
            col,
            rows,
            cols,
        });
    }
    Ok(row * cols + col)
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
