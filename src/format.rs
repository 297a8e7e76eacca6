//! Line-oriented text format for matrix exchange.
//!
//! A matrix travels as exactly three lines:
//!
//! 1. the row count,
//! 2. the column count,
//! 3. all cells in row-major order, separated by whitespace.
//!
//! The caller names the [`NumericKind`] the cells parse as; the token count
//! is checked against the declared dimensions before any token is parsed,
//! so a malformed matrix is rejected by its shape first and by its cell
//! contents second.
//!
//! # Examples
//!
//! ```
//! use matriz::format::{parse_matrix, write_matrix};
//! use matriz::NumericKind;
//!
//! let m = parse_matrix("2\n2\n1 2 3 4", NumericKind::I32).expect("well formed");
//! let text = write_matrix(&m);
//! assert_eq!(parse_matrix(&text, NumericKind::I32).expect("round-trips"), m);
//! ```

use std::io::{self, BufRead};

use crate::error::{MatrizError, Result};
use crate::primitives::{Matrix, MatrixBuilder, NumericKind};

/// Reads one matrix in the three-line text format from `reader`.
///
/// Lines are trimmed, so trailing `\r` and surrounding spaces are
/// harmless. Any content after the cell line is left unread.
///
/// # Errors
///
/// - [`MatrizError::Io`] with [`io::ErrorKind::UnexpectedEof`] when the
///   input ends before all three lines arrive.
/// - [`MatrizError::NotANumber`] when a dimension line or a cell token
///   does not parse.
/// - [`MatrizError::InvalidShape`] when a dimension is zero or the
///   declared cell count overflows `usize`.
/// - [`MatrizError::SizeMismatch`] when the cell line's token count does
///   not equal rows * cols.
pub fn read_matrix<R: BufRead>(mut reader: R, kind: NumericKind) -> Result<Matrix> {
    let rows = read_dimension(&mut reader, "row count")?;
    let cols = read_dimension(&mut reader, "column count")?;
    let mut builder = MatrixBuilder::new(rows, cols, kind)?;

    let line = read_trimmed_line(&mut reader, "cell line")?;
    let tokens: Vec<&str> = line.split_whitespace().collect();
    // MatrixBuilder::new has already proven that rows * cols fits in usize.
    if tokens.len() != rows * cols {
        return Err(MatrizError::SizeMismatch {
            expected: rows * cols,
            actual: tokens.len(),
        });
    }
    for (idx, token) in tokens.iter().enumerate() {
        let value = kind.parse_token(token)?;
        builder.set(idx / cols, idx % cols, value)?;
    }
    builder.finish()
}

/// Parses one matrix in the three-line text format from a string.
///
/// # Errors
///
/// See [`read_matrix`].
pub fn parse_matrix(text: &str, kind: NumericKind) -> Result<Matrix> {
    read_matrix(text.as_bytes(), kind)
}

/// Serializes a matrix into the three-line text format.
///
/// The output ends with a newline and parses back, under the matrix's own
/// kind, into an equal matrix.
#[must_use]
pub fn write_matrix(matrix: &Matrix) -> String {
    let cells: Vec<String> = matrix.as_slice().iter().map(ToString::to_string).collect();
    format!(
        "{}\n{}\n{}\n",
        matrix.n_rows(),
        matrix.n_cols(),
        cells.join(" ")
    )
}

fn read_trimmed_line<R: BufRead>(reader: &mut R, what: &'static str) -> Result<String> {
    let mut line = String::new();
    let bytes = reader.read_line(&mut line)?;
    if bytes == 0 {
        return Err(MatrizError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("input ended before the {what}"),
        )));
    }
    Ok(line.trim().to_string())
}

fn read_dimension<R: BufRead>(reader: &mut R, what: &'static str) -> Result<usize> {
    let line = read_trimmed_line(reader, what)?;
    line.parse::<usize>()
        .map_err(|_| MatrizError::not_a_number(&line, what))
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
