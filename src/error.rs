//! Error types for matrix operations.
//!
//! Shape violations are reported as typed values carrying the offending
//! shapes. Out-of-bounds element access is not an error here: it is a
//! programming mistake and panics at the call site.

use std::fmt;
use thiserror::Error;

/// Binary operation that rejected its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Elementwise addition.
    Add,
    /// Elementwise subtraction.
    Sub,
    /// Matrix multiplication.
    Mul,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "addition",
            Operation::Sub => "subtraction",
            Operation::Mul => "multiplication",
        };
        f.write_str(name)
    }
}

/// Main error type for matrix operations.
///
/// # Examples
///
/// ```
/// use densemat::error::{MatrixError, Operation};
///
/// let err = MatrixError::DimensionMismatch {
///     op: Operation::Add,
///     left: (2, 3),
///     right: (3, 2),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Operand shapes are incompatible for the operation.
    #[error("Matrix dimension mismatch in {op}: left is {left:?}, right is {right:?}")]
    DimensionMismatch {
        /// Operation that was attempted
        op: Operation,
        /// Shape of the left operand as (rows, cols)
        left: (usize, usize),
        /// Shape of the right operand as (rows, cols)
        right: (usize, usize),
    },

    /// Operation requires a square matrix.
    #[error("Matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// Buffer length disagrees with the requested shape.
    #[error("Buffer of length {len} cannot back a {rows}x{cols} matrix")]
    BufferLength {
        /// Requested rows
        rows: usize,
        /// Requested columns
        cols: usize,
        /// Length of the supplied buffer
        len: usize,
    },
}

impl MatrixError {
    /// Create a dimension mismatch error for `op` from the operand shapes.
    #[must_use]
    pub fn dimension_mismatch(op: Operation, left: (usize, usize), right: (usize, usize)) -> Self {
        Self::DimensionMismatch { op, left, right }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrixError>;
