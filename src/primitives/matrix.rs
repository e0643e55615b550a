//! Matrix type for 2D numeric data.

use crate::error::{MatrixError, Operation, Result};
use crate::traits::Element;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// A dense 2D matrix with row-major storage.
///
/// The matrix exclusively owns its buffer. It is deliberately not `Copy`:
/// duplicating one takes an explicit [`Clone::clone`].
///
/// # Examples
///
/// ```
/// use densemat::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.get(1, 0), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

/// Buffer length for a `rows x cols` matrix.
///
/// # Panics
///
/// Panics if the product overflows `usize`.
#[track_caller]
fn checked_len(rows: usize, cols: usize) -> usize {
    match rows.checked_mul(cols) {
        Some(len) => len,
        None => panic!("matrix shape {rows}x{cols} overflows usize"),
    }
}

impl<T> Default for Matrix<T> {
    /// The empty `0x0` matrix.
    fn default() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }
}

impl<T> Matrix<T> {
    /// Creates a new matrix from a row-major vector of data.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::BufferLength`] if data length doesn't match
    /// rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(MatrixError::BufferLength {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Builds a matrix by evaluating `f(row, col)` in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(checked_len(rows, cols));
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { data, rows, cols }
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of elements, `rows * cols`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the matrix holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns the underlying data as a row-major slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the matrix and returns its row-major buffer.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Moves the contents out, leaving `self` as the empty `0x0` matrix.
    ///
    /// The buffer is transferred, not copied.
    ///
    /// ```
    /// use densemat::primitives::Matrix;
    ///
    /// let mut a = Matrix::<i32>::identity(3);
    /// let b = a.take();
    /// assert_eq!(b.shape(), (3, 3));
    /// assert_eq!(a.shape(), (0, 0));
    /// ```
    #[must_use]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    pub(super) fn checked_offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    #[track_caller]
    pub(super) fn offset(&self, row: usize, col: usize) -> usize {
        match self.checked_offset(row, col) {
            Some(offset) => offset,
            None => panic!(
                "index ({row}, {col}) out of bounds for {}x{} matrix",
                self.rows, self.cols
            ),
        }
    }

    /// Returns a mutable reference to the element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[track_caller]
    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[track_caller]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        *self.get_mut(row, col) = value;
    }

    /// Returns a row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row_idx >= rows`.
    #[must_use]
    #[track_caller]
    pub fn row(&self, row_idx: usize) -> &[T] {
        assert!(
            row_idx < self.rows,
            "row {row_idx} out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        let start = row_idx * self.cols;
        &self.data[start..start + self.cols]
    }
}

impl<T: Copy> Matrix<T> {
    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    #[track_caller]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[self.offset(row, col)]
    }

    /// Gets element at (row, col), or `None` when out of bounds.
    #[must_use]
    pub fn checked_get(&self, row: usize, col: usize) -> Option<T> {
        self.checked_offset(row, col).map(|offset| self.data[offset])
    }

    /// Transposes the matrix.
    ///
    /// Total for every shape; `(0, n)` becomes `(n, 0)`.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let (rows, cols) = self.shape();
        let src = &self.data;
        let data = (0..cols)
            .flat_map(|j| (0..rows).map(move |i| src[i * cols + j]))
            .collect();
        Self {
            data,
            rows: cols,
            cols: rows,
        }
    }
}

impl<T: Element> Matrix<T> {
    /// Creates a `rows x cols` matrix filled with [`Element::zero`].
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    #[must_use]
    #[track_caller]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::zero(); checked_len(rows, cols)],
            rows,
            cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    fn ensure_same_shape(&self, other: &Self, op: Operation) -> Result<()> {
        if self.shape() != other.shape() {
            debug!(
                op = %op,
                left = ?self.shape(),
                right = ?other.shape(),
                "rejecting operands with different shapes"
            );
            return Err(MatrixError::dimension_mismatch(
                op,
                self.shape(),
                other.shape(),
            ));
        }
        Ok(())
    }

    fn zip_with(&self, other: &Self, op: Operation, f: impl Fn(T, T) -> T) -> Result<Self> {
        self.ensure_same_shape(other, op)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, Operation::Add, |a, b| a + b)
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the shapes differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, Operation::Sub, |a, b| a - b)
    }

    /// Matrix-matrix multiplication.
    ///
    /// Each output element is accumulated from [`Element::zero`] over
    /// ascending `k`, so floating-point results are reproducible with
    /// or without the `parallel` feature.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if `self.cols() != other.rows()`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            debug!(
                op = %Operation::Mul,
                left = ?self.shape(),
                right = ?other.shape(),
                "rejecting operands with incompatible inner dimensions"
            );
            return Err(MatrixError::dimension_mismatch(
                Operation::Mul,
                self.shape(),
                other.shape(),
            ));
        }
        tracing::trace!(left = ?self.shape(), right = ?other.shape(), "multiplying matrices");

        let (rows, inner, cols) = (self.rows, self.cols, other.cols);
        let mut data = vec![T::zero(); checked_len(rows, cols)];

        // chunks_mut panics on a zero chunk size
        if cols > 0 {
            let fill_row = |(i, out): (usize, &mut [T])| {
                let lhs = &self.data[i * inner..(i + 1) * inner];
                for (j, slot) in out.iter_mut().enumerate() {
                    let mut acc = T::zero();
                    for (k, &a) in lhs.iter().enumerate() {
                        acc += a * other.data[k * cols + j];
                    }
                    *slot = acc;
                }
            };

            #[cfg(feature = "parallel")]
            data.par_chunks_mut(cols).enumerate().for_each(fill_row);

            #[cfg(not(feature = "parallel"))]
            data.chunks_mut(cols).enumerate().for_each(fill_row);
        }

        Ok(Self { data, rows, cols })
    }

    /// Sum of the diagonal, accumulated in ascending row order.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] if `rows != cols`.
    pub fn trace(&self) -> Result<T> {
        if !self.is_square() {
            debug!(rows = self.rows, cols = self.cols, "trace of non-square matrix");
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let mut sum = T::zero();
        for i in 0..self.rows {
            sum += self.data[i * self.cols + i];
        }
        Ok(sum)
    }

    /// Multiplies each element by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: T) -> Self {
        Self {
            data: self.data.iter().map(|&x| x * scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Matrix<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename = "Matrix")]
        struct Raw<T> {
            data: Vec<T>,
            rows: usize,
            cols: usize,
        }

        let raw = Raw::<T>::deserialize(deserializer)?;
        Matrix::from_vec(raw.rows, raw.cols, raw.data).map_err(serde::de::Error::custom)
    }
}

/// Returns the transpose of `matrix` as a new matrix.
///
/// ```
/// use densemat::{transpose, Matrix};
///
/// let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
/// assert_eq!(transpose(&m).as_slice(), &[1, 3, 2, 4]);
/// ```
#[must_use]
pub fn transpose<T: Copy>(matrix: &Matrix<T>) -> Matrix<T> {
    matrix.transpose()
}

/// Returns the sum of the diagonal of a square matrix.
///
/// # Errors
///
/// Returns [`MatrixError::NotSquare`] if `matrix` is not square.
///
/// ```
/// use densemat::{trace, Matrix};
///
/// let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
/// assert_eq!(trace(&m).unwrap(), 5);
/// ```
pub fn trace<T: Element>(matrix: &Matrix<T>) -> Result<T> {
    matrix.trace()
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_matrix_contract;
