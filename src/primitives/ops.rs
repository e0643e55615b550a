//! Operator bindings for [`Matrix`].
//!
//! `+`, `-`, and `*` forward to [`Matrix::add`], [`Matrix::sub`], and
//! [`Matrix::matmul`] and yield a [`Result`], so shape checks are never
//! bypassed by the operator syntax.

use super::Matrix;
use crate::error::Result;
use crate::traits::Element;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

macro_rules! impl_binary_op {
    ($op:ident, $method:ident, $inherent:ident) => {
        impl<T: Element> $op<&Matrix<T>> for &Matrix<T> {
            type Output = Result<Matrix<T>>;

            fn $method(self, rhs: &Matrix<T>) -> Self::Output {
                Matrix::$inherent(self, rhs)
            }
        }

        impl<T: Element> $op for Matrix<T> {
            type Output = Result<Matrix<T>>;

            fn $method(self, rhs: Matrix<T>) -> Self::Output {
                Matrix::$inherent(&self, &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add);
impl_binary_op!(Sub, sub, sub);
impl_binary_op!(Mul, mul, matmul);

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.as_slice()[self.offset(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        self.get_mut(row, col)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{MatrixError, Operation};
    use crate::primitives::Matrix;

    fn m(rows: usize, cols: usize, data: Vec<i32>) -> Matrix<i32> {
        Matrix::from_vec(rows, cols, data).expect("test data has correct dimensions")
    }

    #[test]
    fn test_ref_operators() {
        let a = m(2, 2, vec![1, 2, 3, 4]);
        let b = m(2, 2, vec![5, 6, 7, 8]);

        assert_eq!((&a + &b).expect("same shape").as_slice(), &[6, 8, 10, 12]);
        assert_eq!((&b - &a).expect("same shape").as_slice(), &[4, 4, 4, 4]);
        assert_eq!((&a * &b).expect("2x2 * 2x2").as_slice(), &[19, 22, 43, 50]);

        // Operands are borrowed, not consumed.
        assert_eq!(a.shape(), (2, 2));
        assert_eq!(b.shape(), (2, 2));
    }

    #[test]
    fn test_owned_operators() {
        let sum = m(1, 3, vec![1, 2, 3]) + m(1, 3, vec![10, 20, 30]);
        assert_eq!(sum.expect("same shape").as_slice(), &[11, 22, 33]);

        let product = m(1, 2, vec![1, 2]) * m(2, 1, vec![3, 4]);
        assert_eq!(product.expect("1x2 * 2x1").as_slice(), &[11]);
    }

    #[test]
    fn test_operator_errors_match_methods() {
        let a = m(2, 3, vec![0; 6]);
        let b = m(3, 2, vec![0; 6]);

        assert_eq!(&a + &b, a.add(&b));
        assert_eq!(&a - &b, a.sub(&b));
        assert_eq!(
            &a * &a,
            Err(MatrixError::DimensionMismatch {
                op: Operation::Mul,
                left: (2, 3),
                right: (2, 3),
            })
        );
    }

    #[test]
    fn test_index() {
        let mut a = m(2, 3, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(a[(1, 2)], 6);
        a[(0, 1)] = 20;
        assert_eq!(a.get(0, 1), 20);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_column_out_of_bounds() {
        // Linear offset 3 is inside the buffer, but column 3 is not.
        let a = m(2, 3, vec![1, 2, 3, 4, 5, 6]);
        let _ = a[(0, 3)];
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_mut_row_out_of_bounds() {
        let mut a = m(2, 3, vec![1, 2, 3, 4, 5, 6]);
        a[(2, 0)] = 1;
    }
}
