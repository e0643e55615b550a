//! Property-based tests using proptest.
//!
//! These tests verify the algebraic laws of matrix arithmetic on random
//! shapes, including empty ones.

use densemat::prelude::*;
use proptest::prelude::*;

// Strategy for generating integer matrices of a fixed shape
fn int_matrix_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<i64>> {
    proptest::collection::vec(-100i64..100, rows * cols).prop_map(move |data| {
        Matrix::from_vec(rows, cols, data).expect("Test data should be valid")
    })
}

// Strategy for generating float matrices of a fixed shape
fn float_matrix_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<f64>> {
    proptest::collection::vec(-100.0f64..100.0, rows * cols).prop_map(move |data| {
        Matrix::from_vec(rows, cols, data).expect("Test data should be valid")
    })
}

fn shape_strategy() -> impl Strategy<Value = (usize, usize)> {
    (0..=5usize, 0..=5usize)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn add_then_sub_restores_float_matrix(
        (a, b) in shape_strategy().prop_flat_map(|(r, c)| {
            (float_matrix_strategy(r, c), float_matrix_strategy(r, c))
        })
    ) {
        let back = (&(&a + &b).expect("same shape") - &b).expect("same shape");
        for i in 0..a.rows() {
            for j in 0..a.cols() {
                prop_assert!((back[(i, j)] - a[(i, j)]).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn matmul_is_associative_for_integers(
        (a, b, c) in (1..=4usize, 1..=4usize, 1..=4usize, 1..=4usize).prop_flat_map(|(m, k, n, p)| {
            (int_matrix_strategy(m, k), int_matrix_strategy(k, n), int_matrix_strategy(n, p))
        })
    ) {
        let left = (&(&a * &b).expect("m x k * k x n") * &c).expect("m x n * n x p");
        let right = (&a * &(&b * &c).expect("k x n * n x p")).expect("m x k * k x p");
        prop_assert_eq!(left, right);
    }

    #[test]
    fn transpose_distributes_over_add(
        (a, b) in shape_strategy().prop_flat_map(|(r, c)| {
            (int_matrix_strategy(r, c), int_matrix_strategy(r, c))
        })
    ) {
        let lhs = transpose(&(&a + &b).expect("same shape"));
        let rhs = (&transpose(&a) + &transpose(&b)).expect("same shape");
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn mismatched_shapes_always_rejected(
        (r1, c1) in shape_strategy(),
        (r2, c2) in shape_strategy(),
    ) {
        let a = Matrix::<i64>::new(r1, c1);
        let b = Matrix::<i64>::new(r2, c2);

        let sum = &a + &b;
        if (r1, c1) == (r2, c2) {
            prop_assert_eq!(sum.expect("same shape").shape(), (r1, c1));
        } else {
            prop_assert_eq!(
                sum,
                Err(MatrixError::DimensionMismatch {
                    op: Operation::Add,
                    left: (r1, c1),
                    right: (r2, c2),
                })
            );
        }

        let product = &a * &b;
        if c1 == r2 {
            prop_assert_eq!(product.expect("inner dims agree").shape(), (r1, c2));
        } else {
            let is_mismatch = matches!(product, Err(MatrixError::DimensionMismatch { .. }));
            prop_assert!(is_mismatch);
        }

        prop_assert_eq!(trace(&a).is_ok(), r1 == c1);
    }

    #[test]
    fn get_matches_row_major_buffer(
        a in shape_strategy().prop_flat_map(|(r, c)| int_matrix_strategy(r, c))
    ) {
        for i in 0..a.rows() {
            for j in 0..a.cols() {
                prop_assert_eq!(a.get(i, j), a.as_slice()[i * a.cols() + j]);
            }
        }
        prop_assert_eq!(a.checked_get(a.rows(), 0), None);
        prop_assert_eq!(a.checked_get(0, a.cols()), None);
    }
}
