// =========================================================================
// Matrix algebra contract
//
// Laws every Matrix<T> must satisfy regardless of element type. Integer
// cases check exact equality; float cases use an absolute tolerance.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::*;

fn sample_2x3() -> Matrix<i64> {
    Matrix::from_vec(2, 3, vec![1, -2, 3, 4, 5, -6]).expect("valid")
}

/// Worked example: [[1,2],[3,4]] and [[5,6],[7,8]]
#[test]
fn contract_reference_example() {
    let mat1 = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).expect("valid");
    let mat2 = Matrix::from_vec(2, 2, vec![5, 6, 7, 8]).expect("valid");

    let sum = mat1.add(&mat2).expect("same shape");
    assert_eq!(sum.as_slice(), &[6, 8, 10, 12], "mat1 + mat2");

    let product = mat1.matmul(&mat2).expect("2x2 * 2x2");
    assert_eq!(product.as_slice(), &[19, 22, 43, 50], "mat1 * mat2");

    let transposed = transpose(&mat1);
    assert_eq!(transposed.as_slice(), &[1, 3, 2, 4], "transpose(mat1)");

    assert_eq!(trace(&mat1), Ok(5), "trace(mat1)");
}

/// Transpose involution: (A^T)^T = A
#[test]
fn contract_transpose_involution() {
    let a = sample_2x3();
    assert_eq!(a.transpose().transpose(), a);
}

/// Transpose swaps shape and entries: A^T[j, i] = A[i, j]
#[test]
fn contract_transpose_swaps_entries() {
    let a = sample_2x3();
    let at = a.transpose();

    assert_eq!(at.shape(), (3, 2));
    for i in 0..2 {
        for j in 0..3 {
            assert_eq!(at.get(j, i), a.get(i, j), "A^T[{j},{i}] != A[{i},{j}]");
        }
    }
}

/// Matmul shape: (m×k) * (k×n) = (m×n)
#[test]
fn contract_matmul_shape() {
    let a = Matrix::<i64>::new(2, 3);
    let b = Matrix::<i64>::new(3, 4);
    assert_eq!(a.matmul(&b).expect("compatible dims").shape(), (2, 4));
}

/// Identity matmul: I * A = A = A * I
#[test]
fn contract_identity_matmul() {
    let a = Matrix::from_vec(3, 3, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]).expect("valid");
    let eye = Matrix::<i64>::identity(3);

    assert_eq!(eye.matmul(&a).expect("compatible dims"), a);
    assert_eq!(a.matmul(&eye).expect("compatible dims"), a);
}

/// Trace invariant under transpose: tr(A^T) = tr(A)
#[test]
fn contract_trace_transpose() {
    let a = Matrix::from_vec(3, 3, vec![2, 0, 1, -3, 7, 4, 5, 5, -1]).expect("valid");
    assert_eq!(trace(&transpose(&a)), trace(&a));
}

/// Shape violations are reported, never coerced
#[test]
fn contract_shape_violations() {
    let a_2x3 = Matrix::<i64>::new(2, 3);
    let b_3x2 = Matrix::<i64>::new(3, 2);
    let c_2x2 = Matrix::<i64>::new(2, 2);

    assert!(matches!(
        a_2x3.add(&b_3x2),
        Err(MatrixError::DimensionMismatch { left: (2, 3), right: (3, 2), .. })
    ));
    assert!(matches!(
        a_2x3.matmul(&c_2x2),
        Err(MatrixError::DimensionMismatch { left: (2, 3), right: (2, 2), .. })
    ));
    assert_eq!(a_2x3.trace(), Err(MatrixError::NotSquare { rows: 2, cols: 3 }));
}

mod matrix_proptest_contract {
    use super::*;
    use proptest::prelude::*;

    fn int_matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<i64>> {
        proptest::collection::vec(-1_000i64..1_000, rows * cols)
            .prop_map(move |data| Matrix::from_vec(rows, cols, data).expect("valid"))
    }

    fn int_pair() -> impl Strategy<Value = (Matrix<i64>, Matrix<i64>)> {
        (0..=6usize, 0..=6usize)
            .prop_flat_map(|(rows, cols)| (int_matrix(rows, cols), int_matrix(rows, cols)))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn contract_prop_add_sub_inverse((a, b) in int_pair()) {
            let back = a.add(&b).and_then(|s| s.sub(&b)).expect("same shape");
            prop_assert_eq!(back, a);
        }

        #[test]
        fn contract_prop_add_commutes((a, b) in int_pair()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn contract_prop_transpose_involution(
            a in (0..=8usize, 0..=8usize).prop_flat_map(|(r, c)| int_matrix(r, c))
        ) {
            prop_assert_eq!(transpose(&transpose(&a)), a);
        }

        #[test]
        fn contract_prop_trace_transpose(a in (0..=6usize).prop_flat_map(|n| int_matrix(n, n))) {
            prop_assert_eq!(trace(&transpose(&a)), trace(&a));
        }

        #[test]
        fn contract_prop_identity_matmul(a in (0..=6usize).prop_flat_map(|n| int_matrix(n, n))) {
            let eye = Matrix::<i64>::identity(a.rows());
            prop_assert_eq!(eye.matmul(&a).expect("compatible"), a.clone());
            prop_assert_eq!(a.matmul(&eye).expect("compatible"), a);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn contract_prop_float_add_sub_inverse(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let data: Vec<f32> = (0..rows * cols)
                .map(|i| ((i as f32 + seed as f32) * 0.37).sin() * 10.0)
                .collect();
            let shift: Vec<f32> = (0..rows * cols)
                .map(|i| ((i as f32 * 1.3 + seed as f32) * 0.11).cos() * 10.0)
                .collect();
            let a = Matrix::from_vec(rows, cols, data).expect("valid");
            let b = Matrix::from_vec(rows, cols, shift).expect("valid");
            let back = a.add(&b).and_then(|s| s.sub(&b)).expect("same shape");

            for i in 0..rows {
                for j in 0..cols {
                    prop_assert!(
                        (back.get(i, j) - a.get(i, j)).abs() < 1e-4,
                        "((A+B)-B)[{},{}] != A[{},{}]",
                        i, j, i, j
                    );
                }
            }
        }
    }
}
