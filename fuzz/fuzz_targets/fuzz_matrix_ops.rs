#![no_main]

use densemat::{trace, transpose, Matrix, MatrixError};
use libfuzzer_sys::fuzz_target;

fn build(rows: usize, cols: usize, bytes: &[u8]) -> Matrix<i64> {
    Matrix::from_fn(rows, cols, |i, j| {
        bytes
            .get(i * cols + j)
            .map_or(0, |&b| i64::from(b as i8))
    })
}

fuzz_target!(|data: &[u8]| {
    // Four shape bytes, then element data shared by both operands.
    // Shapes stay small so element sums cannot overflow i64.
    if data.len() < 4 {
        return;
    }
    let (r1, c1) = (usize::from(data[0] % 9), usize::from(data[1] % 9));
    let (r2, c2) = (usize::from(data[2] % 9), usize::from(data[3] % 9));
    let payload = &data[4..];

    let a = build(r1, c1, payload);
    let b = build(r2, c2, payload.get(r1 * c1..).unwrap_or(&[]));

    match a.add(&b) {
        Ok(sum) => assert_eq!(sum.shape(), (r1, c1)),
        Err(MatrixError::DimensionMismatch { left, right, .. }) => {
            assert_ne!(left, right);
        }
        Err(other) => panic!("unexpected error from add: {other}"),
    }

    match a.sub(&b) {
        Ok(diff) => assert_eq!(diff.add(&b).expect("same shape"), a),
        Err(err) => assert!(matches!(err, MatrixError::DimensionMismatch { .. })),
    }

    match a.matmul(&b) {
        Ok(product) => {
            assert_eq!(c1, r2);
            assert_eq!(product.shape(), (r1, c2));
        }
        Err(err) => {
            assert_ne!(c1, r2);
            assert!(matches!(err, MatrixError::DimensionMismatch { .. }));
        }
    }

    let t = transpose(&a);
    assert_eq!(t.shape(), (c1, r1));
    assert_eq!(transpose(&t), a);

    match trace(&a) {
        Ok(tr) => assert_eq!(Ok(tr), trace(&t)),
        Err(err) => assert_eq!(err, MatrixError::NotSquare { rows: r1, cols: c1 }),
    }
});
