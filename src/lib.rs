//! Densemat: owned, row-major dense matrices with shape-checked arithmetic.
//!
//! A [`Matrix`] exclusively owns a contiguous buffer of `rows * cols`
//! elements. Addition, subtraction, and multiplication validate operand
//! shapes and report violations as a typed [`MatrixError`] instead of
//! truncating or broadcasting.
//!
//! # Quick Start
//!
//! ```
//! use densemat::prelude::*;
//!
//! let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
//! let b = Matrix::from_vec(2, 2, vec![5, 6, 7, 8]).unwrap();
//!
//! let sum = (&a + &b).unwrap();
//! assert_eq!(sum.as_slice(), &[6, 8, 10, 12]);
//!
//! let product = (&a * &b).unwrap();
//! assert_eq!(product.as_slice(), &[19, 22, 43, 50]);
//!
//! assert_eq!(transpose(&a).as_slice(), &[1, 3, 2, 4]);
//! assert_eq!(trace(&a).unwrap(), 5);
//!
//! // Shape violations are typed errors.
//! let wide = Matrix::<i32>::new(2, 3);
//! assert!(matches!(trace(&wide), Err(MatrixError::NotSquare { rows: 2, cols: 3 })));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the [`Matrix`] type, [`transpose`], and [`trace`]
//! - [`traits`]: the [`Element`] capability bound for element types
//! - [`error`]: [`MatrixError`] and the crate [`Result`] alias
//!
//! # Features
//!
//! - `parallel`: compute product rows on the rayon thread pool. Results
//!   are identical to the serial path.

pub mod error;
pub mod prelude;
pub mod primitives;
pub mod traits;

pub use error::{MatrixError, Operation, Result};
pub use primitives::{trace, transpose, Matrix};
pub use traits::Element;
