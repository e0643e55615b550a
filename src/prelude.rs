//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use densemat::prelude::*;
//!
//! let m = Matrix::<i64>::identity(2);
//! assert_eq!(trace(&m).unwrap(), 2);
//! ```

pub use crate::error::{MatrixError, Operation, Result};
pub use crate::primitives::{trace, transpose, Matrix};
pub use crate::traits::Element;
