//! Core compute primitive: the dense [`Matrix`] and its free functions.

mod matrix;
mod ops;

pub use matrix::{trace, transpose, Matrix};
