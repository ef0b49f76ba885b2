//! Core compute primitives (Matrix).
//!
//! The matrix value type is the foundation of the crate; everything else
//! is support for it.

mod matrix;

pub use matrix::Matrix;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_matrix_contract;
