//! Matriz: a dense-matrix value type in pure Rust.
//!
//! Matriz provides a single rectangular, exclusively-owned matrix primitive
//! with validated construction and the standard algebraic operations:
//! addition, subtraction, element-wise multiplication, scalar
//! multiplication, matrix multiplication, and transpose. It is a
//! self-contained numeric primitive, not a performance-oriented
//! linear-algebra library.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a = Matrix::from_rows(vec![
//!     vec![1, 2],
//!     vec![3, 4],
//! ]).unwrap();
//! let b = Matrix::identity(2).unwrap();
//!
//! // Multiplying by the identity leaves the matrix unchanged.
//! let product = a.matmul(&b).unwrap();
//! assert_eq!(product, a);
//!
//! // All operations are pure: operands are never mutated.
//! let doubled = a.mul_scalar(2);
//! assert_eq!(doubled.to_rows(), vec![vec![2, 4], vec![6, 8]]);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: The core Matrix type
//! - [`error`]: Error enum and Result alias
//! - [`prelude`]: Convenience re-exports

pub mod error;
pub mod prelude;
pub mod primitives;
