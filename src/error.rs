//! Error types for Matriz operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Matriz operations.
///
/// Covers construction failures (empty or ragged input, bad sizes) and
/// shape violations detected by the algebraic operations.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::IncompatibleShape { lhs_cols: 3, rhs_rows: 2 };
/// assert!(err.to_string().contains("Number of columns"));
/// ```
#[derive(Debug)]
pub enum MatrizError {
    /// Flat buffer length does not match the requested dimensions.
    InvalidShape {
        /// Expected element count (rows * cols)
        expected: usize,
        /// Actual buffer length
        actual: usize,
    },

    /// Matrix has zero rows or zero columns.
    EmptyMatrix,

    /// Rows of the input do not all share the first row's length.
    RaggedRows,

    /// Non-positive size argument to a sized constructor.
    InvalidSize {
        /// Full message naming the offending constructor
        message: String,
    },

    /// Operand shapes differ in an element-wise operation.
    DimensionMismatch {
        /// Phrase naming the operation, e.g. "to be added"
        action: String,
        /// Left operand shape rendered as "RxC"
        lhs: String,
        /// Right operand shape rendered as "RxC"
        rhs: String,
    },

    /// Inner dimensions do not agree in a matrix product.
    IncompatibleShape {
        /// Column count of the left operand
        lhs_cols: usize,
        /// Row count of the right operand
        rhs_rows: usize,
    },

    /// Replacement row has the wrong number of elements.
    RowLengthMismatch {
        /// Required row length (the matrix column count)
        expected: usize,
    },

    /// Row or column index outside the matrix bounds.
    IndexOutOfRange {
        /// Offending index
        index: usize,
        /// Length of the indexed axis
        len: usize,
    },
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::InvalidShape { expected, actual } => {
                write!(
                    f,
                    "Data length must equal rows * cols (expected {expected}, got {actual})"
                )
            }
            MatrizError::EmptyMatrix => write!(f, "Matrix cannot be empty."),
            MatrizError::RaggedRows => write!(f, "All rows must have the same length."),
            MatrizError::InvalidSize { message } => write!(f, "{message}"),
            MatrizError::DimensionMismatch { action, lhs, rhs } => {
                write!(
                    f,
                    "Matrices must have the same dimensions {action}. One is {lhs} and the other is {rhs}"
                )
            }
            MatrizError::IncompatibleShape { lhs_cols, rhs_rows } => {
                write!(
                    f,
                    "Number of columns in the first matrix ({lhs_cols}) must equal number of rows in the second matrix ({rhs_rows})."
                )
            }
            MatrizError::RowLengthMismatch { expected } => {
                write!(f, "Row must have exactly {expected} elements.")
            }
            MatrizError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of bounds (len={len})")
            }
        }
    }
}

impl std::error::Error for MatrizError {}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for MatrizError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<MatrizError> for &str {
    fn eq(&self, other: &MatrizError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;
