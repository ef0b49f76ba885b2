//! Matrix type for 2D numeric data.

use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::{Num, One, Zero};
use serde::{Deserialize, Serialize};

use crate::error::{MatrizError, Result};

/// A dense 2D matrix of numeric values (row-major storage).
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).expect("rows are rectangular");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a matrix from nested row vectors.
    ///
    /// The column count is fixed from the first row's length.
    ///
    /// # Errors
    ///
    /// Returns `EmptyMatrix` if there are no rows or the first row is empty,
    /// and `RaggedRows` if any row differs in length from the first.
    pub fn from_rows(data: Vec<Vec<T>>) -> Result<Self> {
        if data.is_empty() || data[0].is_empty() {
            return Err(MatrizError::EmptyMatrix);
        }
        let cols = data[0].len();
        if data.iter().any(|row| row.len() != cols) {
            return Err(MatrizError::RaggedRows);
        }
        let rows = data.len();
        let flat: Vec<T> = data.into_iter().flatten().collect();
        Ok(Self {
            data: flat,
            rows,
            cols,
        })
    }

    /// Creates a new matrix from a flat row-major vector.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShape` if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatrizError::InvalidShape {
                expected: rows * cols,
                actual: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns true iff the matrix has as many rows as columns.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.check_row(row)?;
        self.check_col(col)?;
        Ok(self.data[row * self.cols + col])
    }

    /// Sets element at (row, col).
    ///
    /// The inserted value is not re-validated beyond its type; shape is
    /// unaffected by single-element writes.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if either index is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_row(row)?;
        self.check_col(col)?;
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Returns a row as a slice into the backing storage.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if the row index is out of bounds.
    pub fn row(&self, row_idx: usize) -> Result<&[T]> {
        self.check_row(row_idx)?;
        let start = row_idx * self.cols;
        Ok(&self.data[start..start + self.cols])
    }

    /// Returns a mutable row slice into the backing storage.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if the row index is out of bounds.
    pub fn row_mut(&mut self, row_idx: usize) -> Result<&mut [T]> {
        self.check_row(row_idx)?;
        let start = row_idx * self.cols;
        Ok(&mut self.data[start..start + self.cols])
    }

    /// Returns a column as a new vector.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if the column index is out of bounds.
    pub fn column(&self, col_idx: usize) -> Result<Vec<T>> {
        self.check_col(col_idx)?;
        Ok((0..self.rows)
            .map(|row| self.data[row * self.cols + col_idx])
            .collect())
    }

    /// Replaces row `row_idx` wholesale.
    ///
    /// The length check runs before the index check, so a wrong-length row
    /// is always reported as `RowLengthMismatch`.
    ///
    /// # Errors
    ///
    /// Returns `RowLengthMismatch` if the row length differs from the
    /// column count, and `IndexOutOfRange` for a bad row index.
    pub fn set_row(&mut self, row_idx: usize, values: &[T]) -> Result<()> {
        if values.len() != self.cols {
            return Err(MatrizError::RowLengthMismatch {
                expected: self.cols,
            });
        }
        self.check_row(row_idx)?;
        let start = row_idx * self.cols;
        self.data[start..start + self.cols].copy_from_slice(values);
        Ok(())
    }

    /// Returns the underlying data as a flat row-major slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the data as nested row vectors.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.data.chunks(self.cols).map(<[T]>::to_vec).collect()
    }

    fn check_row(&self, index: usize) -> Result<()> {
        if index >= self.rows {
            return Err(MatrizError::IndexOutOfRange {
                index,
                len: self.rows,
            });
        }
        Ok(())
    }

    fn check_col(&self, index: usize) -> Result<()> {
        if index >= self.cols {
            return Err(MatrizError::IndexOutOfRange {
                index,
                len: self.cols,
            });
        }
        Ok(())
    }
}

impl<T: Num + Copy> Matrix<T> {
    /// Creates an identity matrix of size n x n.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` if n is zero.
    pub fn identity(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(MatrizError::InvalidSize {
                message: "Size of the identity matrix must be a positive integer.".to_string(),
            });
        }
        let mut data = vec![T::zero(); n * n];
        for i in 0..n {
            data[i * n + i] = T::one();
        }
        Ok(Self {
            data,
            rows: n,
            cols: n,
        })
    }

    /// Creates a matrix of zeros.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` if either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::InvalidSize {
                message: "Number of rows and columns must be positive integers.".to_string(),
            });
        }
        Ok(Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        })
    }

    /// Creates a matrix of ones.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` if either dimension is zero.
    pub fn ones(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::InvalidSize {
                message: "Number of rows and columns must be positive integers.".to_string(),
            });
        }
        Ok(Self {
            data: vec![T::one(); rows * cols],
            rows,
            cols,
        })
    }

    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![T::zero(); self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Matrix-matrix multiplication.
    ///
    /// # Errors
    ///
    /// Returns `IncompatibleShape` if the column count of `self` differs
    /// from the row count of `other`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrizError::IncompatibleShape {
                lhs_cols: self.cols,
                rhs_rows: other.rows,
            });
        }

        let mut result = vec![T::zero(); self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = T::zero();
                for k in 0..self.cols {
                    sum = sum + self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                result[i * other.cols + j] = sum;
            }
        }

        Ok(Self {
            data: result,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other, "to be added")?;
        let data: Vec<T> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a + b)
            .collect();

        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if shapes differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other, "to be subtracted")?;
        let data: Vec<T> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a - b)
            .collect();

        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Multiplies another matrix element-wise (Hadamard product).
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if shapes differ.
    pub fn mul_elementwise(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other, "for element-wise multiplication")?;
        let data: Vec<T> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a * b)
            .collect();

        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Multiplies each element by a scalar.
    ///
    /// Scalar multiplication commutes, so this single entry point covers
    /// both the scalar-on-left and scalar-on-right forms.
    #[must_use]
    pub fn mul_scalar(&self, scalar: T) -> Self {
        Self {
            data: self.data.iter().map(|&x| x * scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn check_same_shape(&self, other: &Self, action: &str) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrizError::DimensionMismatch {
                action: action.to_string(),
                lhs: format!("{}x{}", self.rows, self.cols),
                rhs: format!("{}x{}", other.rows, other.cols),
            });
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix([")?;
        for (i, row) in self.data.chunks(self.cols).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{value}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "])")
    }
}

/// Row access: `m[i]` is the row slice, so `m[i][j]` reads an element.
///
/// # Panics
///
/// Panics if the row index is out of bounds; use [`Matrix::row`] for the
/// error-reporting path.
impl<T> Index<usize> for Matrix<T> {
    type Output = [T];

    fn index(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }
}

/// Mutable row access: `m[i][j] = v` writes an element in place.
///
/// # Panics
///
/// Panics if the row index is out of bounds; use [`Matrix::row_mut`] for
/// the error-reporting path.
impl<T> IndexMut<usize> for Matrix<T> {
    fn index_mut(&mut self, row: usize) -> &mut [T] {
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
