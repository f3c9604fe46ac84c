//! Dense 2-D matrix type with row-major contiguous storage.
//!
//! The [`Matrix`] type is the sole data structure in `echelon`. It owns
//! its buffer exclusively: cloning performs a deep copy, handing the
//! buffer off ([`Matrix::into_vec`]) consumes the matrix, and dropping
//! it frees the buffer. Element access is bounds-checked and returns
//! [`Result`]; there are no raw row pointers.

mod create;
mod display;
mod ops;
mod reshape;

use crate::error::{MatrixError, Result};
use crate::scalar::Scalar;

/// A dense `rows x cols` matrix stored contiguously in row-major order.
///
/// `rows == 0` or `cols == 0` denotes an empty matrix with no
/// addressable elements.
///
/// # Type Parameters
///
/// - `T`: The element type, which must implement [`Scalar`].
#[derive(Debug, Clone)]
pub struct Matrix<T: Scalar> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Scalar> Matrix<T> {
    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.cols
    }

    /// The shape as a `(rows, columns)` pair.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The total number of elements.
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Whether the matrix has zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// A flat slice of all elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// A mutable flat slice of all elements in row-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the matrix and hand its buffer off to the caller.
    ///
    /// This is the ownership-release operation: the matrix no longer
    /// exists afterwards, so no path can observe a released buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    /// Compute the flat index for a `(row, column)` pair.
    fn flat_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                index: (row, col),
                shape: (self.rows, self.cols),
            });
        }
        Ok(row * self.cols + col)
    }

    /// Get a reference to the element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        let flat = self.flat_index(row, col)?;
        Ok(&self.data[flat])
    }

    /// Get a mutable reference to the element at `(row, col)`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let flat = self.flat_index(row, col)?;
        Ok(&mut self.data[flat])
    }

    /// Set the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let flat = self.flat_index(row, col)?;
        self.data[flat] = value;
        Ok(())
    }

    /// Row `r` as a shared slice.
    pub fn row(&self, r: usize) -> Result<&[T]> {
        if r >= self.rows {
            return Err(MatrixError::IndexOutOfBounds {
                index: (r, 0),
                shape: (self.rows, self.cols),
            });
        }
        Ok(&self.data[r * self.cols..(r + 1) * self.cols])
    }

    // ------------------------------------------------------------------
    // Iterators
    // ------------------------------------------------------------------

    /// Iterate over all elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate mutably over all elements in row-major order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }

    // ------------------------------------------------------------------
    // Whole-matrix assignment
    // ------------------------------------------------------------------

    /// Copy every element of `other` into `self`.
    ///
    /// Assignment never resizes the target: the shapes must already
    /// match.
    pub fn assign(&mut self, other: &Matrix<T>) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                expected: self.shape(),
                got: other.shape(),
            });
        }
        self.data.copy_from_slice(&other.data);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Map
    // ------------------------------------------------------------------

    /// Apply a function to every element, returning a new matrix.
    ///
    /// The output element type may differ from the input's; the
    /// elimination engine uses this to widen into `f64`.
    pub fn map<U: Scalar, F>(&self, f: F) -> Matrix<U>
    where
        F: Fn(T) -> U,
    {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T: Scalar> PartialEq for Matrix<T> {
    /// Shape mismatch compares unequal; it is not an error.
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.data == other.data
    }
}
