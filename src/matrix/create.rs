//! Matrix constructors: zero/constant fills, literals, and the identity.

use crate::error::{MatrixError, Result};
use crate::scalar::Scalar;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Create a `rows x cols` matrix filled with zeros.
    ///
    /// ```
    /// # use echelon::Matrix;
    /// let m = Matrix::<f64>::zeros(2, 3);
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(m.iter().all(|&x| x == 0.0));
    /// ```
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }

    /// Create a `rows x cols` matrix filled with a constant value.
    pub fn full(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    /// Create a matrix from a flat row-major buffer and a shape.
    ///
    /// Returns an error if `data.len()` does not equal `rows * cols`.
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatrixError::InvalidShape {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Create a matrix from a nested row literal.
    ///
    /// The column count is taken from the first row; every other row
    /// must have the same length.
    ///
    /// ```
    /// # use echelon::Matrix;
    /// let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// assert_eq!(m.shape(), (2, 2));
    /// assert_eq!(*m.get(1, 0).unwrap(), 3);
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);

        let mut data = Vec::with_capacity(row_count * col_count);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != col_count {
                return Err(MatrixError::RaggedRow {
                    row: r,
                    expected: col_count,
                    got: row.len(),
                });
            }
            data.extend(row);
        }

        Ok(Self {
            data,
            rows: row_count,
            cols: col_count,
        })
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// # use echelon::Matrix;
    /// let eye = Matrix::<f64>::identity(3);
    /// assert_eq!(*eye.get(0, 0).unwrap(), 1.0);
    /// assert_eq!(*eye.get(0, 1).unwrap(), 0.0);
    /// ```
    pub fn identity(n: usize) -> Self {
        let mut data = vec![T::zero(); n * n];
        for i in 0..n {
            data[i * n + i] = T::one();
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }
}
