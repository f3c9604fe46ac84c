//! Structural operations: transpose, resize, augmentation, and
//! sub-block extraction.

use crate::error::{MatrixError, Result};
use crate::scalar::Scalar;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Return the transpose as a new `cols x rows` matrix.
    ///
    /// Pure: `self` is not mutated.
    pub fn transpose(&self) -> Matrix<T> {
        let mut data = vec![T::zero(); self.numel()];
        for r in 0..self.rows {
            for c in 0..self.cols {
                data[c * self.rows + r] = self.data[r * self.cols + c];
            }
        }
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Resize in place to `new_rows x new_cols`.
    ///
    /// The overlapping rectangle
    /// `[0, min(rows, new_rows)) x [0, min(cols, new_cols))` is copied
    /// from the old buffer; every other cell of the new buffer is zero.
    /// The new buffer is built fully before being swapped in.
    pub fn resize(&mut self, new_rows: usize, new_cols: usize) {
        let mut data = vec![T::zero(); new_rows * new_cols];

        let copy_rows = self.rows.min(new_rows);
        let copy_cols = self.cols.min(new_cols);
        for r in 0..copy_rows {
            for c in 0..copy_cols {
                data[r * new_cols + c] = self.data[r * self.cols + c];
            }
        }

        self.data = data;
        self.rows = new_rows;
        self.cols = new_cols;
    }

    /// Horizontally concatenate `other` onto the right of `self`.
    ///
    /// Requires equal row counts; the check happens before any
    /// mutation, so `self` is unchanged on error.
    pub fn augment(&mut self, other: &Matrix<T>) -> Result<()> {
        if self.rows != other.rows {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.rows, other.cols),
                got: other.shape(),
            });
        }

        let old_cols = self.cols;
        self.resize(self.rows, old_cols + other.cols);
        for r in 0..other.rows {
            for c in 0..other.cols {
                self.data[r * self.cols + old_cols + c] = other.data[r * other.cols + c];
            }
        }
        Ok(())
    }

    /// Extract the half-open rectangle
    /// `[row_start, row_end) x [col_start, col_end)` as a new matrix.
    ///
    /// Bounds are invalid when a range is inverted, when both bounds of
    /// a dimension lie at or after that dimension's size, or when an
    /// end bound exceeds the dimension size.
    pub fn sub_matrix(
        &self,
        row_start: usize,
        row_end: usize,
        col_start: usize,
        col_end: usize,
    ) -> Result<Matrix<T>> {
        let invalid = row_start > row_end
            || col_start > col_end
            || (row_start >= self.rows && row_end >= self.rows)
            || (col_start >= self.cols && col_end >= self.cols)
            || row_end > self.rows
            || col_end > self.cols;
        if invalid {
            return Err(MatrixError::InvalidRange {
                row_bounds: (row_start, row_end),
                col_bounds: (col_start, col_end),
                shape: (self.rows, self.cols),
            });
        }

        let mut out = Matrix::zeros(row_end - row_start, col_end - col_start);
        for r in row_start..row_end {
            for c in col_start..col_end {
                out.data[(r - row_start) * out.cols + (c - col_start)] =
                    self.data[r * self.cols + c];
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose() {
        // [[1, 2, 3],
        //  [4, 5, 6]]
        let m = Matrix::from_vec(vec![1, 2, 3, 4, 5, 6], 2, 3).unwrap();
        let t = m.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.as_slice(), &[1, 4, 2, 5, 3, 6]);
    }

    #[test]
    fn test_double_transpose_is_identity() {
        let m = Matrix::from_vec(vec![1, 2, 3, 4, 5, 6], 2, 3).unwrap();
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn test_transpose_empty() {
        let m = Matrix::<f64>::zeros(0, 3);
        assert_eq!(m.transpose().shape(), (3, 0));
    }

    #[test]
    fn test_resize_grow_then_shrink() {
        let mut m = Matrix::from_vec(vec![1, 2, 3, 4], 2, 2).unwrap();

        m.resize(3, 3);
        assert_eq!(m.as_slice(), &[1, 2, 0, 3, 4, 0, 0, 0, 0]);

        m.resize(1, 1);
        assert_eq!(m.as_slice(), &[1]);
    }

    #[test]
    fn test_resize_mixed() {
        // Grow rows while shrinking columns.
        let mut m = Matrix::from_vec(vec![1, 2, 3, 4, 5, 6], 2, 3).unwrap();
        m.resize(3, 2);
        assert_eq!(m.as_slice(), &[1, 2, 4, 5, 0, 0]);
    }

    #[test]
    fn test_augment() {
        let mut a = Matrix::from_vec(vec![1, 2, 3, 4], 2, 2).unwrap();
        let b = Matrix::from_vec(vec![5, 6, 7, 8], 2, 2).unwrap();
        a.augment(&b).unwrap();
        assert_eq!(a.shape(), (2, 4));
        assert_eq!(a.as_slice(), &[1, 2, 5, 6, 3, 4, 7, 8]);
    }

    #[test]
    fn test_augment_row_mismatch_leaves_self_unchanged() {
        let mut a = Matrix::from_vec(vec![1, 2, 3, 4], 2, 2).unwrap();
        let b = Matrix::<i32>::zeros(3, 1);
        assert!(a.augment(&b).is_err());
        assert_eq!(a.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(a.shape(), (2, 2));
    }

    #[test]
    fn test_sub_matrix() {
        // [[1, 2, 3],
        //  [4, 5, 6],
        //  [7, 8, 9]]
        let m = Matrix::from_vec(vec![1, 2, 3, 4, 5, 6, 7, 8, 9], 3, 3).unwrap();
        let s = m.sub_matrix(1, 3, 0, 2).unwrap();
        assert_eq!(s.shape(), (2, 2));
        assert_eq!(s.as_slice(), &[4, 5, 7, 8]);
    }

    #[test]
    fn test_sub_matrix_full_extent() {
        let m = Matrix::from_vec(vec![1, 2, 3, 4], 2, 2).unwrap();
        assert_eq!(m.sub_matrix(0, 2, 0, 2).unwrap(), m);
    }

    #[test]
    fn test_sub_matrix_inverted_range() {
        let m = Matrix::<i32>::zeros(3, 3);
        assert!(m.sub_matrix(2, 1, 0, 3).is_err());
        assert!(m.sub_matrix(0, 3, 2, 1).is_err());
    }

    #[test]
    fn test_sub_matrix_both_bounds_past_end() {
        let m = Matrix::<i32>::zeros(3, 3);
        // Both row bounds at/after the row count is rejected, even when
        // the block they denote would be empty.
        assert!(m.sub_matrix(3, 3, 0, 2).is_err());
        assert!(m.sub_matrix(4, 5, 0, 2).is_err());
        // One bound in range, end bound past the size: also rejected.
        assert!(m.sub_matrix(2, 4, 0, 2).is_err());
    }

    #[test]
    fn test_sub_matrix_empty_block_in_range() {
        let m = Matrix::from_vec(vec![1, 2, 3, 4, 5, 6, 7, 8, 9], 3, 3).unwrap();
        let s = m.sub_matrix(1, 1, 0, 3).unwrap();
        assert_eq!(s.shape(), (0, 3));
    }

    #[test]
    fn test_augment_then_sub_matrix_recovers_rhs() {
        let a = Matrix::from_rows(vec![vec![1, 1, 0], vec![1, 1, 0], vec![0, 0, 1]]).unwrap();
        let b = Matrix::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
        let mut ab = a.clone();
        ab.augment(&b).unwrap();
        let got = ab
            .sub_matrix(0, a.rows(), a.columns(), a.columns() + b.columns())
            .unwrap();
        assert_eq!(got, b);
    }
}
