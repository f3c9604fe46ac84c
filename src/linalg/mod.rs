//! Linear algebra built on Gaussian elimination.
//!
//! The single algorithmic core is [`Matrix::rref`], forward elimination
//! with column-wise pivoting that clears each pivot column above and
//! below as the pivot is created, so no back-substitution pass is
//! needed. [`Matrix::inverse`] reuses it on an `[A | I]` augmented
//! matrix.
//!
//! Both always produce `f64` matrices regardless of the input element
//! type, because row reduction needs exact division.

mod inverse;
mod rref;

use crate::error::Result;
use crate::matrix::Matrix;
use crate::scalar::Scalar;

/// Reduce a matrix to reduced row-echelon form.
///
/// ```
/// # use echelon::{linalg, Matrix};
/// let m = Matrix::from_rows(vec![vec![2, 4], vec![1, 3]]).unwrap();
/// let r = linalg::rref(&m);
/// assert_eq!(r, Matrix::<f64>::identity(2));
/// ```
pub fn rref<T: Scalar>(m: &Matrix<T>) -> Matrix<f64> {
    m.rref()
}

/// Compute the inverse of a square matrix.
///
/// Returns [`MatrixError::Singular`](crate::MatrixError::Singular) when
/// the matrix has no inverse.
///
/// ```
/// # use echelon::{linalg, Matrix};
/// let m = Matrix::from_rows(vec![vec![2.0, 0.0], vec![0.0, 4.0]]).unwrap();
/// let inv = linalg::inv(&m).unwrap();
/// assert_eq!(inv.as_slice(), &[0.5, 0.0, 0.0, 0.25]);
/// ```
pub fn inv<T: Scalar>(m: &Matrix<T>) -> Result<Matrix<f64>> {
    m.inverse()
}
