//! Matrix inversion via augmented-identity elimination.

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use crate::scalar::Scalar;

impl<T: Scalar> Matrix<T> {
    /// Compute the inverse as a fresh `f64` matrix.
    ///
    /// Reduces `[self | I]` to reduced row-echelon form and returns the
    /// right-hand block. Fails with
    /// [`DimensionMismatch`](MatrixError::DimensionMismatch) for
    /// non-square input and [`Singular`](MatrixError::Singular) when
    /// the reduced form of `self` is not the identity. `self` is never
    /// mutated.
    pub fn inverse(&self) -> Result<Matrix<f64>> {
        let n = self.rows();
        if self.columns() != n {
            return Err(MatrixError::DimensionMismatch {
                expected: (n, n),
                got: self.shape(),
            });
        }

        if self.rref() != Matrix::<f64>::identity(n) {
            return Err(MatrixError::Singular);
        }

        let mut augmented: Matrix<f64> = self.map(Scalar::to_f64);
        augmented.augment(&Matrix::<f64>::identity(n))?;
        augmented.rref().sub_matrix(0, n, n, 2 * n)
    }
}
