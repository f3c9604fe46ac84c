//! Arithmetic for [`Matrix`].
//!
//! Implements `Add`, `Sub` (elementwise) and `Mul` (matrix product) for
//! values and references, panicking on shape mismatch, plus checked
//! `Result`-returning forms for non-panicking callers. Compound
//! assignment (`+=`, `-=`, `*=`) is defined as `self = self op other`.

use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use crate::error::{MatrixError, Result};
use crate::scalar::Scalar;

use super::Matrix;

// ======================================================================
// Checked (Result-returning) arithmetic
// ======================================================================

impl<T: Scalar> Matrix<T> {
    /// Elementwise addition into a freshly allocated matrix.
    pub fn add_checked(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_map(other, |a, b| a + b)
    }

    /// Elementwise subtraction into a freshly allocated matrix.
    pub fn sub_checked(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_map(other, |a, b| a - b)
    }

    /// Apply a function elementwise to two matrices of the same shape.
    fn zip_map<F>(&self, other: &Matrix<T>, f: F) -> Result<Matrix<T>>
    where
        F: Fn(T, T) -> T,
    {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                expected: self.shape(),
                got: other.shape(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Matrix product `self * other`.
    ///
    /// Requires `self.columns() == other.rows()`. The accumulation loop
    /// runs output-column outer, row middle, inner sum over `self`'s
    /// columns; the summation order is part of the contract because it
    /// fixes floating-point rounding.
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.cols, other.cols),
                got: other.shape(),
            });
        }

        let mut out = Matrix::zeros(self.rows, other.cols);
        for i in 0..other.cols {
            for r in 0..self.rows {
                for c in 0..self.cols {
                    out.data[r * other.cols + i] +=
                        self.data[r * self.cols + c] * other.data[c * other.cols + i];
                }
            }
        }
        Ok(out)
    }
}

// ======================================================================
// Operator sugar (panics on shape mismatch)
// ======================================================================

macro_rules! impl_matrix_binop {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl<T: Scalar> $trait for Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: Matrix<T>) -> Matrix<T> {
                (&self).$method(&rhs)
            }
        }

        impl<T: Scalar> $trait for &Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: &Matrix<T>) -> Matrix<T> {
                match self.$checked(rhs) {
                    Ok(out) => out,
                    Err(e) => panic!(
                        "shape mismatch in {}: {e}",
                        stringify!($method)
                    ),
                }
            }
        }
    };
}

impl_matrix_binop!(Add, add, add_checked);
impl_matrix_binop!(Sub, sub, sub_checked);
impl_matrix_binop!(Mul, mul, matmul);

// ======================================================================
// Compound assignment: self = self op other
// ======================================================================

impl<T: Scalar> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        *self = &*self + rhs;
    }
}

impl<T: Scalar> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        *self = &*self - rhs;
    }
}

impl<T: Scalar> MulAssign<&Matrix<T>> for Matrix<T> {
    fn mul_assign(&mut self, rhs: &Matrix<T>) {
        *self = &*self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        let a = Matrix::from_vec(vec![1, 2, 3, 4], 2, 2).unwrap();
        let b = Matrix::from_vec(vec![10, 20, 30, 40], 2, 2).unwrap();
        let c = &a + &b;
        assert_eq!(c.as_slice(), &[11, 22, 33, 44]);
    }

    #[test]
    fn test_sub() {
        let a = Matrix::from_vec(vec![10, 20, 30, 40], 2, 2).unwrap();
        let b = Matrix::from_vec(vec![1, 2, 3, 4], 2, 2).unwrap();
        let c = a - b;
        assert_eq!(c.as_slice(), &[9, 18, 27, 36]);
    }

    #[test]
    fn test_add_then_sub_restores() {
        let a = Matrix::from_vec(vec![1, -2, 3, -4, 5, -6], 2, 3).unwrap();
        let b = Matrix::from_vec(vec![7, 8, 9, 10, 11, 12], 2, 3).unwrap();
        assert_eq!(&(&a + &b) - &b, a);
    }

    #[test]
    fn test_checked_add_mismatch() {
        let a = Matrix::<i32>::zeros(2, 2);
        let b = Matrix::<i32>::zeros(2, 3);
        assert_eq!(
            a.add_checked(&b),
            Err(MatrixError::DimensionMismatch {
                expected: (2, 2),
                got: (2, 3),
            })
        );
    }

    #[test]
    #[should_panic(expected = "shape mismatch")]
    fn test_add_panics_on_mismatch() {
        let a = Matrix::<i32>::zeros(2, 2);
        let b = Matrix::<i32>::zeros(3, 2);
        let _ = a + b;
    }

    #[test]
    fn test_matmul_2x3_3x2() {
        // [[1, 2, 3],      [[7,  8],
        //  [4, 5, 6]]   x   [9, 10],
        //                   [11, 12]]
        let a = Matrix::from_vec(vec![1, 2, 3, 4, 5, 6], 2, 3).unwrap();
        let b = Matrix::from_vec(vec![7, 8, 9, 10, 11, 12], 3, 2).unwrap();
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c.as_slice(), &[58, 64, 139, 154]);
    }

    #[test]
    fn test_matmul_inner_dim_mismatch() {
        let a = Matrix::<i32>::zeros(2, 3);
        let b = Matrix::<i32>::zeros(2, 3);
        assert!(a.matmul(&b).is_err());
    }

    #[test]
    fn test_identity_product() {
        let a = Matrix::from_vec(vec![1, 2, 3, 4], 2, 2).unwrap();
        let eye = Matrix::<i32>::identity(2);
        assert_eq!(eye.matmul(&a).unwrap(), a);
        assert_eq!(a.matmul(&eye).unwrap(), a);
    }

    #[test]
    fn test_compound_assign() {
        let mut a = Matrix::from_vec(vec![1, 2, 3, 4], 2, 2).unwrap();
        let b = Matrix::from_vec(vec![10, 20, 30, 40], 2, 2).unwrap();
        a += &b;
        assert_eq!(a.as_slice(), &[11, 22, 33, 44]);
        a -= &b;
        assert_eq!(a.as_slice(), &[1, 2, 3, 4]);

        let eye = Matrix::<i32>::identity(2);
        a *= &eye;
        assert_eq!(a.as_slice(), &[1, 2, 3, 4]);
    }
}
