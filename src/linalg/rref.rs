//! Gaussian elimination to reduced row-echelon form.

use crate::matrix::Matrix;
use crate::scalar::Scalar;

impl<T: Scalar> Matrix<T> {
    /// Reduce to reduced row-echelon form, returning a fresh `f64`
    /// matrix. `self` is not mutated.
    ///
    /// Forward elimination with column-wise pivoting; each pivot column
    /// is cleared above and below as the pivot is created, so the
    /// result needs no back-substitution pass. When the pivot cell is
    /// zero, the *last* later row with a nonzero entry in the pivot
    /// column is swapped in; when no such row exists the column is
    /// exhausted and only the column cursor advances.
    ///
    /// Zero and unit pivots are detected by exact comparison, matching
    /// the reference behavior; use [`rref_with_tolerance`] for inputs
    /// where rounding noise should count as zero.
    ///
    /// [`rref_with_tolerance`]: Matrix::rref_with_tolerance
    pub fn rref(&self) -> Matrix<f64> {
        self.rref_with_tolerance(0.0)
    }

    /// [`rref`](Matrix::rref) with `|x| <= tol` as the zero test and
    /// `|pivot - 1| <= tol` as the unit-pivot test.
    pub fn rref_with_tolerance(&self, tol: f64) -> Matrix<f64> {
        let mut out: Matrix<f64> = self.map(Scalar::to_f64);
        let (rows, cols) = out.shape();
        let m = out.as_mut_slice();

        let mut pr = 0; // pivot row
        let mut pc = 0; // pivot column
        while pr < rows && pc < cols {
            if m[pr * cols + pc].abs() <= tol {
                // Scan the remaining rows for the last one with a
                // nonzero entry in the pivot column.
                let mut swap = None;
                for r in pr..rows {
                    if m[r * cols + pc].abs() > tol {
                        swap = Some(r);
                    }
                }
                match swap {
                    Some(r) => {
                        for c in 0..cols {
                            m.swap(pr * cols + c, r * cols + c);
                        }
                    }
                    // Column exhausted: the pivot row stays put.
                    None => pc += 1,
                }
            } else {
                let pivot = m[pr * cols + pc];

                // Rr = Rr - ratio * Rpr for every other row, across the
                // full row (including columns left of the pivot).
                for r in 0..rows {
                    if r == pr {
                        continue;
                    }
                    let ratio = m[r * cols + pc] / pivot;
                    for c in 0..cols {
                        let pivot_cell = m[pr * cols + c];
                        m[r * cols + c] -= pivot_cell * ratio;
                    }
                }

                // Normalize the pivot row, from the pivot column onward.
                if (pivot - 1.0).abs() > tol {
                    for c in pc..cols {
                        m[pr * cols + c] /= pivot;
                    }
                }

                pr += 1;
                pc += 1;
            }
        }

        out
    }
}
