//! `Display` formatting for [`Matrix`].

use core::fmt;

use crate::scalar::Scalar;

use super::Matrix;

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "matrix([], shape=({}, {}))", self.rows, self.cols);
        }

        writeln!(f, "matrix([")?;
        for r in 0..self.rows {
            write!(f, "  [")?;
            for c in 0..self.cols {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.data[r * self.cols + c])?;
            }
            if r < self.rows - 1 {
                writeln!(f, "],")?;
            } else {
                writeln!(f, "]")?;
            }
        }
        write!(f, "])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_2x2() {
        let m = Matrix::from_vec(vec![1, 2, 3, 4], 2, 2).unwrap();
        let s = format!("{m}");
        assert!(s.contains("[1, 2],"));
        assert!(s.contains("[3, 4]"));
    }

    #[test]
    fn test_display_empty() {
        let m = Matrix::<f64>::zeros(0, 3);
        assert_eq!(format!("{m}"), "matrix([], shape=(0, 3))");
    }
}
