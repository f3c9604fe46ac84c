use core::fmt;

/// All errors returned by `echelon`.
///
/// Every failure is synchronous and indicates a caller error rather than
/// a transient condition; operations check their preconditions before
/// mutating anything, so operands are unchanged whenever an error is
/// returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Operand shapes are incompatible for the requested operation.
    DimensionMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// A row literal has a different length from the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// A flat buffer's length does not match the requested shape.
    InvalidShape {
        rows: usize,
        cols: usize,
        len: usize,
    },

    /// Sub-matrix bounds are inverted or lie outside the matrix.
    InvalidRange {
        row_bounds: (usize, usize),
        col_bounds: (usize, usize),
        shape: (usize, usize),
    },

    /// A `(row, column)` index is out of bounds.
    IndexOutOfBounds {
        index: (usize, usize),
        shape: (usize, usize),
    },

    /// Matrix is singular and cannot be inverted.
    Singular,
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, got } => {
                write!(f, "dimension mismatch: expected {expected:?}, got {got:?}")
            }
            Self::RaggedRow { row, expected, got } => {
                write!(
                    f,
                    "ragged row literal: row {row} has {got} elements, expected {expected}"
                )
            }
            Self::InvalidShape { rows, cols, len } => {
                write!(
                    f,
                    "invalid shape: {rows}x{cols} needs {} elements, buffer has {len}",
                    rows * cols
                )
            }
            Self::InvalidRange {
                row_bounds,
                col_bounds,
                shape,
            } => {
                write!(
                    f,
                    "invalid sub-matrix range: rows {row_bounds:?}, columns {col_bounds:?} for shape {shape:?}"
                )
            }
            Self::IndexOutOfBounds { index, shape } => {
                write!(f, "index {index:?} out of bounds for shape {shape:?}")
            }
            Self::Singular => write!(f, "singular matrix"),
        }
    }
}

impl std::error::Error for MatrixError {}

/// Convenience alias used throughout `echelon`.
pub type Result<T> = std::result::Result<T, MatrixError>;
