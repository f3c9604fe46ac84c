//! `echelon` — dense, generic-element matrices with a row-reduction core.
//!
//! The crate provides a single data structure, [`Matrix`], stored in
//! row-major order and generic over any numeric element implementing
//! [`Scalar`]. On top of it sit:
//!
//! - structural operations: transpose, resize, horizontal augmentation,
//!   rectangular sub-block extraction;
//! - a Gaussian elimination engine producing reduced row-echelon form;
//! - matrix inversion via `[A | I]` augmented-identity elimination;
//! - elementwise and matrix-product arithmetic.
//!
//! # Design
//!
//! - **Zero runtime dependencies** — everything is from scratch.
//! - Generic over element types via the [`Scalar`] trait; row reduction
//!   and inversion always produce `f64` matrices so that division is
//!   available regardless of the input element type.
//! - Buffers have exactly one owner. Handing a buffer off is a move
//!   ([`Matrix::into_vec`]); early destruction is `drop`. There is no
//!   way to reach a freed buffer.
//! - Fallible operations return [`MatrixError`] and never mutate their
//!   inputs on failure.

pub mod error;
pub mod linalg;
pub mod matrix;
pub mod scalar;

// Re-export key types at crate root for convenience.
pub use error::{MatrixError, Result};
pub use matrix::Matrix;
pub use scalar::Scalar;

/// Items intended for glob-import: `use echelon::prelude::*;`
pub mod prelude {
    pub use crate::error::{MatrixError, Result};
    pub use crate::matrix::Matrix;
    pub use crate::scalar::Scalar;
}
