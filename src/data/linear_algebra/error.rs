//! # Error reporting for matrix operations
//!
//! Most operations on matrices are total: reading outside of the declared dimensions resolves to
//! zero. Only the structural operations, that combine two matrices into a larger one, can fail.
use thiserror::Error;

/// Dimensions of a matrix as (number of rows, number of columns).
pub type Shape = (usize, usize);

/// The category of a `LinearAlgebraError`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// Two operands have dimensions that can't be combined.
    DimensionMismatch,
}

/// Created when an operation on matrices can't be completed.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum LinearAlgebraError {
    /// The dimensions of the operands of a structural operation don't agree.
    ///
    /// `augment` requires an equal number of rows, `stack` an equal number of columns.
    #[error("dimension mismatch in {operation}: left operand has shape {left:?}, right operand has shape {right:?}")]
    DimensionMismatch {
        /// Name of the operation that failed.
        operation: &'static str,
        /// Shape of the matrix the operation was called on.
        left: Shape,
        /// Shape of the argument matrix.
        right: Shape,
    },
}

impl LinearAlgebraError {
    /// Create a new error of the given kind.
    ///
    /// # Arguments
    ///
    /// * `kind`: What went wrong.
    /// * `operation`: Name of the operation that failed, used in the message for the end user.
    /// * `left`: Shape of the matrix that the operation was called on.
    /// * `right`: Shape of the other operand.
    pub fn new(kind: ErrorKind, operation: &'static str, left: Shape, right: Shape) -> Self {
        match kind {
            ErrorKind::DimensionMismatch => Self::DimensionMismatch { operation, left, right },
        }
    }

    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
        }
    }
}
