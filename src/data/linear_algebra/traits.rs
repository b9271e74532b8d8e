//! # Traits for elements in sparse datastructures
//!
//! A sparse data structure only stores values that are not zero. It needs to be able to recognize
//! a zero value, so it can refuse to store it, and to produce one, so it can answer for the
//! positions that it doesn't store.
use std::fmt::{Debug, Display};

use num_traits::Zero;

/// Element of a `SparseMatrix` or `DenseMatrix`.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait SparseElement: Zero + Clone + PartialEq + Display + Debug {
    /// Whether this value should be stored in a sparse data structure.
    fn is_not_zero(&self) -> bool {
        !self.is_zero()
    }
}
impl<T: Zero + Clone + PartialEq + Display + Debug> SparseElement for T {
}
