//! # Sparse matrices keyed by position
//!
//! A sparse matrix stores its non-zero values in a `HashMap`, under a single integer key computed
//! from the row and column of each value. Windows on a matrix can be taken without copying: they
//! translate their own coordinates into keys of the storage they borrow.
//!
//! ```
//! use keyed_sparse::data::linear_algebra::matrix::{Matrix, MatrixMut, SparseMatrix};
//!
//! let mut matrix = SparseMatrix::zeros(3, 3);
//! matrix.set(1, 1, 5f64);
//!
//! let mut window = matrix.view_mut(1, 1, 2, 2);
//! assert_eq!(window.get(0, 0), 5f64);
//! window.set(1, 1, 2f64);
//!
//! assert_eq!(matrix.get(2, 2), 2f64);
//! assert_eq!(matrix.lower_triangle().size(), 2);
//! ```
#![warn(missing_docs)]

pub mod data;
