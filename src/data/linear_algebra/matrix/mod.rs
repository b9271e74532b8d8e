//! # Matrix types
//!
//! Sparse matrices store their non-zero values in a `HashMap`, keyed by a single integer that is
//! computed from the row and column of a value (see `Layout`). There are three sparse types:
//!
//! * `SparseMatrix` owns its map.
//! * `SparseView` is a read-only window on the map of another matrix.
//! * `SparseViewMut` is a writable window on the map of another matrix. Changes made through it
//! are visible in the matrix it was taken from.
//!
//! The `Matrix` trait defines the operations available for all three, `MatrixMut` those that
//! modify values.
use std::collections::HashMap;
use std::fmt;

use itertools::Itertools;
use log::debug;

pub use dense::Dense as DenseMatrix;
pub use sparse::Sparse as SparseMatrix;
pub use view::{View as SparseView, ViewMut as SparseViewMut};

use crate::data::linear_algebra::error::{ErrorKind, LinearAlgebraError};
use crate::data::linear_algebra::matrix::layout::Layout;
use crate::data::linear_algebra::traits::SparseElement;

pub mod dense;
pub mod layout;
pub mod sparse;
pub mod view;

/// Number of decimals used when a matrix is displayed without an explicit precision.
const DEFAULT_PRECISION: usize = 6;

/// Read access to a sparse matrix, regardless of whether it owns its storage.
pub trait Matrix<F: SparseElement> {
    /// The map holding the values, possibly shared with other matrices.
    fn elements(&self) -> &HashMap<usize, F>;
    /// How coordinates of this matrix translate into keys of the map.
    fn layout(&self) -> Layout;

    /// Get the number of rows in this matrix.
    fn nr_rows(&self) -> usize {
        self.layout().nr_rows()
    }
    /// Get the number of columns in this matrix.
    fn nr_columns(&self) -> usize {
        self.layout().nr_columns()
    }

    /// Get the value at coordinate (`i`, `j`).
    ///
    /// Coordinates are not checked against the dimensions of the matrix.
    fn get(&self, i: usize, j: usize) -> F {
        self.get_index(self.layout().key(i, j))
    }
    /// Get the value stored under a key, bypassing the coordinate translation.
    fn get_index(&self, index: usize) -> F {
        self.elements().get(&index).cloned().unwrap_or_else(F::zero)
    }

    /// Turn a key into a row number, using the number of columns as the row length.
    ///
    /// Only meaningful for a matrix that has its storage to itself. Use `row_column_index` for
    /// windows.
    fn row_index(&self, index: usize) -> Option<usize> {
        let layout = self.layout();
        index.checked_sub(layout.offset())?.checked_div(layout.nr_columns())
    }
    /// Turn a key into a column number, using the number of columns as the row length.
    ///
    /// Only meaningful for a matrix that has its storage to itself. Use `row_column_index` for
    /// windows.
    fn column_index(&self, index: usize) -> Option<usize> {
        let layout = self.layout();
        index.checked_sub(layout.offset())?.checked_rem(layout.nr_columns())
    }
    /// Turn a key into a row and column number.
    ///
    /// # Return value
    ///
    /// `None` if the key lies before the origin of this matrix in the key space.
    fn row_column_index(&self, index: usize) -> Option<(usize, usize)> {
        self.layout().decode(index)
    }

    /// Keys of all non-zero values inside of the dimensions of this matrix.
    ///
    /// The order is unspecified.
    fn indices<'a>(&'a self) -> impl Iterator<Item = usize> + 'a
    where
        F: 'a,
    {
        let layout = self.layout();
        self.elements().keys()
            .copied()
            .filter(move |&key| layout.coordinates(key).is_some())
    }
    /// All non-zero values inside of the dimensions of this matrix, with their coordinates.
    ///
    /// The order is unspecified.
    fn entries<'a>(&'a self) -> impl Iterator<Item = (usize, usize, &'a F)> + 'a
    where
        F: 'a,
    {
        let layout = self.layout();
        self.elements().iter()
            .filter_map(move |(&key, value)| {
                layout.coordinates(key).map(|(i, j)| (i, j, value))
            })
    }
    /// Get the number of non-zero values in this matrix.
    fn size(&self) -> usize {
        self.indices().count()
    }

    /// A read-only window of `nr_rows` x `nr_columns` with its top-left corner at (`i`, `j`).
    ///
    /// The window shares the storage of this matrix.
    fn view(&self, i: usize, j: usize, nr_rows: usize, nr_columns: usize) -> SparseView<'_, F> {
        SparseView::new(self.elements(), self.layout().window(i, j, nr_rows, nr_columns))
    }
    /// A read-only window on column `j`.
    fn column_vector(&self, j: usize) -> SparseView<'_, F> {
        self.view(0, j, self.nr_rows(), 1)
    }
    /// A read-only window on row `i`.
    fn row_vector(&self, i: usize) -> SparseView<'_, F> {
        self.view(i, 0, 1, self.nr_columns())
    }

    /// Concatenate another matrix to the right of this matrix: `[self other]`.
    ///
    /// # Return value
    ///
    /// A new matrix with its own storage, or a `DimensionMismatch` if the number of rows differs.
    fn augment<M: Matrix<F> + ?Sized>(&self, other: &M) -> Result<SparseMatrix<F>, LinearAlgebraError> {
        if self.nr_rows() != other.nr_rows() {
            return Err(LinearAlgebraError::new(
                ErrorKind::DimensionMismatch, "augment", shape(self), shape(other),
            ));
        }

        let nr_columns = self.nr_columns();
        let mut result = SparseMatrix::zeros(self.nr_rows(), nr_columns + other.nr_columns());
        for (i, j, value) in self.entries() {
            result.set(i, j, value.clone());
        }
        for (i, j, value) in other.entries() {
            result.set(i, nr_columns + j, value.clone());
        }

        debug!("augmented {:?} with {:?} into {} non-zeros", shape(self), shape(other), result.size());
        Ok(result)
    }
    /// Place another matrix below this matrix: `[self; other]`.
    ///
    /// # Return value
    ///
    /// A new matrix with its own storage, or a `DimensionMismatch` if the number of columns
    /// differs.
    fn stack<M: Matrix<F> + ?Sized>(&self, other: &M) -> Result<SparseMatrix<F>, LinearAlgebraError> {
        if self.nr_columns() != other.nr_columns() {
            return Err(LinearAlgebraError::new(
                ErrorKind::DimensionMismatch, "stack", shape(self), shape(other),
            ));
        }

        let nr_rows = self.nr_rows();
        let mut result = SparseMatrix::zeros(nr_rows + other.nr_rows(), self.nr_columns());
        for (i, j, value) in self.entries() {
            result.set(i, j, value.clone());
        }
        for (i, j, value) in other.entries() {
            result.set(nr_rows + i, j, value.clone());
        }

        debug!("stacked {:?} on {:?} into {} non-zeros", shape(self), shape(other), result.size());
        Ok(result)
    }

    /// A copy with all values above the diagonal set to zero.
    fn lower_triangle(&self) -> SparseMatrix<F> {
        filtered(self, |i, j| i >= j)
    }
    /// A copy with all values below the diagonal set to zero.
    fn upper_triangle(&self) -> SparseMatrix<F> {
        filtered(self, |i, j| i <= j)
    }
    /// A copy of this matrix with its own storage.
    ///
    /// A window is copied into a matrix of the same dimensions with its origin at key `0`. A
    /// matrix owning its storage is copied key for key.
    fn copy(&self) -> SparseMatrix<F> {
        filtered(self, |_, _| true)
    }

    /// Convert into a dense matrix of the same dimensions.
    fn to_dense(&self) -> DenseMatrix<F> {
        let mut result = DenseMatrix::zeros(self.nr_rows(), self.nr_columns());
        for (i, j, value) in self.entries() {
            result.set_value(i, j, value.clone());
        }

        debug!("converted {:?} sparse matrix with {} non-zeros to dense", shape(self), self.size());
        result
    }
}

/// Write access to a sparse matrix, regardless of whether it owns its storage.
pub trait MatrixMut<F: SparseElement>: Matrix<F> {
    /// The map holding the values, possibly shared with other matrices.
    fn elements_mut(&mut self) -> &mut HashMap<usize, F>;

    /// Set the value at coordinate (`i`, `j`) to `value`.
    ///
    /// Setting a value to zero removes it from the storage.
    fn set(&mut self, i: usize, j: usize, value: F) {
        let key = self.layout().key(i, j);
        self.set_index(key, value);
    }
    /// Set the value stored under a key, bypassing the coordinate translation.
    ///
    /// Setting a value to zero removes it from the storage.
    fn set_index(&mut self, index: usize, value: F) {
        store(self.elements_mut(), index, value);
    }
    /// Set all values inside of the dimensions of this matrix to zero.
    fn clear(&mut self) {
        let layout = self.layout();
        self.elements_mut().retain(|&key, _| layout.coordinates(key).is_none());
    }

    /// A writable window of `nr_rows` x `nr_columns` with its top-left corner at (`i`, `j`).
    ///
    /// The window shares the storage of this matrix: values set through it are visible in this
    /// matrix.
    fn view_mut(&mut self, i: usize, j: usize, nr_rows: usize, nr_columns: usize) -> SparseViewMut<'_, F> {
        let layout = self.layout().window(i, j, nr_rows, nr_columns);
        SparseViewMut::new(self.elements_mut(), layout)
    }
    /// A writable window on column `j`.
    fn column_vector_mut(&mut self, j: usize) -> SparseViewMut<'_, F> {
        let nr_rows = self.nr_rows();
        self.view_mut(0, j, nr_rows, 1)
    }
    /// A writable window on row `i`.
    fn row_vector_mut(&mut self, i: usize) -> SparseViewMut<'_, F> {
        let nr_columns = self.nr_columns();
        self.view_mut(i, 0, 1, nr_columns)
    }
}

/// Write a value into a sparse map, removing the key instead if the value is zero.
///
/// All mutation of sparse storage goes through here, such that no zero value is ever stored.
pub(crate) fn store<F: SparseElement>(elements: &mut HashMap<usize, F>, key: usize, value: F) {
    if value.is_not_zero() {
        elements.insert(key, value);
    } else {
        elements.remove(&key);
    }
}

/// A copy containing only the values for which the predicate on their coordinate holds.
fn filtered<F, M, P>(matrix: &M, predicate: P) -> SparseMatrix<F>
where
    F: SparseElement,
    M: Matrix<F> + ?Sized,
    P: Fn(usize, usize) -> bool,
{
    let mut result = SparseMatrix::zeros(matrix.nr_rows(), matrix.nr_columns());
    for (i, j, value) in matrix.entries() {
        if predicate(i, j) {
            result.set(i, j, value.clone());
        }
    }

    result
}

fn shape<F: SparseElement, M: Matrix<F> + ?Sized>(matrix: &M) -> (usize, usize) {
    (matrix.nr_rows(), matrix.nr_columns())
}

/// Write all values of a matrix, including the zeros, as rows of comma separated values.
///
/// Rows are separated by newlines and the whole is wrapped in braces. Values are written with six
/// decimals, unless the formatter specifies a precision.
pub(crate) fn fmt_grid<F: fmt::Display>(
    f: &mut fmt::Formatter,
    (nr_rows, nr_columns): (usize, usize),
    get: impl Fn(usize, usize) -> F,
) -> fmt::Result {
    let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
    let grid = (0..nr_rows)
        .map(|i| (0..nr_columns)
            .map(|j| format!("{:.*}", precision, get(i, j)))
            .join(", "))
        .join("\n");

    write!(f, "{{{}}}", grid)
}
