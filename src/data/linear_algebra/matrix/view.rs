//! # Windows on sparse matrices
//!
//! A view doesn't hold values of its own. It borrows the map of the matrix it was taken from and
//! translates its own coordinates into keys of that map using a shifted `Layout`. Views on views
//! borrow the same map again, so every window always addresses the storage of the matrix that
//! owns it.
use std::collections::HashMap;
use std::fmt;

use log::trace;

use crate::data::linear_algebra::matrix::{fmt_grid, Matrix, MatrixMut};
use crate::data::linear_algebra::matrix::layout::Layout;
use crate::data::linear_algebra::traits::SparseElement;

/// Read-only window on the storage of another matrix.
#[derive(Debug)]
pub struct View<'a, F> {
    elements: &'a HashMap<usize, F>,
    layout: Layout,
}

impl<'a, F> View<'a, F> {
    pub(super) fn new(elements: &'a HashMap<usize, F>, layout: Layout) -> Self {
        trace!("read-only view {:?}", layout);

        Self { elements, layout }
    }
}

impl<F> Clone for View<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for View<'_, F> {}

impl<F: SparseElement> Matrix<F> for View<'_, F> {
    fn elements(&self) -> &HashMap<usize, F> {
        self.elements
    }

    fn layout(&self) -> Layout {
        self.layout
    }
}

impl<F: SparseElement> fmt::Display for View<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_grid(f, (self.nr_rows(), self.nr_columns()), |i, j| self.get(i, j))
    }
}

/// Writable window on the storage of another matrix.
///
/// Values set through this window are set in the matrix it was taken from.
#[derive(Debug)]
pub struct ViewMut<'a, F> {
    elements: &'a mut HashMap<usize, F>,
    layout: Layout,
}

impl<'a, F> ViewMut<'a, F> {
    pub(super) fn new(elements: &'a mut HashMap<usize, F>, layout: Layout) -> Self {
        trace!("writable view {:?}", layout);

        Self { elements, layout }
    }
}

impl<F: SparseElement> Matrix<F> for ViewMut<'_, F> {
    fn elements(&self) -> &HashMap<usize, F> {
        &*self.elements
    }

    fn layout(&self) -> Layout {
        self.layout
    }
}

impl<F: SparseElement> MatrixMut<F> for ViewMut<'_, F> {
    fn elements_mut(&mut self) -> &mut HashMap<usize, F> {
        &mut *self.elements
    }
}

impl<F: SparseElement> fmt::Display for ViewMut<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_grid(f, (self.nr_rows(), self.nr_columns()), |i, j| self.get(i, j))
    }
}
