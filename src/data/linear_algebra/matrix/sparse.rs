//! # Sparse matrix
//!
//! Wrapping a `HashMap<usize, _>`, fixed size. The matrix owns its map; windows on it are
//! created through the `Matrix` and `MatrixMut` traits.
use std::collections::HashMap;
use std::fmt;

use log::{debug, warn};
use num_traits::One;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::data::linear_algebra::matrix::{fmt_grid, Matrix, MatrixMut};
use crate::data::linear_algebra::matrix::layout::Layout;
use crate::data::linear_algebra::traits::SparseElement;

/// A sparse matrix using a `HashMap` with (key, value) combinations as back-end. Indices start at
/// `0`.
///
/// Only non-zero values are stored. The key of a value at (`i`, `j`) is `i * nr_columns + j`.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Sparse<F> {
    elements: HashMap<usize, F>,
    layout: Layout,
}

impl<F: SparseElement> Sparse<F> {
    /// Create a matrix using the provided map as its storage.
    ///
    /// # Arguments
    ///
    /// * `elements`: Values by key. The map is used as is, zero values are removed from it.
    /// * `nr_rows`: Number of rows of the matrix.
    /// * `nr_columns`: Number of columns of the matrix, also the length of a row in key space.
    ///
    /// # Return value
    ///
    /// Input data wrapped inside a matrix.
    pub fn new(mut elements: HashMap<usize, F>, nr_rows: usize, nr_columns: usize) -> Self {
        elements.retain(|_, value| value.is_not_zero());

        Self { elements, layout: Layout::full(nr_rows, nr_columns) }
    }

    /// Create a matrix of zeros of dimension `nr_rows` x `nr_columns`.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self { elements: HashMap::new(), layout: Layout::full(nr_rows, nr_columns) }
    }

    /// Create a square identity matrix of size `len`.
    pub fn identity(len: usize) -> Self
    where
        F: One,
    {
        let mut matrix = Self::zeros(len, len);
        for i in 0..len {
            matrix.set(i, i, F::one());
        }

        matrix
    }

    /// Create a matrix from rows of values, including the zeros.
    ///
    /// All rows should have the same length.
    pub fn from_data(data: Vec<Vec<F>>) -> Self {
        let nr_rows = data.len();
        let nr_columns = data.first().map_or(0, Vec::len);
        debug_assert!(data.iter().all(|row| row.len() == nr_columns));

        let mut matrix = Self::zeros(nr_rows, nr_columns);
        for (i, row) in data.into_iter().enumerate() {
            for (j, value) in row.into_iter().enumerate() {
                matrix.set(i, j, value);
            }
        }

        matrix
    }

    /// Create a matrix with standard normal values at `n` random positions.
    ///
    /// Positions are drawn uniformly with replacement: a position drawn twice holds the last value
    /// drawn for it, so the matrix may end up with fewer than `n` non-zero values.
    ///
    /// # Arguments
    ///
    /// * `nr_rows`: Number of rows of the matrix.
    /// * `nr_columns`: Number of columns of the matrix.
    /// * `n`: Number of draws.
    /// * `rng`: Source of both the positions and the values.
    pub fn normals<R: Rng>(nr_rows: usize, nr_columns: usize, n: usize, rng: &mut R) -> Self
    where
        StandardNormal: Distribution<F>,
    {
        let mut matrix = Self::zeros(nr_rows, nr_columns);
        if nr_rows == 0 || nr_columns == 0 {
            if n > 0 {
                warn!("no positions to draw from in a {}x{} matrix, ignoring {} draws", nr_rows, nr_columns, n);
            }
            return matrix;
        }

        for _ in 0..n {
            let i = rng.gen_range(0..nr_rows);
            let j = rng.gen_range(0..nr_columns);
            let value: F = rng.sample(StandardNormal);
            matrix.set(i, j, value);
        }

        debug!("drew {} normals into a {}x{} matrix, {} non-zeros", n, nr_rows, nr_columns, matrix.elements.len());
        matrix
    }

    /// Give up the matrix structure, keeping the values by key.
    pub fn into_elements(self) -> HashMap<usize, F> {
        self.elements
    }
}

impl<F: SparseElement> Matrix<F> for Sparse<F> {
    fn elements(&self) -> &HashMap<usize, F> {
        &self.elements
    }

    fn layout(&self) -> Layout {
        self.layout
    }

    /// A copy with the same key-value pairs, including those outside of the dimensions.
    fn copy(&self) -> Sparse<F> {
        self.clone()
    }
}

impl<F: SparseElement> MatrixMut<F> for Sparse<F> {
    fn elements_mut(&mut self) -> &mut HashMap<usize, F> {
        &mut self.elements
    }
}

impl<F: SparseElement> fmt::Display for Sparse<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_grid(f, (self.nr_rows(), self.nr_columns()), |i, j| self.get(i, j))
    }
}
