//! # Key layout
//!
//! A sparse matrix stores its values in a map with a single integer key per position. The
//! `Layout` describes how coordinates are flattened into those keys:
//!
//! `key(i, j) = i * step + j + offset`
//!
//! A full matrix has `offset = 0` and `step = nr_columns`. A window on a larger matrix keeps the
//! step of the matrix it was taken from, and shifts its origin using the offset.

/// Geometry of a matrix within the key space of its storage.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Layout {
    nr_rows: usize,
    nr_columns: usize,
    /// Key of the top-left position of the matrix.
    offset: usize,
    /// Distance in key space between two consecutive rows.
    step: usize,
}

impl Layout {
    /// Layout of a matrix that occupies its own storage.
    pub fn full(nr_rows: usize, nr_columns: usize) -> Self {
        Self { nr_rows, nr_columns, offset: 0, step: nr_columns }
    }

    /// Layout of a `nr_rows` x `nr_columns` window with its top-left corner at (`i`, `j`) of this
    /// layout.
    ///
    /// The window lives in the same key space: it keeps the step, and its offset is the key of
    /// its origin. For `step > 0` this equals
    /// `(i + offset / step) * step + (j + offset % step)`.
    pub fn window(&self, i: usize, j: usize, nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            nr_rows,
            nr_columns,
            offset: self.key(i, j),
            step: self.step,
        }
    }

    /// The key of coordinate (`i`, `j`).
    ///
    /// No bounds checking is done: coordinates outside of the declared dimensions still map to a
    /// key. Keys wrap around at `usize::MAX`.
    pub fn key(&self, i: usize, j: usize) -> usize {
        i.wrapping_mul(self.step)
            .wrapping_add(j)
            .wrapping_add(self.offset)
    }

    /// Turn a key into a row and column number, relative to the origin of this layout.
    ///
    /// # Return value
    ///
    /// `None` if the key lies before the origin, or if the step is zero such that no key can be
    /// decoded.
    pub fn decode(&self, key: usize) -> Option<(usize, usize)> {
        let relative = key.checked_sub(self.offset)?;
        let row = relative.checked_div(self.step)?;
        let column = relative % self.step;

        Some((row, column))
    }

    /// Turn a key into a row and column number, if that position is inside of the declared
    /// dimensions.
    pub fn coordinates(&self, key: usize) -> Option<(usize, usize)> {
        self.decode(key)
            .filter(|&(i, j)| i < self.nr_rows && j < self.nr_columns)
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of columns.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Key of the origin.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Distance between two rows in key space.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Whether the origin is at key `0` and rows follow each other without gaps in key space.
    ///
    /// This is a property of the geometry only: a window on the top rows of a matrix is also
    /// normalized.
    pub fn is_normalized(&self) -> bool {
        self.offset == 0 && self.step == self.nr_columns
    }
}
