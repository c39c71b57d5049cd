//! Ragged grid implementation
//!
//! A [`Grid`] stores an ordered list of rows, each an independently sized
//! [`Cells`] container. Nothing forces the rows to share a length. Columns
//! are never stored: [`Grid::columns`] derives them by reading every row at
//! the same index and substituting absent cells for short rows.

use std::fmt;

use log::trace;

use crate::cells::{Cells, Presence};
use crate::error::{checked_index, Error, Result};
use crate::render;
use crate::table::Table;
use crate::view::{ColumnView, RowView};

/// A two-dimensional, auto-growing grid of optional cells
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    rows: Vec<Cells<T>>,
}

impl<T> Grid<T> {
    /// Create an empty grid
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Create a grid with `rows` rows of `columns` absent cells each
    pub fn with_size(rows: usize, columns: usize) -> Self {
        Self {
            rows: (0..rows)
                .map(|_| Cells::absent(columns, Presence::Strict))
                .collect(),
        }
    }

    /// Create a grid from row data. Rows keep their individual lengths.
    pub fn from_rows<R, I>(rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = Option<T>>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| Cells::from_options(row, Presence::Strict))
                .collect(),
        }
    }

    /// Append a row after the last one. Absent cells are allowed here.
    pub fn push_row<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = Option<T>>,
    {
        self.rows.push(Cells::from_options(cells, Presence::Strict));
    }

    /// Read the cell at `(row, column)`, padding the row on an out-of-range column.
    ///
    /// A missing row is an error. A column past the end of an existing row is
    /// not: the row is grown with absent cells up to and including `column`,
    /// and `None` is returned. Use [`Grid::peek`] for a read without side
    /// effects.
    ///
    /// # Panics
    ///
    /// Panics with "capacity overflow" if `column` is too large to pad the
    /// row up to.
    pub fn get(&mut self, row: isize, column: isize) -> Result<Option<&T>> {
        let rows = self.rows.len();
        let cells = usize::try_from(row)
            .ok()
            .and_then(|index| self.rows.get_mut(index))
            .ok_or(Error::RowNotFound { row, rows })?;

        if let Ok(offset) = usize::try_from(column) {
            if !cells.contains_index(offset) {
                trace!(
                    "padding row {row} from {} to {} cells on read",
                    cells.len(),
                    offset + 1
                );
                cells.pad_to(offset + 1);
            }
        }

        Ok(cells.get(column))
    }

    /// Read the cell at `(row, column)` without modifying the grid.
    ///
    /// Same error policy as [`Grid::get`]: a missing row is
    /// [`Error::RowNotFound`], a missing column is `Ok(None)`.
    pub fn peek(&self, row: isize, column: isize) -> Result<Option<&T>> {
        Ok(self.stored_row(row)?.get(column))
    }

    /// Store `value` at `(row, column)`, creating rows and cells as needed
    ///
    /// # Panics
    ///
    /// Panics with "capacity overflow" if `row` or `column` is too large to
    /// grow storage up to.
    pub fn set(&mut self, row: isize, column: isize, value: T) -> Result<()> {
        self.store(row, column, Some(value))
    }

    fn store(&mut self, row: isize, column: isize, value: Option<T>) -> Result<()> {
        let offset = checked_index(row)?;
        // Validate before creating rows so a failed write leaves the grid untouched
        checked_index(column)?;
        if value.is_none() {
            return Err(Error::NullValue { index: column });
        }

        if offset >= self.rows.len() {
            trace!("growing grid from {} to {} rows", self.rows.len(), offset + 1);
            self.rows.resize_with(offset + 1, Cells::strict);
        }

        self.rows[offset].set(column, value)
    }

    fn stored_row(&self, row: isize) -> Result<&Cells<T>> {
        usize::try_from(row)
            .ok()
            .and_then(|index| self.rows.get(index))
            .ok_or(Error::RowNotFound {
                row,
                rows: self.rows.len(),
            })
    }

    /// Number of stored rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Stored length of row `row`, if it exists
    pub fn row_len(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(Cells::len)
    }

    /// Length of the longest row, `0` for an empty grid
    pub fn max_row_length(&self) -> usize {
        self.rows.iter().map(Cells::len).max().unwrap_or(0)
    }

    /// Check if the grid has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check if every row has the same length
    pub fn is_rectangular(&self) -> bool {
        let max = self.max_row_length();
        self.rows.iter().all(|row| row.len() == max)
    }

    /// Iterate over the stored rows without copying them
    pub fn iter_rows(&self) -> impl Iterator<Item = &Cells<T>> {
        self.rows.iter()
    }
}

impl<T: Clone> Grid<T> {
    /// Snapshot every stored row, each at its own stored length
    pub fn rows(&self) -> Vec<RowView<T>> {
        self.rows
            .iter()
            .map(|cells| RowView::from_cells(cells.clone()))
            .collect()
    }

    /// Derive `max_row_length()` columns of `row_count()` cells each.
    ///
    /// Rows shorter than a column index contribute an absent cell. The
    /// stored rows are not modified.
    pub fn columns(&self) -> Vec<ColumnView<T>> {
        (0..self.max_row_length())
            .map(|column| {
                let cells = self
                    .rows
                    .iter()
                    .map(|row| row.as_slice().get(column).cloned().flatten())
                    .collect();
                ColumnView::from_cells(cells)
            })
            .collect()
    }

    /// Height of the tallest derived column
    pub fn max_column_height(&self) -> usize {
        self.columns().iter().map(|c| c.len()).max().unwrap_or(0)
    }
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Table<T> for Grid<T> {
    fn cell(&self, row: isize, column: isize) -> Result<Option<&T>> {
        self.peek(row, column)
    }

    /// Fails with [`Error::NullValue`] when `value` is `None`
    fn set_cell(&mut self, row: isize, column: isize, value: Option<T>) -> Result<()> {
        self.store(row, column, value)
    }

    fn rows(&self) -> Vec<RowView<T>> {
        Grid::rows(self)
    }

    fn columns(&self) -> Vec<ColumnView<T>> {
        Grid::columns(self)
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        self.max_row_length()
    }
}

impl<T: Clone + fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render(self))
    }
}
