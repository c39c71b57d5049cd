//! The two-axis table contract
//!
//! [`Grid`](crate::Grid), [`RowView`] and [`ColumnView`] all implement
//! [`Table`], so a single row or column can be used anywhere a table is
//! expected (for example, rendered on its own).

use crate::error::Result;
use crate::view::{ColumnView, RowView};

/// A two-dimensional collection of optional cells addressed by `(row, column)`
pub trait Table<T: Clone> {
    /// Read the cell at `(row, column)`.
    ///
    /// Returns `Ok(None)` for absent cells. Implementations decide which
    /// out-of-range reads are errors.
    fn cell(&self, row: isize, column: isize) -> Result<Option<&T>>;

    /// Store `value` at `(row, column)`, growing storage as needed
    fn set_cell(&mut self, row: isize, column: isize, value: Option<T>) -> Result<()>;

    /// Snapshot every row of the table
    fn rows(&self) -> Vec<RowView<T>>;

    /// Snapshot every column of the table
    fn columns(&self) -> Vec<ColumnView<T>>;

    /// Number of rows
    fn row_count(&self) -> usize {
        self.rows().len()
    }

    /// Number of columns
    fn column_count(&self) -> usize {
        self.columns().len()
    }

    /// Snapshot a single row, if it exists
    fn row(&self, index: usize) -> Option<RowView<T>> {
        self.rows().into_iter().nth(index)
    }

    /// Snapshot a single column, if it exists
    fn column(&self, index: usize) -> Option<ColumnView<T>> {
        self.columns().into_iter().nth(index)
    }
}
