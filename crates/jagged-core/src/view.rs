//! Row and column views
//!
//! Views are owned snapshots: mutating one never touches the table it was
//! taken from. Each view also satisfies [`Table`], degenerating into a
//! 1×N (row) or N×1 (column) table.

use std::ops::Deref;

use crate::cells::{Cells, Presence};
use crate::error::Result;
use crate::table::Table;

/// A single row, addressed by column index
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowView<T> {
    cells: Cells<T>,
}

impl<T> RowView<T> {
    /// Create an empty row
    pub fn new() -> Self {
        Self {
            cells: Cells::new(),
        }
    }

    /// Create a row from existing cells
    pub fn from_cells(cells: Cells<T>) -> Self {
        Self {
            cells: cells.with_presence(Presence::Lenient),
        }
    }

    /// Create a row where every cell is present
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::from_cells(Cells::from_values(values))
    }

    /// Store `value` at column `index`, padding with absent cells as needed
    pub fn set(&mut self, index: isize, value: Option<T>) -> Result<()> {
        self.cells.set(index, value)
    }

    /// Consume the view and return its cells
    pub fn into_cells(self) -> Cells<T> {
        self.cells
    }
}

impl<T> Deref for RowView<T> {
    type Target = Cells<T>;

    fn deref(&self) -> &Cells<T> {
        &self.cells
    }
}

impl<T: Clone> Table<T> for RowView<T> {
    /// `row` is ignored
    fn cell(&self, _row: isize, column: isize) -> Result<Option<&T>> {
        Ok(self.cells.get(column))
    }

    fn set_cell(&mut self, _row: isize, column: isize, value: Option<T>) -> Result<()> {
        self.cells.set(column, value)
    }

    fn rows(&self) -> Vec<RowView<T>> {
        vec![self.clone()]
    }

    fn columns(&self) -> Vec<ColumnView<T>> {
        self.cells
            .iter()
            .map(|cell| ColumnView::from_cells(std::iter::once(cell.clone()).collect()))
            .collect()
    }

    fn row_count(&self) -> usize {
        1
    }

    fn column_count(&self) -> usize {
        self.cells.len()
    }
}

/// A single column, addressed by row index
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnView<T> {
    cells: Cells<T>,
}

impl<T> ColumnView<T> {
    /// Create an empty column
    pub fn new() -> Self {
        Self {
            cells: Cells::new(),
        }
    }

    /// Create a column from existing cells
    pub fn from_cells(cells: Cells<T>) -> Self {
        Self {
            cells: cells.with_presence(Presence::Lenient),
        }
    }

    /// Create a column where every cell is present
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::from_cells(Cells::from_values(values))
    }

    /// Store `value` at row `index`, padding with absent cells as needed
    pub fn set(&mut self, index: isize, value: Option<T>) -> Result<()> {
        self.cells.set(index, value)
    }

    /// Consume the view and return its cells
    pub fn into_cells(self) -> Cells<T> {
        self.cells
    }
}

impl<T> Deref for ColumnView<T> {
    type Target = Cells<T>;

    fn deref(&self) -> &Cells<T> {
        &self.cells
    }
}

impl<T: Clone> Table<T> for ColumnView<T> {
    /// `column` is ignored
    fn cell(&self, row: isize, _column: isize) -> Result<Option<&T>> {
        Ok(self.cells.get(row))
    }

    fn set_cell(&mut self, row: isize, _column: isize, value: Option<T>) -> Result<()> {
        self.cells.set(row, value)
    }

    fn rows(&self) -> Vec<RowView<T>> {
        self.cells
            .iter()
            .map(|cell| RowView::from_cells(std::iter::once(cell.clone()).collect()))
            .collect()
    }

    fn columns(&self) -> Vec<ColumnView<T>> {
        vec![self.clone()]
    }

    fn row_count(&self) -> usize {
        self.cells.len()
    }

    fn column_count(&self) -> usize {
        1
    }
}
