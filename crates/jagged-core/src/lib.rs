//! # jagged-core
//!
//! Core data structures for the jagged table library.
//!
//! This crate provides:
//! - [`Cells`] - A growable sequence of optional cells
//! - [`Grid`] - A ragged 2-D table whose rows may differ in length
//! - [`RowView`] and [`ColumnView`] - Snapshots of a single row or column
//! - [`Table`] - The `(row, column)` contract shared by all of the above
//! - [`render`] - Box-drawn text output
//!
//! ## Example
//!
//! ```rust
//! use jagged_core::Grid;
//!
//! let mut grid = Grid::new();
//! grid.set(0, 0, "test").unwrap();
//! grid.set(0, 1, "item").unwrap();
//! grid.set(1, 0, "short").unwrap();
//!
//! assert_eq!(grid.row_count(), 2);
//! assert_eq!(grid.max_row_length(), 2);
//! println!("{grid}");
//! ```

pub mod cells;
pub mod error;
pub mod grid;
pub mod render;
pub mod table;
pub mod view;

// Re-exports for convenience
pub use cells::{Cells, Presence};
pub use error::{Error, Result};
pub use grid::Grid;
pub use render::{box_chars, cell_text, column_widths, render, ABSENT_TEXT};
pub use table::Table;
pub use view::{ColumnView, RowView};
