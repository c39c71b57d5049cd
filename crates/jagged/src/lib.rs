//! # jagged
//!
//! Ragged in-memory tables with box-drawn text rendering.
//!
//! A [`Grid`] is a list of rows that may each have a different length.
//! Writes past the end of a row or past the last row grow the grid; reads
//! past the end of a row report an absent cell. Columns are derived on
//! demand, and [`render`] turns any [`Table`] into box-drawn text.
//!
//! ## Features
//!
//! - Ragged grids with auto-expanding writes
//! - Row and column snapshots that are tables themselves
//! - Box-drawn text rendering
//! - CSV import/export that preserves uneven records (`csv` feature, default)
//!
//! ## Example
//!
//! ```rust
//! use jagged::prelude::*;
//!
//! let mut grid = Grid::new();
//! for (row, tag) in ["#1", "#2"].iter().enumerate() {
//!     let row = row as isize;
//!     grid.set(row, 0, "test").unwrap();
//!     grid.set(row, 1, "item").unwrap();
//!     grid.set(row, 2, *tag).unwrap();
//! }
//!
//! assert_eq!(
//!     render(&grid),
//!     "┌────┬────┬──┐\n│test│item│#1│\n├────┴────┴──┤\n│test│item│#2│\n└────┴────┴──┘"
//! );
//! ```

pub mod prelude;

// Re-export core types
pub use jagged_core::{
    box_chars,
    cell_text,
    column_widths,
    render,
    Cells,
    ColumnView,
    // Error types
    Error,
    // Main types
    Grid,
    Presence,
    Result,
    RowView,
    Table,
    ABSENT_TEXT,
};

// Re-export I/O types
#[cfg(feature = "csv")]
pub use jagged_csv::{
    CsvError, CsvReadOptions, CsvReader, CsvResult, CsvWriteOptions, CsvWriter, LineTerminator,
};

#[cfg(feature = "csv")]
use std::path::Path;

/// Extension trait for Grid to add file I/O
#[cfg(feature = "csv")]
pub trait GridExt: Sized {
    /// Open a grid from a file
    fn open<P: AsRef<Path>>(path: P) -> Result<Self>;

    /// Save the grid to a file
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

#[cfg(feature = "csv")]
impl GridExt for Grid<String> {
    fn open<P: AsRef<Path>>(path: P) -> Result<Grid<String>> {
        let path = path.as_ref();
        let options = match extension(path).as_deref() {
            Some("csv") => CsvReadOptions::default(),
            Some("tsv") => CsvReadOptions::tsv(),
            _ => return Err(unsupported(path)),
        };

        CsvReader::read_file(path, &options).map_err(|e| Error::other(e.to_string()))
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let options = match extension(path).as_deref() {
            Some("csv") => CsvWriteOptions::default(),
            Some("tsv") => CsvWriteOptions::tsv(),
            _ => return Err(unsupported(path)),
        };

        CsvWriter::write_file(self, path, &options).map_err(|e| Error::other(e.to_string()))
    }
}

#[cfg(feature = "csv")]
fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

#[cfg(feature = "csv")]
fn unsupported(path: &Path) -> Error {
    Error::other(format!("Unsupported file format: {}", path.display()))
}
