//! # jagged-csv
//!
//! CSV reader and writer for jagged grids.
//!
//! Records map one-to-one onto grid rows and keep their own lengths, so a
//! CSV file with uneven records reads into a ragged [`Grid`](jagged_core::Grid)
//! and writes back out unchanged. Blank lines stand for rows with no cells.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use writer::CsvWriter;
