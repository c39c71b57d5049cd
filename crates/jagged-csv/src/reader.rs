//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use jagged_core::Grid;
use log::{debug, trace};

use crate::error::CsvResult;
use crate::options::CsvReadOptions;

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a grid
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Grid<String>> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV text into a grid
    pub fn read_str(text: &str, options: &CsvReadOptions) -> CsvResult<Grid<String>> {
        Self::read(text.as_bytes(), options)
    }

    /// Read CSV from a reader into a grid.
    ///
    /// Every record becomes one row with exactly as many cells as the record
    /// has fields. Every blank line becomes an empty row, so grids written by
    /// [`CsvWriter`](crate::CsvWriter) read back with their row lengths intact.
    pub fn read<R: Read>(mut reader: R, options: &CsvReadOptions) -> CsvResult<Grid<String>> {
        // The csv crate skips blank lines, so they are recovered from the raw bytes
        let mut input = Vec::new();
        reader.read_to_end(&mut input)?;

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .comment(options.comment)
            .trim(if options.trim {
                csv::Trim::All
            } else {
                csv::Trim::None
            })
            .has_headers(false)
            .flexible(true)
            .from_reader(input.as_slice());

        let mut grid = Grid::new();
        let mut widest = 0;
        let mut record = csv::StringRecord::new();
        let mut after_cr = false;

        loop {
            let start = csv_reader.position().byte() as usize;
            let more = csv_reader.read_record(&mut record)?;
            let end = csv_reader.position().byte() as usize;

            let span = &input[start..end];
            for _ in 0..leading_blank_lines(span, after_cr, options.comment) {
                grid.push_row(std::iter::empty::<Option<String>>());
            }
            after_cr = span.last() == Some(&b'\r');

            if !more {
                break;
            }

            if record.len() != widest && grid.row_count() > 0 {
                trace!(
                    "ragged record at row {}: {} fields (previous widest {widest})",
                    grid.row_count(),
                    record.len()
                );
            }
            widest = widest.max(record.len());

            grid.push_row(record.iter().map(|field| {
                if options.empty_as_absent && field.is_empty() {
                    None
                } else {
                    Some(field.to_string())
                }
            }));
        }

        debug!(
            "read {} CSV rows, widest record has {widest} fields",
            grid.row_count()
        );
        Ok(grid)
    }
}

/// Count the blank lines the csv reader skipped at the front of `span`.
///
/// `span` is everything consumed by one read. A `\n` left over from a CRLF
/// that ended the previous span is not a blank line. Comment lines are
/// skipped without counting.
fn leading_blank_lines(span: &[u8], after_cr: bool, comment: Option<u8>) -> usize {
    let mut pos = usize::from(after_cr && span.first() == Some(&b'\n'));
    let mut blanks = 0;

    while let Some(&byte) = span.get(pos) {
        match byte {
            b'\r' => {
                blanks += 1;
                pos += 1;
                if span.get(pos) == Some(&b'\n') {
                    pos += 1;
                }
            }
            b'\n' => {
                blanks += 1;
                pos += 1;
            }
            _ if Some(byte) == comment => match span[pos..].iter().position(|&b| b == b'\n') {
                Some(offset) => pos += offset + 1,
                None => break,
            },
            _ => break,
        }
    }

    blanks
}
