//! CSV writer

use std::fmt::Display;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use jagged_core::Grid;

use crate::error::CsvResult;
use crate::options::{CsvWriteOptions, LineTerminator};

/// CSV file writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write a grid to a CSV file
    pub fn write_file<T: Display, P: AsRef<Path>>(
        grid: &Grid<T>,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(grid, file, options)
    }

    /// Write a grid to a string
    pub fn write_string<T: Display>(grid: &Grid<T>, options: &CsvWriteOptions) -> CsvResult<String> {
        let mut buf = Vec::new();
        Self::write(grid, &mut buf, options)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Write a grid to a writer.
    ///
    /// Each stored row becomes one record of the row's own length. Rows
    /// with no cells are written as blank lines.
    pub fn write<T: Display, W: Write>(
        grid: &Grid<T>,
        writer: W,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
            LineTerminator::CR => csv::Terminator::Any(b'\r'),
        };

        let mut builder = csv::WriterBuilder::new();
        builder
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(terminator)
            .flexible(true);
        let mut csv_writer = builder.from_writer(writer);

        for row in grid.iter_rows() {
            let record: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(value) => value.to_string(),
                    None => options.absent_as.clone(),
                })
                .collect();

            if record.is_empty() {
                // csv always writes `""` for a record with no fields, so empty
                // rows bypass it and go out as a bare line terminator
                let mut inner = csv_writer
                    .into_inner()
                    .map_err(|err| err.into_error())?;
                inner.write_all(options.line_terminator.as_bytes())?;
                csv_writer = builder.from_writer(inner);
            } else {
                csv_writer.write_record(&record)?;
            }
        }

        csv_writer.flush()?;
        Ok(())
    }
}
