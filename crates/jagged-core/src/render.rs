//! Box-drawn text rendering
//!
//! ```text
//! ┌────┬────┬──┐
//! │test│item│#1│
//! ├────┴────┴──┤
//! │test│item│#2│
//! └────┴────┴──┘
//! ```
//!
//! Column widths are the longest stringified cell in each derived column,
//! with absent cells counted as the word `null`. Cell text itself is not
//! padded; only the border segments use the column width. A row that is
//! shorter than a column prints that many spaces in its place.

use std::fmt::Display;

use crate::table::Table;

/// Box-drawing glyphs used by [`render`]
pub mod box_chars {
    pub const TOP_LEFT: char = '┌';
    pub const TOP_RIGHT: char = '┐';
    pub const BOTTOM_LEFT: char = '└';
    pub const BOTTOM_RIGHT: char = '┘';

    pub const VERTICAL: char = '│';
    pub const HORIZONTAL: char = '─';

    /// Junction between two columns on the top border
    pub const TOP_TEE: char = '┬';
    /// Junction between two columns below a row
    pub const BOTTOM_TEE: char = '┴';
    /// Left end of a separator between rows
    pub const LEFT_TEE: char = '├';
    /// Right end of a separator between rows
    pub const RIGHT_TEE: char = '┤';
}

use box_chars::*;

/// Text used for absent cells
pub const ABSENT_TEXT: &str = "null";

/// Stringify a cell, spelling absent cells as [`ABSENT_TEXT`]
pub fn cell_text<T: Display>(cell: Option<&T>) -> String {
    match cell {
        Some(value) => value.to_string(),
        None => ABSENT_TEXT.to_string(),
    }
}

/// Width of every derived column, in characters
pub fn column_widths<T, B>(table: &B) -> Vec<usize>
where
    T: Clone + Display,
    B: Table<T> + ?Sized,
{
    table
        .columns()
        .iter()
        .map(|column| {
            column
                .iter()
                .map(|cell| cell_text(cell.as_ref()).chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect()
}

/// Render a table as box-drawn text.
///
/// Lines are separated by `\n` with no trailing newline. An empty table
/// renders as a top border directly followed by a bottom border.
pub fn render<T, B>(table: &B) -> String
where
    T: Clone + Display,
    B: Table<T> + ?Sized,
{
    let widths = column_widths(table);
    let rows = table.rows();

    let mut out = String::new();
    push_border(&mut out, &widths, TOP_LEFT, TOP_TEE, TOP_RIGHT);

    for (index, row) in rows.iter().enumerate() {
        out.push('\n');
        out.push(VERTICAL);
        for (column, &width) in widths.iter().enumerate() {
            if row.contains_index(column) {
                out.push_str(&cell_text(row.as_slice()[column].as_ref()));
            } else {
                out.extend(std::iter::repeat(' ').take(width));
            }
            out.push(VERTICAL);
        }

        out.push('\n');
        if index + 1 == rows.len() {
            push_border(&mut out, &widths, BOTTOM_LEFT, BOTTOM_TEE, BOTTOM_RIGHT);
        } else {
            push_border(&mut out, &widths, LEFT_TEE, BOTTOM_TEE, RIGHT_TEE);
        }
    }

    if rows.is_empty() {
        out.push('\n');
        push_border(&mut out, &widths, BOTTOM_LEFT, BOTTOM_TEE, BOTTOM_RIGHT);
    }

    out
}

fn push_border(out: &mut String, widths: &[usize], left: char, junction: char, right: char) {
    out.push(left);
    for (index, &width) in widths.iter().enumerate() {
        if index > 0 {
            out.push(junction);
        }
        out.extend(std::iter::repeat(HORIZONTAL).take(width));
    }
    out.push(right);
}
