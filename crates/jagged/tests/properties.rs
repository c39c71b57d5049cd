// Property-based tests for grid access, column derivation and rendering.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use jagged::prelude::*;
use jagged::{box_chars, column_widths, Cells};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// A cell value: short text, sometimes empty.
fn arb_value() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => r"[a-z0-9#]{1,8}",
        1 => Just(String::new()),
    ]
}

/// Ragged row data, with some absent cells mixed in.
fn arb_rows() -> impl Strategy<Value = Vec<Vec<Option<String>>>> {
    prop::collection::vec(
        prop::collection::vec(prop::option::weighted(0.8, arb_value()), 0..6),
        0..6,
    )
}

/// Rectangular row data with every cell present.
fn arb_rectangle() -> impl Strategy<Value = Vec<Vec<String>>> {
    (1usize..5, 1usize..5).prop_flat_map(|(rows, columns)| {
        prop::collection::vec(prop::collection::vec(r"[a-z0-9]{1,6}", columns), rows)
    })
}

fn grid_from(rows: &[Vec<Option<String>>]) -> Grid<String> {
    Grid::from_rows(rows.iter().cloned())
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config())]

    #[test]
    fn prop_set_then_get(rows in arb_rows(), r in 0isize..10, c in 0isize..10, v in arb_value()) {
        let mut grid = grid_from(&rows);
        grid.set(r, c, v.clone()).unwrap();

        prop_assert_eq!(grid.get(r, c).unwrap(), Some(&v));
        prop_assert_eq!(grid.peek(r, c).unwrap(), Some(&v));
    }

    #[test]
    fn prop_get_past_row_end_pads(rows in arb_rows(), extra in 0usize..5) {
        prop_assume!(!rows.is_empty());
        let mut grid = grid_from(&rows);
        let column = grid.max_row_length() + extra;

        prop_assert_eq!(grid.get(0, column as isize).unwrap(), None);
        prop_assert_eq!(grid.row_len(0), Some(column + 1));
    }

    #[test]
    fn prop_missing_row_is_error(rows in arb_rows(), extra in 0usize..5, c in 0isize..10) {
        let mut grid = grid_from(&rows);
        let r = (grid.row_count() + extra) as isize;

        let is_row_not_found = matches!(grid.get(r, c), Err(Error::RowNotFound { .. }));
        prop_assert!(is_row_not_found);
        prop_assert!(grid.peek(r, c).is_err());
    }

    #[test]
    fn prop_invalid_writes(rows in arb_rows(), v in arb_value()) {
        let mut grid = grid_from(&rows);
        let before = grid.clone();

        prop_assert_eq!(grid.set(-1, 0, v), Err(Error::InvalidIndex(-1)));
        let is_null_value = matches!(grid.set_cell(0, 0, None), Err(Error::NullValue { .. }));
        prop_assert!(is_null_value);
        prop_assert_eq!(grid, before);
    }

    #[test]
    fn prop_columns_are_rectangular(rows in arb_rows()) {
        let grid = grid_from(&rows);
        let columns = grid.columns();

        prop_assert_eq!(columns.len(), grid.max_row_length());
        for column in &columns {
            prop_assert_eq!(column.len(), grid.row_count());
        }

        // Derivation is repeatable and leaves storage alone
        prop_assert_eq!(grid.columns(), columns);
        prop_assert_eq!(grid, grid_from(&rows));
    }

    #[test]
    fn prop_column_cells_match_peek(rows in arb_rows()) {
        let grid = grid_from(&rows);
        for (c, column) in grid.columns().iter().enumerate() {
            for r in 0..grid.row_count() {
                prop_assert_eq!(column.get(r as isize), grid.peek(r as isize, c as isize).unwrap());
            }
        }
    }

    #[test]
    fn prop_render_rectangle(rows in arb_rectangle()) {
        let mut grid = Grid::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                grid.set(r as isize, c as isize, value.clone()).unwrap();
            }
        }

        let text = render(&grid);
        let lines: Vec<&str> = text.lines().collect();
        prop_assert_eq!(lines.len(), rows.len() * 2 + 1);

        let widths = column_widths(&grid);
        for (c, width) in widths.iter().enumerate() {
            let longest = rows.iter().map(|row| row[c].chars().count()).max().unwrap_or(0);
            prop_assert_eq!(*width, longest);
        }

        let segments: Vec<usize> = lines[0]
            .trim_start_matches(box_chars::TOP_LEFT)
            .trim_end_matches(box_chars::TOP_RIGHT)
            .split(box_chars::TOP_TEE)
            .map(|s| s.chars().count())
            .collect();
        prop_assert_eq!(&segments, &widths);

        for (r, row) in rows.iter().enumerate() {
            let line = lines[1 + r * 2];
            let cells: Vec<&str> = line
                .trim_matches(box_chars::VERTICAL)
                .split(box_chars::VERTICAL)
                .collect();
            prop_assert_eq!(cells, row.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }

    #[test]
    fn prop_row_views_keep_lengths(rows in arb_rows()) {
        let grid = grid_from(&rows);
        let views = grid.rows();

        prop_assert_eq!(views.len(), rows.len());
        for (view, row) in views.iter().zip(&rows) {
            prop_assert_eq!(view.len(), row.len());
            prop_assert_eq!(view.as_slice(), row.as_slice());
        }
    }

    #[test]
    fn prop_cells_set_extends(len in 0usize..8, index in 0isize..12) {
        let mut cells: Cells<u8> = Cells::absent(len, jagged::Presence::Lenient);
        cells.set(index, Some(1)).unwrap();

        prop_assert_eq!(cells.len(), len.max(index as usize + 1));
        prop_assert_eq!(cells.get(index), Some(&1));
    }
}
