// Property-based tests for the grid model.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use std::cmp::Ordering;

use proptest::prelude::*;
use tabgrid::{cell_matches, column_index, column_label, compare_cells, Grid, SortDirection};

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

/// Arbitrary cell: numeric, text, or empty.
fn arb_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => r"-?[0-9]{1,4}(\.[0-9]{1,2})?",
        2 => r"[a-cA-C0-9 ]{1,6}",
        1 => Just(String::new()),
    ]
}

/// Arbitrary single-column grid contents.
fn arb_column() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_cell(), 1..30)
}

/// Arbitrary rectangular grid contents.
fn arb_values() -> impl Strategy<Value = Vec<Vec<String>>> {
    (1usize..6, 1usize..12).prop_flat_map(|(cols, rows)| {
        prop::collection::vec(prop::collection::vec(arb_cell(), cols), rows)
    })
}

fn arb_direction() -> impl Strategy<Value = SortDirection> {
    prop_oneof![
        Just(SortDirection::Ascending),
        Just(SortDirection::Descending)
    ]
}

fn column_grid(values: &[String]) -> Grid {
    Grid::from_values(values.iter().map(|v| vec![v.clone()]))
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config())]

    #[test]
    fn resize_keeps_grid_rectangular(
        values in arb_values(),
        rows in 0usize..40,
        cols in 0usize..20,
    ) {
        let mut grid = Grid::from_values(values);
        grid.resize_rows(rows);
        grid.resize_columns(cols);

        prop_assert_eq!(grid.row_count(), rows.max(1));
        prop_assert_eq!(grid.column_count(), cols.max(1));
        for row in grid.rows() {
            prop_assert_eq!(row.cell_count(), cols.max(1));
        }
    }

    #[test]
    fn column_labels_round_trip(index in 0usize..1_000_000) {
        let label = column_label(index);
        prop_assert!(label.chars().all(|c| c.is_ascii_uppercase()));
        prop_assert_eq!(column_index(&label).unwrap(), index);
    }

    #[test]
    fn insert_then_delete_row_is_identity(values in arb_values(), at in 0usize..20) {
        let original = Grid::from_values(values);
        let at = at % (original.row_count() + 1);

        let mut grid = original.clone();
        grid.insert_row(at);
        prop_assert_eq!(grid.row_count(), original.row_count() + 1);
        prop_assert!(grid.delete_row(at));
        prop_assert_eq!(grid.to_values(), original.to_values());
    }

    #[test]
    fn insert_then_delete_column_is_identity(values in arb_values(), at in 0usize..10) {
        let original = Grid::from_values(values);
        let at = at % (original.column_count() + 1);

        let mut grid = original.clone();
        grid.insert_column(at);
        prop_assert!(grid.delete_column(at));
        prop_assert_eq!(grid.to_values(), original.to_values());
    }

    #[test]
    fn sort_is_ordered_and_idempotent(values in arb_column(), direction in arb_direction()) {
        let mut grid = column_grid(&values);
        grid.sort_by_column(0, direction);
        let once = grid.to_values();

        let column = grid.column_values(0);
        for pair in column.windows(2) {
            prop_assert_ne!(compare_cells(pair[0], pair[1], direction), Ordering::Greater);
        }

        // Blanks trail everything else
        if let Some(first_blank) = column.iter().position(|c| c.is_empty()) {
            prop_assert!(column[first_blank..].iter().all(|c| c.is_empty()));
        }

        grid.sort_by_column(0, direction);
        prop_assert_eq!(grid.to_values(), once);
    }

    #[test]
    fn sort_is_a_permutation(values in arb_column(), direction in arb_direction()) {
        let mut grid = column_grid(&values);
        grid.sort_by_column(0, direction);

        let mut before = values.clone();
        let mut after: Vec<String> = grid.column_values(0).into_iter().map(String::from).collect();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn filter_shows_exactly_the_matches(values in arb_column(), needle in r"[a-cA-C0-9]{0,2}") {
        let mut grid = column_grid(&values);
        let expected: Vec<&String> = values.iter().filter(|v| cell_matches(v, &needle)).collect();

        grid.apply_filter(0, needle.clone());
        let shown: Vec<&str> = grid.displayed_rows().map(|r| r.cell(0).unwrap_or("")).collect();

        prop_assert_eq!(shown.len(), expected.len());
        for (s, e) in shown.iter().zip(expected) {
            prop_assert_eq!(*s, e.as_str());
        }
        prop_assert_eq!(grid.to_values().len(), values.len());
    }
}
