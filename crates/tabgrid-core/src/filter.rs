//! Column-value filter view
//!
//! A filter is a read-only view over the grid: the ids of the rows whose
//! cell in one column contains a needle, case-insensitively. Rows are kept
//! in grid order. The grid itself is never modified by filtering.

use crate::row::{Row, RowId};

/// Case-insensitive substring match
///
/// An empty needle matches every cell, including blank ones.
pub fn cell_matches(cell: &str, needle: &str) -> bool {
    cell.to_lowercase().contains(&needle.to_lowercase())
}

/// An applied filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    column: usize,
    needle: String,
    rows: Vec<RowId>,
}

impl FilterState {
    /// Build the view of `rows` matching `needle` in `column`
    ///
    /// A row too short to have `column` is matched as a blank cell.
    pub fn build<S: Into<String>>(rows: &[Row], column: usize, needle: S) -> Self {
        let needle = needle.into();
        let rows = rows
            .iter()
            .filter(|row| cell_matches(row.cell(column).unwrap_or(""), &needle))
            .map(Row::id)
            .collect();

        Self {
            column,
            needle,
            rows,
        }
    }

    /// Column the filter was applied to
    pub fn column(&self) -> usize {
        self.column
    }

    /// The text that was searched for
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Ids of matching rows, in display order
    pub fn row_ids(&self) -> &[RowId] {
        &self.rows
    }

    /// Number of displayed rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether nothing matched
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Id of the row shown at `view_row`
    pub fn row_id(&self, view_row: usize) -> Option<RowId> {
        self.rows.get(view_row).copied()
    }

    /// Check if a row is part of the view
    pub fn contains(&self, id: RowId) -> bool {
        self.rows.contains(&id)
    }

    /// Re-order the view to follow the current grid order
    ///
    /// The row set is unchanged; rows that no longer exist are dropped.
    pub(crate) fn follow_order(&mut self, rows: &[Row]) {
        let kept: Vec<RowId> = rows
            .iter()
            .map(Row::id)
            .filter(|id| self.rows.contains(id))
            .collect();
        self.rows = kept;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_matches() {
        assert!(cell_matches("Apple", "app"));
        assert!(cell_matches("Applesauce", "APP"));
        assert!(!cell_matches("banana", "app"));
        assert!(cell_matches("", ""));
        assert!(cell_matches("anything", ""));
        assert!(!cell_matches("", "a"));
    }
}
