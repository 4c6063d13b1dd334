//! Grid options

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of rows in a new grid
pub const DEFAULT_ROWS: usize = 10;

/// Default number of columns in a new grid
pub const DEFAULT_COLUMNS: usize = 8;

/// Options for creating a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridOptions {
    /// Initial row count (default: 10)
    pub rows: usize,
    /// Initial column count (default: 8)
    pub columns: usize,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
        }
    }
}

impl GridOptions {
    /// Create options with explicit dimensions
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Set the initial row count
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Set the initial column count
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Dimensions with the 1x1 floor applied
    pub fn clamped(&self) -> (usize, usize) {
        (self.rows.max(1), self.columns.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = GridOptions::default();
        assert_eq!(opts.rows, 10);
        assert_eq!(opts.columns, 8);
    }

    #[test]
    fn test_clamped() {
        assert_eq!(GridOptions::new(0, 0).clamped(), (1, 1));
        assert_eq!(GridOptions::default().with_rows(3).clamped(), (3, 8));
    }
}
