//! Row types

use std::fmt;

/// Stable row identifier
///
/// Allocated by the owning [`Grid`](crate::Grid) and never reused within it.
/// A row keeps its id when rows around it are inserted, deleted or sorted,
/// so a filtered view can always find the row it refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

impl RowId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw id value (opaque, only meaningful for comparison)
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One grid row: its identity and its cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    id: RowId,
    cells: Vec<String>,
}

impl Row {
    /// Create a row of `columns` empty cells
    pub(crate) fn empty(id: RowId, columns: usize) -> Self {
        Self {
            id,
            cells: vec![String::new(); columns],
        }
    }

    /// Stable id of this row
    pub fn id(&self) -> RowId {
        self.id
    }

    /// Cells in this row
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Get a cell by column index
    pub fn cell(&self, col: usize) -> Option<&str> {
        self.cells.get(col).map(String::as_str)
    }

    /// Number of cells in row
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if every cell is blank
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(String::is_empty)
    }

    pub(crate) fn cells_mut(&mut self) -> &mut Vec<String> {
        &mut self.cells
    }
}
