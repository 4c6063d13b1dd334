//! Grid type

use tracing::{debug, trace};

use crate::filter::FilterState;
use crate::options::GridOptions;
use crate::row::{Row, RowId};
use crate::sort::{compare_cells, SortConfig, SortDirection};

/// A rectangular table of text cells
///
/// Every row always holds exactly [`column_count`](Grid::column_count) cells
/// and there is always at least one row and one column.
///
/// Index arguments are 0-based and must be in bounds; they are expected to
/// come from rendering the current grid. Out-of-bounds indices panic.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Rows in display order
    rows: Vec<Row>,
    /// Cells per row
    columns: usize,
    /// Next row id to hand out
    next_id: u64,
    /// Last applied sort
    sort: Option<SortConfig>,
    /// Active filter view
    filter: Option<FilterState>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::with_options(&GridOptions::default())
    }
}

impl Grid {
    /// Create a grid of empty cells (dimensions are clamped to at least 1)
    pub fn new(rows: usize, columns: usize) -> Self {
        let mut grid = Self {
            rows: Vec::new(),
            columns: columns.max(1),
            next_id: 0,
            sort: None,
            filter: None,
        };
        grid.resize_rows(rows);
        grid
    }

    /// Create a grid from options
    pub fn with_options(options: &GridOptions) -> Self {
        let (rows, columns) = options.clamped();
        Self::new(rows, columns)
    }

    /// Create a grid from row values
    ///
    /// Rows are padded with empty cells to the widest row.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tabgrid_core::Grid;
    ///
    /// let grid = Grid::from_values(vec![vec!["a", "b"], vec!["c"]]);
    /// assert_eq!(grid.column_count(), 2);
    /// assert_eq!(grid.cell(1, 1), Some(""));
    /// ```
    pub fn from_values<R, S>(values: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<Vec<String>> = values
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        let columns = values.iter().map(Vec::len).max().unwrap_or(0);

        let mut grid = Self::new(values.len(), columns);
        for (row, cells) in values.into_iter().enumerate() {
            for (col, text) in cells.into_iter().enumerate() {
                grid.set_cell(row, col, text);
            }
        }
        grid
    }

    fn blank_row(&mut self) -> Row {
        let id = RowId::new(self.next_id);
        self.next_id += 1;
        Row::empty(id, self.columns)
    }

    // === Dimensions & Access ===

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// All rows in grid order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get a row by index
    pub fn row(&self, row: usize) -> Option<&Row> {
        self.rows.get(row)
    }

    /// Get a cell's text by row and column indices
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.cell(col))
    }

    /// Current position of a row
    pub fn position_of(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|r| r.id() == id)
    }

    /// Copy out all cell values, row by row
    pub fn to_values(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(|r| r.cells().to_vec()).collect()
    }

    /// Copy out one column's values
    pub fn column_values(&self, col: usize) -> Vec<&str> {
        self.rows.iter().map(|r| r.cell(col).unwrap_or("")).collect()
    }

    fn check_row(row: usize, limit: usize) {
        assert!(
            row < limit,
            "row index {} out of bounds (must be below {})",
            row,
            limit
        );
    }

    fn check_column(col: usize, limit: usize) {
        assert!(
            col < limit,
            "column index {} out of bounds (must be below {})",
            col,
            limit
        );
    }

    // === Cell Modification ===

    /// Replace the text of a cell
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn set_cell<S: Into<String>>(&mut self, row: usize, col: usize, value: S) {
        Self::check_row(row, self.rows.len());
        Self::check_column(col, self.columns);
        self.rows[row].cells_mut()[col] = value.into();
    }

    /// Replace the text of a cell in the row with the given id
    ///
    /// Returns `false` if no such row exists anymore.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    pub fn set_cell_by_id<S: Into<String>>(&mut self, id: RowId, col: usize, value: S) -> bool {
        Self::check_column(col, self.columns);
        match self.position_of(id) {
            Some(row) => {
                self.rows[row].cells_mut()[col] = value.into();
                true
            }
            None => false,
        }
    }

    // === Resizing ===

    /// Truncate or extend the grid to `rows` rows (at least 1)
    ///
    /// Clears any active filter.
    pub fn resize_rows(&mut self, rows: usize) {
        let rows = rows.max(1);
        debug!(from = self.rows.len(), to = rows, "resize rows");

        if rows < self.rows.len() {
            self.rows.truncate(rows);
        } else {
            while self.rows.len() < rows {
                let row = self.blank_row();
                self.rows.push(row);
            }
        }
        self.filter = None;
    }

    /// Truncate or pad every row to `columns` cells (at least 1)
    ///
    /// Clears any active filter, and the sort config if its column is gone.
    pub fn resize_columns(&mut self, columns: usize) {
        let columns = columns.max(1);
        debug!(from = self.columns, to = columns, "resize columns");

        for row in &mut self.rows {
            row.cells_mut().resize(columns, String::new());
        }
        self.columns = columns;

        if self.sort.is_some_and(|s| s.column >= columns) {
            self.sort = None;
        }
        self.filter = None;
    }

    // === Insert / Delete ===

    /// Insert an empty row before `at` (`at == row_count` appends)
    ///
    /// Clears any active filter.
    ///
    /// # Panics
    ///
    /// Panics if `at > row_count`.
    pub fn insert_row(&mut self, at: usize) {
        Self::check_row(at, self.rows.len() + 1);
        debug!(at, "insert row");

        let row = self.blank_row();
        self.rows.insert(at, row);
        self.filter = None;
    }

    /// Insert an empty column before `at` (`at == column_count` appends)
    ///
    /// Clears any active filter.
    ///
    /// # Panics
    ///
    /// Panics if `at > column_count`.
    pub fn insert_column(&mut self, at: usize) {
        Self::check_column(at, self.columns + 1);
        debug!(at, "insert column");

        for row in &mut self.rows {
            row.cells_mut().insert(at, String::new());
        }
        self.columns += 1;

        if let Some(sort) = self.sort.as_mut() {
            if sort.column >= at {
                sort.column += 1;
            }
        }
        self.filter = None;
    }

    /// Remove the row at `at`
    ///
    /// Returns `false` and leaves the grid untouched if it is the last row.
    /// Otherwise clears any active filter.
    ///
    /// # Panics
    ///
    /// Panics if `at` is out of bounds.
    pub fn delete_row(&mut self, at: usize) -> bool {
        Self::check_row(at, self.rows.len());
        if self.rows.len() <= 1 {
            trace!(at, "refusing to delete the last row");
            return false;
        }
        debug!(at, "delete row");

        self.rows.remove(at);
        self.filter = None;
        true
    }

    /// Remove the column at `at`
    ///
    /// Returns `false` and leaves the grid untouched if it is the last
    /// column. Otherwise clears any active filter.
    ///
    /// # Panics
    ///
    /// Panics if `at` is out of bounds.
    pub fn delete_column(&mut self, at: usize) -> bool {
        Self::check_column(at, self.columns);
        if self.columns <= 1 {
            trace!(at, "refusing to delete the last column");
            return false;
        }
        debug!(at, "delete column");

        for row in &mut self.rows {
            row.cells_mut().remove(at);
        }
        self.columns -= 1;

        self.sort = match self.sort {
            Some(s) if s.column == at => None,
            Some(s) if s.column > at => Some(SortConfig::new(s.column - 1, s.direction)),
            other => other,
        };
        self.filter = None;
        true
    }

    // === Sorting ===

    /// Stable-sort all rows by the values in `col`
    ///
    /// Blank cells go last in both directions. An active filter keeps its
    /// rows and follows the new order.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    pub fn sort_by_column(&mut self, col: usize, direction: SortDirection) {
        Self::check_column(col, self.columns);
        debug!(col, %direction, "sort rows");

        self.rows.sort_by(|a, b| {
            compare_cells(
                a.cell(col).unwrap_or(""),
                b.cell(col).unwrap_or(""),
                direction,
            )
        });
        self.sort = Some(SortConfig::new(col, direction));

        if let Some(filter) = self.filter.as_mut() {
            filter.follow_order(&self.rows);
        }
    }

    /// The last applied sort, if any
    pub fn sort_config(&self) -> Option<SortConfig> {
        self.sort
    }

    // === Filtering ===

    /// Compute the rows matching `needle` in `col` without applying it
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    pub fn filtered<S: Into<String>>(&self, col: usize, needle: S) -> FilterState {
        Self::check_column(col, self.columns);
        FilterState::build(&self.rows, col, needle)
    }

    /// Show only rows whose `col` cell contains `needle` (case-insensitive)
    ///
    /// The grid's rows are not modified.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    pub fn apply_filter<S: Into<String>>(&mut self, col: usize, needle: S) -> &FilterState {
        let filter = self.filtered(col, needle);
        debug!(
            col,
            needle = filter.needle(),
            matched = filter.len(),
            "apply filter"
        );
        self.filter.insert(filter)
    }

    /// Drop the active filter, returning it
    pub fn clear_filter(&mut self) -> Option<FilterState> {
        self.filter.take()
    }

    /// The active filter, if any
    pub fn filter(&self) -> Option<&FilterState> {
        self.filter.as_ref()
    }

    /// Whether a filter is active
    pub fn is_filtered(&self) -> bool {
        self.filter.is_some()
    }

    // === Displayed View ===

    /// Number of rows currently displayed (filtered or full)
    pub fn displayed_row_count(&self) -> usize {
        match &self.filter {
            Some(filter) => filter.len(),
            None => self.rows.len(),
        }
    }

    /// Map a displayed row index to its grid row index
    pub fn displayed_to_grid(&self, view_row: usize) -> Option<usize> {
        match &self.filter {
            Some(filter) => filter.row_id(view_row).and_then(|id| self.position_of(id)),
            None => (view_row < self.rows.len()).then_some(view_row),
        }
    }

    /// Get the row displayed at `view_row`
    pub fn displayed_row(&self, view_row: usize) -> Option<&Row> {
        self.displayed_to_grid(view_row).map(|row| &self.rows[row])
    }

    /// Rows currently displayed, in display order
    pub fn displayed_rows(&self) -> Box<dyn Iterator<Item = &Row> + '_> {
        match &self.filter {
            Some(filter) => Box::new(
                filter
                    .row_ids()
                    .iter()
                    .filter_map(move |id| self.position_of(*id).map(|row| &self.rows[row])),
            ),
            None => Box::new(self.rows.iter()),
        }
    }
}
