//! Editing session
//!
//! A [`GridSession`] is the state a host application keeps around a grid:
//! the focused cell, the filter form inputs, and the open context menu. It
//! receives view intents in displayed coordinates (which differ from grid
//! coordinates while a filter is active), validates them, and forwards them
//! to the [`Grid`].
//!
//! # Example
//!
//! ```rust
//! use tabgrid::prelude::*;
//!
//! let mut session = GridSession::new(&GridOptions::new(3, 2));
//! session.edit_cell(0, 0, "Apple").unwrap();
//! session.edit_cell(1, 0, "banana").unwrap();
//!
//! session.set_filter_value("app");
//! session.apply_filter();
//! assert_eq!(session.displayed_row_count(), 1);
//!
//! session.open_context_menu(MenuTarget::Row { row: 0 }).unwrap();
//! session.choose_menu_action(MenuAction::InsertRowBelow).unwrap();
//! assert_eq!(session.grid().row_count(), 4);
//! assert!(!session.is_filtered());
//! ```

use tracing::debug;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    column_label, CellPosition, ContextMenuRequest, Direction, Error, Grid, GridOptions,
    MenuAction, MenuTarget, Result, Selection, SortConfig, SortDirection, StructuralEdit,
};

/// Parse a dimension typed into a count field
///
/// Reads the leading integer like a browser's `parseInt`, so "3.7" is 3
/// and "12abc" is 12. Input without leading digits, values below 1 and
/// values too large to count become 1.
pub fn parse_dimension(text: &str) -> usize {
    let text = text.trim_start();
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());

    match rest[..end].parse::<usize>() {
        Ok(n) if !negative => n.max(1),
        _ => 1,
    }
}

/// Inputs of the filter controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FilterForm {
    /// Column to filter on
    pub column: usize,
    /// Text to search for
    pub value: String,
}

/// Everything a view needs to draw the grid
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GridSnapshot {
    /// Header labels ("A", "B", ...)
    pub column_labels: Vec<String>,
    /// Displayed rows (filtered or full)
    pub rows: Vec<Vec<String>>,
    /// Focused cell in displayed coordinates
    pub focus: CellPosition,
    /// Last applied sort
    pub sort: Option<SortConfig>,
    /// Whether a filter is active (enables "clear filter")
    pub filtered: bool,
    /// Total rows in the grid, ignoring the filter
    pub total_rows: usize,
}

/// A grid plus the interaction state around it
#[derive(Debug, Clone, Default)]
pub struct GridSession {
    grid: Grid,
    selection: Selection,
    menu: Option<ContextMenuRequest>,
    form: FilterForm,
}

impl GridSession {
    /// Start a session over an empty grid
    pub fn new(options: &GridOptions) -> Self {
        Self::from_grid(Grid::with_options(options))
    }

    /// Start a session over an existing grid
    pub fn from_grid(grid: Grid) -> Self {
        let mut session = Self {
            grid,
            ..Default::default()
        };
        session.reclamp();
        session
    }

    // === Queries ===

    /// The underlying grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consume the session, keeping the grid
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Focused cell in displayed coordinates
    pub fn focus(&self) -> CellPosition {
        self.selection.focus()
    }

    /// The focus tracker
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Last applied sort
    pub fn sort_config(&self) -> Option<SortConfig> {
        self.grid.sort_config()
    }

    /// Whether a filter is active
    pub fn is_filtered(&self) -> bool {
        self.grid.is_filtered()
    }

    /// Current filter inputs
    pub fn filter_form(&self) -> &FilterForm {
        &self.form
    }

    /// The open context menu, if any
    pub fn context_menu(&self) -> Option<&ContextMenuRequest> {
        self.menu.as_ref()
    }

    /// Rows currently displayed
    pub fn displayed_row_count(&self) -> usize {
        self.grid.displayed_row_count()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.grid.column_count()
    }

    /// Cell text at a displayed position
    pub fn displayed_cell(&self, view_row: usize, col: usize) -> Option<&str> {
        self.grid.displayed_row(view_row).and_then(|r| r.cell(col))
    }

    /// Copy out the displayed state
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            column_labels: (0..self.grid.column_count()).map(column_label).collect(),
            rows: self
                .grid
                .displayed_rows()
                .map(|r| r.cells().to_vec())
                .collect(),
            focus: self.focus(),
            sort: self.sort_config(),
            filtered: self.is_filtered(),
            total_rows: self.grid.row_count(),
        }
    }

    // === Validation ===

    fn check_view_row(&self, view_row: usize) -> Result<usize> {
        self.grid
            .displayed_to_grid(view_row)
            .ok_or(Error::RowOutOfBounds(view_row, self.displayed_row_count()))
    }

    fn check_column(&self, col: usize) -> Result<()> {
        if col < self.grid.column_count() {
            Ok(())
        } else {
            Err(Error::ColumnOutOfBounds(col, self.grid.column_count()))
        }
    }

    /// Keep focus and the filter column inside the current bounds
    fn reclamp(&mut self) {
        let (rows, columns) = (self.displayed_row_count(), self.column_count());
        self.selection.clamp(rows, columns);
        self.form.column = self.form.column.min(columns - 1);
    }

    // === Dimensions ===

    /// Set the row count (clamped to at least 1)
    pub fn set_row_count(&mut self, rows: usize) {
        self.menu = None;
        self.grid.resize_rows(rows);
        self.reclamp();
    }

    /// Set the column count (clamped to at least 1)
    pub fn set_column_count(&mut self, columns: usize) {
        self.menu = None;
        self.grid.resize_columns(columns);
        self.reclamp();
    }

    /// Set the row count from a text field
    pub fn set_row_count_text(&mut self, text: &str) {
        self.set_row_count(parse_dimension(text));
    }

    /// Set the column count from a text field
    pub fn set_column_count_text(&mut self, text: &str) {
        self.set_column_count(parse_dimension(text));
    }

    // === Editing ===

    /// Replace the text of a displayed cell
    ///
    /// While filtered, the edit lands on the row shown at `view_row`,
    /// wherever that row sits in the grid.
    pub fn edit_cell<S: Into<String>>(&mut self, view_row: usize, col: usize, text: S) -> Result<()> {
        self.menu = None;
        let row = self.check_view_row(view_row)?;
        self.check_column(col)?;
        self.grid.set_cell(row, col, text);
        Ok(())
    }

    /// Sort all rows by a column
    pub fn sort(&mut self, col: usize, direction: SortDirection) -> Result<()> {
        self.menu = None;
        self.check_column(col)?;
        self.grid.sort_by_column(col, direction);
        Ok(())
    }

    // === Filtering ===

    /// Choose the filter column (clamped to the last column)
    pub fn set_filter_column(&mut self, col: usize) {
        self.menu = None;
        self.form.column = col.min(self.column_count() - 1);
    }

    /// Set the filter text
    pub fn set_filter_value<S: Into<String>>(&mut self, value: S) {
        self.menu = None;
        self.form.value = value.into();
    }

    /// Apply the filter described by the form; returns the match count
    pub fn apply_filter(&mut self) -> usize {
        self.menu = None;
        let matched = self
            .grid
            .apply_filter(self.form.column, self.form.value.clone())
            .len();
        self.reclamp();
        matched
    }

    /// Show all rows again and empty the filter text
    pub fn clear_filter(&mut self) {
        self.menu = None;
        self.grid.clear_filter();
        self.form.value.clear();
        self.reclamp();
    }

    // === Focus ===

    /// Focus a displayed cell (e.g. on click)
    pub fn focus_cell(&mut self, view_row: usize, col: usize) -> Result<()> {
        self.menu = None;
        self.check_view_row(view_row)?;
        self.check_column(col)?;
        let (rows, columns) = (self.displayed_row_count(), self.column_count());
        self.selection
            .set_focus(CellPosition::new(view_row, col), rows, columns);
        Ok(())
    }

    /// Move focus for a navigation key; returns whether it moved
    pub fn navigate(&mut self, direction: Direction) -> bool {
        self.menu = None;
        let (rows, columns) = (self.displayed_row_count(), self.column_count());
        self.selection.move_focus(direction, rows, columns)
    }

    // === Context Menu ===

    /// Open a context menu for a displayed row, column, or cell
    ///
    /// Replaces any menu that was already open. Every other intent
    /// closes it, as a click elsewhere would.
    pub fn open_context_menu(&mut self, target: MenuTarget) -> Result<&ContextMenuRequest> {
        if let Some(row) = target.row() {
            self.check_view_row(row)?;
        }
        if let Some(col) = target.col() {
            self.check_column(col)?;
        }
        let menu = self.menu.insert(ContextMenuRequest::new(target));
        Ok(&*menu)
    }

    /// Close the context menu without acting
    pub fn dismiss_context_menu(&mut self) -> Option<ContextMenuRequest> {
        self.menu.take()
    }

    /// Run an action from the open context menu
    ///
    /// The menu is consumed. Returns whether the grid changed: deleting the
    /// last row or column is a silent no-op. Fails without consuming the
    /// menu if no menu is open or the action is not offered for its target.
    pub fn choose_menu_action(&mut self, action: MenuAction) -> Result<bool> {
        let request = self.menu.ok_or(Error::NoContextMenu)?;
        let edit = self.grid_request(request)?.resolve(action)?;
        self.menu = None;

        debug!(?edit, "context menu action");
        let changed = self.apply_edit(edit);
        self.reclamp();
        Ok(changed)
    }

    /// Translate a menu request from displayed to grid coordinates
    fn grid_request(&self, request: ContextMenuRequest) -> Result<ContextMenuRequest> {
        let target = match request.target() {
            MenuTarget::Row { row } => MenuTarget::Row {
                row: self.check_view_row(row)?,
            },
            MenuTarget::Cell { row, col } => {
                self.check_column(col)?;
                MenuTarget::Cell {
                    row: self.check_view_row(row)?,
                    col,
                }
            }
            MenuTarget::Column { col } => {
                self.check_column(col)?;
                MenuTarget::Column { col }
            }
        };
        Ok(ContextMenuRequest::new(target))
    }

    fn apply_edit(&mut self, edit: StructuralEdit) -> bool {
        match edit {
            StructuralEdit::InsertRow(at) => {
                self.grid.insert_row(at);
                true
            }
            StructuralEdit::InsertColumn(at) => {
                self.grid.insert_column(at);
                true
            }
            StructuralEdit::DeleteRow(at) => self.grid.delete_row(at),
            StructuralEdit::DeleteColumn(at) => self.grid.delete_column(at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn session_with(values: &[&str]) -> GridSession {
        GridSession::from_grid(Grid::from_values(values.iter().map(|v| vec![*v, ""])))
    }

    #[test]
    fn test_parse_dimension() {
        assert_eq!(parse_dimension("12"), 12);
        assert_eq!(parse_dimension(" 3 "), 3);
        assert_eq!(parse_dimension("0"), 1);
        assert_eq!(parse_dimension("-4"), 1);
        assert_eq!(parse_dimension("abc"), 1);
        assert_eq!(parse_dimension(""), 1);
        assert_eq!(parse_dimension("3.7"), 3);
        assert_eq!(parse_dimension("12abc"), 12);
        assert_eq!(parse_dimension("+5"), 5);
        assert_eq!(parse_dimension("abc12"), 1);
        assert_eq!(parse_dimension("99999999999999999999999"), 1);
    }

    #[test]
    fn test_defaults() {
        let session = GridSession::default();
        assert_eq!(session.grid().row_count(), 10);
        assert_eq!(session.column_count(), 8);
        assert_eq!(session.focus(), CellPosition::new(0, 0));
        assert!(session.context_menu().is_none());
    }

    #[test]
    fn test_shrinking_reclamps_focus() {
        let mut session = GridSession::new(&GridOptions::new(5, 5));
        session.focus_cell(4, 4).unwrap();
        session.set_row_count(2);
        session.set_column_count_text("3");
        assert_eq!(session.focus(), CellPosition::new(1, 2));
    }

    #[test]
    fn test_edit_while_filtered_targets_shown_row() {
        let mut session = session_with(&["Apple", "banana", "Applesauce"]);
        session.set_filter_value("app");
        assert_eq!(session.apply_filter(), 2);

        session.edit_cell(1, 1, "note").unwrap();
        assert_eq!(session.grid().cell(2, 1), Some("note"));
        assert_eq!(session.grid().cell(1, 1), Some(""));
    }

    #[test]
    fn test_edit_out_of_bounds() {
        let mut session = session_with(&["a"]);
        assert_eq!(
            session.edit_cell(3, 0, "x"),
            Err(Error::RowOutOfBounds(3, 1))
        );
        assert_eq!(
            session.edit_cell(0, 9, "x"),
            Err(Error::ColumnOutOfBounds(9, 2))
        );
    }

    #[test]
    fn test_clear_filter_resets_value() {
        let mut session = session_with(&["a", "b"]);
        session.set_filter_value("a");
        session.apply_filter();
        session.clear_filter();
        assert!(!session.is_filtered());
        assert_eq!(session.filter_form().value, "");
        assert_eq!(session.displayed_row_count(), 2);
    }

    #[test]
    fn test_empty_filter_result_parks_focus() {
        let mut session = session_with(&["a", "b", "c"]);
        session.focus_cell(2, 1).unwrap();
        session.set_filter_value("zzz");
        assert_eq!(session.apply_filter(), 0);
        assert_eq!(session.focus(), CellPosition::new(0, 1));
        assert!(!session.navigate(Direction::Down));
        assert!(session.focus_cell(0, 0).is_err());
    }

    #[test]
    fn test_filter_column_clamped() {
        let mut session = GridSession::new(&GridOptions::new(2, 4));
        session.set_filter_column(10);
        assert_eq!(session.filter_form().column, 3);
        session.set_column_count(2);
        assert_eq!(session.filter_form().column, 1);
    }

    #[test]
    fn test_navigation() {
        let mut session = GridSession::new(&GridOptions::new(2, 2));
        assert!(session.navigate(Direction::TabForward));
        assert!(session.navigate(Direction::TabForward));
        assert_eq!(session.focus(), CellPosition::new(1, 0));
        assert!(session.navigate(Direction::TabForward));
        assert!(!session.navigate(Direction::TabForward));
        assert_eq!(session.focus(), CellPosition::new(1, 1));
    }

    #[test]
    fn test_menu_insert_row_below_while_filtered() {
        let mut session = session_with(&["x", "keep", "y"]);
        session.set_filter_value("keep");
        session.apply_filter();

        session.open_context_menu(MenuTarget::Row { row: 0 }).unwrap();
        assert!(session
            .choose_menu_action(MenuAction::InsertRowBelow)
            .unwrap());

        // Inserted right after the shown row's grid position (1)
        assert_eq!(
            session.grid().column_values(0),
            vec!["x", "keep", "", "y"]
        );
        assert!(!session.is_filtered());
        assert!(session.context_menu().is_none());
    }

    #[test]
    fn test_menu_delete_last_row_is_noop() {
        let mut session = session_with(&["only"]);
        session.open_context_menu(MenuTarget::Row { row: 0 }).unwrap();
        assert!(!session.choose_menu_action(MenuAction::DeleteRow).unwrap());
        assert_eq!(session.grid().row_count(), 1);
        assert!(session.context_menu().is_none());
    }

    #[test]
    fn test_menu_rejects_unoffered_action() {
        let mut session = session_with(&["a", "b"]);
        session
            .open_context_menu(MenuTarget::Cell { row: 1, col: 0 })
            .unwrap();
        assert!(matches!(
            session.choose_menu_action(MenuAction::DeleteRow),
            Err(Error::ActionNotOffered { .. })
        ));
        // Still open for another choice
        assert!(session.context_menu().is_some());

        session.dismiss_context_menu();
        assert_eq!(
            session.choose_menu_action(MenuAction::InsertRowAbove),
            Err(Error::NoContextMenu)
        );
    }

    #[test]
    fn test_menu_out_of_bounds_target() {
        let mut session = session_with(&["a"]);
        assert!(session
            .open_context_menu(MenuTarget::Column { col: 7 })
            .is_err());
        assert!(session.context_menu().is_none());
    }

    #[test]
    fn test_shrinking_columns_closes_menu() {
        let mut session = GridSession::new(&GridOptions::new(2, 8));
        session
            .open_context_menu(MenuTarget::Column { col: 7 })
            .unwrap();
        session.set_column_count(2);
        assert!(session.context_menu().is_none());
        assert_eq!(
            session.choose_menu_action(MenuAction::DeleteColumn),
            Err(Error::NoContextMenu)
        );

        session
            .open_context_menu(MenuTarget::Cell { row: 0, col: 1 })
            .unwrap();
        session.set_column_count_text("1");
        assert_eq!(
            session.choose_menu_action(MenuAction::InsertColumnRight),
            Err(Error::NoContextMenu)
        );
        assert_eq!(session.column_count(), 1);
    }

    #[test]
    fn test_menu_closed_by_sort_while_filtered() {
        let mut session = session_with(&["b1", "x", "a1"]);
        session.set_filter_value("1");
        session.apply_filter();

        session.open_context_menu(MenuTarget::Row { row: 0 }).unwrap();
        session.sort(0, SortDirection::Ascending).unwrap();
        assert_eq!(
            session.choose_menu_action(MenuAction::DeleteRow),
            Err(Error::NoContextMenu)
        );
        assert_eq!(session.grid().column_values(0), vec!["a1", "b1", "x"]);

        // Re-opening targets the row now shown first
        session.open_context_menu(MenuTarget::Row { row: 0 }).unwrap();
        assert!(session.choose_menu_action(MenuAction::DeleteRow).unwrap());
        assert_eq!(session.grid().column_values(0), vec!["b1", "x"]);
    }

    #[test]
    fn test_other_intents_close_menu() {
        let mut session = session_with(&["a", "b"]);
        let target = MenuTarget::Cell { row: 0, col: 0 };

        session.open_context_menu(target).unwrap();
        session.edit_cell(1, 0, "c").unwrap();
        assert!(session.context_menu().is_none());

        session.open_context_menu(target).unwrap();
        session.focus_cell(1, 1).unwrap();
        assert!(session.context_menu().is_none());

        session.open_context_menu(target).unwrap();
        session.navigate(Direction::Up);
        assert!(session.context_menu().is_none());

        session.open_context_menu(target).unwrap();
        session.set_filter_value("a");
        assert!(session.context_menu().is_none());

        session.open_context_menu(target).unwrap();
        session.clear_filter();
        assert!(session.context_menu().is_none());
    }

    #[test]
    fn test_delete_column_reclamps_focus() {
        let mut session = GridSession::new(&GridOptions::new(2, 3));
        session.focus_cell(0, 2).unwrap();
        session
            .open_context_menu(MenuTarget::Column { col: 2 })
            .unwrap();
        assert!(session.choose_menu_action(MenuAction::DeleteColumn).unwrap());
        assert_eq!(session.focus(), CellPosition::new(0, 1));
    }

    #[test]
    fn test_snapshot() {
        let mut session = session_with(&["2", "1"]);
        session.sort(0, SortDirection::Ascending).unwrap();
        let snap = session.snapshot();
        assert_eq!(snap.column_labels, vec!["A", "B"]);
        assert_eq!(snap.rows, vec![vec!["1", ""], vec!["2", ""]]);
        assert_eq!(snap.sort, Some(SortConfig::new(0, SortDirection::Ascending)));
        assert!(!snap.filtered);
        assert_eq!(snap.total_rows, 2);
    }
}
