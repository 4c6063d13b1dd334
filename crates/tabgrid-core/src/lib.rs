//! # tabgrid-core
//!
//! Core data structures for the tabgrid grid editor.
//!
//! This crate provides the in-memory model behind a spreadsheet-like grid
//! widget, independent of any rendering technology:
//! - [`Grid`] - Rectangular table of text cells with resize, insert/delete,
//!   sort and filter operations
//! - [`Selection`] - The focused cell and keyboard navigation
//! - [`ContextMenuRequest`] - Right-click intents and their actions
//! - [`column_label`] and [`CellPosition`] - Spreadsheet-style addressing
//!
//! ## Example
//!
//! ```rust
//! use tabgrid_core::{Grid, SortDirection};
//!
//! let mut grid = Grid::new(3, 2);
//! grid.set_cell(0, 0, "10");
//! grid.set_cell(1, 0, "2");
//! grid.set_cell(2, 0, "apple");
//!
//! grid.sort_by_column(0, SortDirection::Ascending);
//! assert_eq!(grid.column_values(0), vec!["2", "10", "apple"]);
//!
//! grid.apply_filter(0, "APP");
//! assert_eq!(grid.displayed_row_count(), 1);
//! ```

pub mod error;
pub mod filter;
pub mod grid;
pub mod label;
pub mod menu;
pub mod options;
pub mod row;
pub mod selection;
pub mod sort;

// Re-exports for convenience
pub use error::{Error, Result};
pub use filter::FilterState;
pub use grid::Grid;
pub use label::{column_index, column_label, CellPosition};
pub use menu::{ContextMenuRequest, MenuAction, MenuTarget, StructuralEdit};
pub use options::{GridOptions, DEFAULT_COLUMNS, DEFAULT_ROWS};
pub use row::{Row, RowId};
pub use selection::{next_focus, Direction, Selection};
pub use sort::{SortConfig, SortDirection};
