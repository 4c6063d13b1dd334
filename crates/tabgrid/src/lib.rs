//! # tabgrid
//!
//! An in-memory spreadsheet-style grid editor.
//!
//! tabgrid models the editable grid behind a table widget, leaving drawing
//! and input devices to the host:
//!
//! - A rectangular grid of text cells, always at least 1x1
//! - Resizing, and row/column insertion and deletion
//! - Stable sorting with numbers before text and blanks last
//! - A case-insensitive column filter that never touches the data
//! - Keyboard focus with arrow and Tab navigation
//! - Context-menu intents for structural edits
//!
//! ## Example
//!
//! ```rust
//! use tabgrid::prelude::*;
//!
//! // A 10x8 grid, like a fresh widget
//! let mut session = GridSession::default();
//!
//! session.edit_cell(0, 0, "3").unwrap();
//! session.edit_cell(1, 0, "1").unwrap();
//! session.sort(0, SortDirection::Ascending).unwrap();
//!
//! assert_eq!(session.displayed_cell(0, 0), Some("1"));
//!
//! session.navigate(Direction::TabForward);
//! assert_eq!(session.focus().to_string(), "B1");
//! ```

pub mod prelude;
pub mod session;

// Re-export session types
pub use session::{parse_dimension, FilterForm, GridSession, GridSnapshot};

// Re-export core types
pub use tabgrid_core::filter::cell_matches;
pub use tabgrid_core::sort::compare_cells;
pub use tabgrid_core::{
    column_index,
    column_label,
    next_focus,
    // Addressing
    CellPosition,
    // Menu types
    ContextMenuRequest,
    Direction,
    // Error types
    Error,
    FilterState,
    // Main types
    Grid,
    GridOptions,
    MenuAction,
    MenuTarget,
    Result,
    Row,
    RowId,
    Selection,
    SortConfig,
    SortDirection,
    StructuralEdit,
    DEFAULT_COLUMNS,
    DEFAULT_ROWS,
};
