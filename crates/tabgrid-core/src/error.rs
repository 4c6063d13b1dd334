//! Error types for tabgrid-core

use thiserror::Error;

use crate::menu::{MenuAction, MenuTarget};

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tabgrid-core
///
/// Grid operations themselves never fail: sizes are clamped and floor
/// violations are no-ops. These errors cover text parsing and requests
/// arriving from a view layer that has not been bounds-checked yet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid column label (e.g. "A1" or "")
    #[error("Invalid column label: {0}")]
    InvalidLabel(String),

    /// Invalid A1-style cell position
    #[error("Invalid cell position: {0}")]
    InvalidPosition(String),

    /// Row index out of bounds
    #[error("Row index {0} out of bounds (count: {1})")]
    RowOutOfBounds(usize, usize),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (count: {1})")]
    ColumnOutOfBounds(usize, usize),

    /// Unknown navigation direction name
    #[error("Unknown direction: {0}")]
    InvalidDirection(String),

    /// Unknown sort direction name
    #[error("Unknown sort direction: {0}")]
    InvalidSortDirection(String),

    /// Unknown context menu action name
    #[error("Unknown menu action: {0}")]
    InvalidMenuAction(String),

    /// The chosen action is not part of the menu for this target
    #[error("Action {action:?} is not offered for {target:?}")]
    ActionNotOffered {
        target: MenuTarget,
        action: MenuAction,
    },

    /// An action was chosen while no context menu was open
    #[error("No context menu is open")]
    NoContextMenu,
}
