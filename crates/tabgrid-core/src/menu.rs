//! Context menu intents
//!
//! A right-click produces a [`ContextMenuRequest`] for the classified target.
//! The request lives until the user picks one of its actions or dismisses
//! it; picking an action yields the [`StructuralEdit`] to apply.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// What was right-clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum MenuTarget {
    /// A row header
    Row { row: usize },
    /// A column header
    Column { col: usize },
    /// A body cell
    Cell { row: usize, col: usize },
}

impl MenuTarget {
    /// Row index, if the target has one
    pub fn row(&self) -> Option<usize> {
        match *self {
            MenuTarget::Row { row } | MenuTarget::Cell { row, .. } => Some(row),
            MenuTarget::Column { .. } => None,
        }
    }

    /// Column index, if the target has one
    pub fn col(&self) -> Option<usize> {
        match *self {
            MenuTarget::Column { col } | MenuTarget::Cell { col, .. } => Some(col),
            MenuTarget::Row { .. } => None,
        }
    }
}

/// An entry in a context menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MenuAction {
    InsertRowAbove,
    InsertRowBelow,
    DeleteRow,
    InsertColumnLeft,
    InsertColumnRight,
    DeleteColumn,
}

const ROW_ACTIONS: &[MenuAction] = &[
    MenuAction::InsertRowAbove,
    MenuAction::InsertRowBelow,
    MenuAction::DeleteRow,
];

const COLUMN_ACTIONS: &[MenuAction] = &[
    MenuAction::InsertColumnLeft,
    MenuAction::InsertColumnRight,
    MenuAction::DeleteColumn,
];

// Cells are not rows or columns on their own, so no delete here
const CELL_ACTIONS: &[MenuAction] = &[
    MenuAction::InsertRowAbove,
    MenuAction::InsertRowBelow,
    MenuAction::InsertColumnLeft,
    MenuAction::InsertColumnRight,
];

impl MenuAction {
    /// Menu caption
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::InsertRowAbove => "Add Row Above",
            MenuAction::InsertRowBelow => "Add Row Below",
            MenuAction::DeleteRow => "Delete Row",
            MenuAction::InsertColumnLeft => "Add Column Left",
            MenuAction::InsertColumnRight => "Add Column Right",
            MenuAction::DeleteColumn => "Delete Column",
        }
    }

    /// Command name used by text front ends
    pub fn name(&self) -> &'static str {
        match self {
            MenuAction::InsertRowAbove => "insert-row-above",
            MenuAction::InsertRowBelow => "insert-row-below",
            MenuAction::DeleteRow => "delete-row",
            MenuAction::InsertColumnLeft => "insert-column-left",
            MenuAction::InsertColumnRight => "insert-column-right",
            MenuAction::DeleteColumn => "delete-column",
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MenuAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "insert-row-above" | "row-above" | "above" => Ok(MenuAction::InsertRowAbove),
            "insert-row-below" | "row-below" | "below" => Ok(MenuAction::InsertRowBelow),
            "delete-row" => Ok(MenuAction::DeleteRow),
            "insert-column-left" | "column-left" | "left" => Ok(MenuAction::InsertColumnLeft),
            "insert-column-right" | "column-right" | "right" => Ok(MenuAction::InsertColumnRight),
            "delete-column" => Ok(MenuAction::DeleteColumn),
            _ => Err(Error::InvalidMenuAction(s.to_string())),
        }
    }
}

/// A structural change chosen from a context menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralEdit {
    InsertRow(usize),
    InsertColumn(usize),
    DeleteRow(usize),
    DeleteColumn(usize),
}

/// An open context menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextMenuRequest {
    target: MenuTarget,
}

impl ContextMenuRequest {
    pub fn new(target: MenuTarget) -> Self {
        Self { target }
    }

    /// What was right-clicked
    pub fn target(&self) -> MenuTarget {
        self.target
    }

    /// The actions this menu offers, in display order
    pub fn actions(&self) -> &'static [MenuAction] {
        match self.target {
            MenuTarget::Row { .. } => ROW_ACTIONS,
            MenuTarget::Column { .. } => COLUMN_ACTIONS,
            MenuTarget::Cell { .. } => CELL_ACTIONS,
        }
    }

    /// Check if `action` is on this menu
    pub fn offers(&self, action: MenuAction) -> bool {
        self.actions().contains(&action)
    }

    /// Translate a chosen action into the edit it requests
    ///
    /// Indices are those of the target; "below"/"right" insert after it.
    pub fn resolve(&self, action: MenuAction) -> Result<StructuralEdit> {
        if !self.offers(action) {
            return Err(Error::ActionNotOffered {
                target: self.target,
                action,
            });
        }

        let row = || self.target.row().unwrap_or(0);
        let col = || self.target.col().unwrap_or(0);
        Ok(match action {
            MenuAction::InsertRowAbove => StructuralEdit::InsertRow(row()),
            MenuAction::InsertRowBelow => StructuralEdit::InsertRow(row() + 1),
            MenuAction::DeleteRow => StructuralEdit::DeleteRow(row()),
            MenuAction::InsertColumnLeft => StructuralEdit::InsertColumn(col()),
            MenuAction::InsertColumnRight => StructuralEdit::InsertColumn(col() + 1),
            MenuAction::DeleteColumn => StructuralEdit::DeleteColumn(col()),
        })
    }
}
