//! Focus tracking and keyboard navigation
//!
//! Focus is kept in displayed coordinates: when a filter is active, row 0 is
//! the first row of the filtered view, not of the grid.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::label::CellPosition;

/// Navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
    /// Next cell, wrapping to the start of the next row
    TabForward,
    /// Previous cell, wrapping to the end of the previous row
    TabBackward,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::TabForward => "tab",
            Direction::TabBackward => "shift-tab",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "tab" | "tab-forward" => Ok(Direction::TabForward),
            "shift-tab" | "backtab" | "tab-backward" => Ok(Direction::TabBackward),
            _ => Err(Error::InvalidDirection(s.to_string())),
        }
    }
}

/// Compute the focus target for a move within a `rows` x `columns` area
///
/// Returns `from` unchanged when the move would leave the area.
pub fn next_focus(
    from: CellPosition,
    direction: Direction,
    rows: usize,
    columns: usize,
) -> CellPosition {
    if rows == 0 || columns == 0 {
        return from;
    }
    let last_row = rows - 1;
    let last_col = columns - 1;
    let CellPosition { row, col } = from;

    match direction {
        Direction::Left => CellPosition::new(row, col.saturating_sub(1)),
        Direction::Right => CellPosition::new(row, (col + 1).min(last_col)),
        Direction::Up => CellPosition::new(row.saturating_sub(1), col),
        Direction::Down => CellPosition::new((row + 1).min(last_row), col),
        Direction::TabForward => {
            if col < last_col {
                CellPosition::new(row, col + 1)
            } else if row < last_row {
                CellPosition::new(row + 1, 0)
            } else {
                from
            }
        }
        Direction::TabBackward => {
            if col > 0 {
                CellPosition::new(row, col - 1)
            } else if row > 0 {
                CellPosition::new(row - 1, last_col)
            } else {
                from
            }
        }
    }
}

/// The active cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    focus: CellPosition,
}

impl Selection {
    /// Focus on the top-left cell
    pub fn new() -> Self {
        Self::default()
    }

    /// The focused cell
    pub fn focus(&self) -> CellPosition {
        self.focus
    }

    /// Whether `row` holds the focus (for header highlighting)
    pub fn is_focused_row(&self, row: usize) -> bool {
        self.focus.row == row
    }

    /// Whether `col` holds the focus (for header highlighting)
    pub fn is_focused_column(&self, col: usize) -> bool {
        self.focus.col == col
    }

    /// Focus a cell directly, clamped into the `rows` x `columns` area
    pub fn set_focus(&mut self, pos: CellPosition, rows: usize, columns: usize) {
        self.focus = pos;
        self.clamp(rows, columns);
    }

    /// Move focus and return whether it changed
    pub fn move_focus(&mut self, direction: Direction, rows: usize, columns: usize) -> bool {
        let next = next_focus(self.focus, direction, rows, columns);
        tracing::trace!(from = %self.focus, to = %next, %direction, "move focus");
        let moved = next != self.focus;
        self.focus = next;
        moved
    }

    /// Pull the focus back inside a `rows` x `columns` area
    ///
    /// With an empty area (a filter that matched nothing) the focus parks at
    /// row 0 of the clamped column.
    pub fn clamp(&mut self, rows: usize, columns: usize) {
        self.focus.row = self.focus.row.min(rows.saturating_sub(1));
        self.focus.col = self.focus.col.min(columns.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> CellPosition {
        CellPosition::new(row, col)
    }

    #[test]
    fn test_arrows_clamp() {
        assert_eq!(next_focus(pos(0, 0), Direction::Left, 3, 3), pos(0, 0));
        assert_eq!(next_focus(pos(0, 0), Direction::Up, 3, 3), pos(0, 0));
        assert_eq!(next_focus(pos(2, 2), Direction::Right, 3, 3), pos(2, 2));
        assert_eq!(next_focus(pos(2, 2), Direction::Down, 3, 3), pos(2, 2));
        assert_eq!(next_focus(pos(1, 1), Direction::Right, 3, 3), pos(1, 2));
        assert_eq!(next_focus(pos(1, 1), Direction::Down, 3, 3), pos(2, 1));
    }

    #[test]
    fn test_tab_wraps() {
        assert_eq!(next_focus(pos(0, 2), Direction::TabForward, 3, 3), pos(1, 0));
        assert_eq!(next_focus(pos(1, 0), Direction::TabBackward, 3, 3), pos(0, 2));
    }

    #[test]
    fn test_tab_stops_at_ends() {
        assert_eq!(next_focus(pos(2, 2), Direction::TabForward, 3, 3), pos(2, 2));
        assert_eq!(next_focus(pos(0, 0), Direction::TabBackward, 3, 3), pos(0, 0));
    }

    #[test]
    fn test_empty_area_is_noop() {
        assert_eq!(next_focus(pos(0, 1), Direction::Down, 0, 3), pos(0, 1));
    }

    #[test]
    fn test_selection_move_reports_change() {
        let mut sel = Selection::new();
        assert!(sel.move_focus(Direction::Right, 2, 2));
        assert!(!sel.move_focus(Direction::Right, 2, 2));
        assert_eq!(sel.focus(), pos(0, 1));
        assert!(sel.is_focused_row(0));
        assert!(sel.is_focused_column(1));
    }

    #[test]
    fn test_clamp() {
        let mut sel = Selection::new();
        sel.set_focus(pos(9, 9), 10, 10);
        sel.clamp(4, 2);
        assert_eq!(sel.focus(), pos(3, 1));
        sel.clamp(0, 2);
        assert_eq!(sel.focus(), pos(0, 1));
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("tab".parse::<Direction>().unwrap(), Direction::TabForward);
        assert_eq!("Shift-Tab".parse::<Direction>().unwrap(), Direction::TabBackward);
        assert_eq!("LEFT".parse::<Direction>().unwrap(), Direction::Left);
        assert!("diagonal".parse::<Direction>().is_err());
    }
}
