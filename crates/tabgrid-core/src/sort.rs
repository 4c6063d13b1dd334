//! Row sorting by column value
//!
//! Cells are plain text, so the sort key is inferred per comparison:
//! - Blank cells (empty text) always sort last, in either direction
//! - Text that parses as a decimal float is a number
//! - Anything else is text
//!
//! Numbers sort before text. Comparing "numeric if both parse, otherwise as
//! strings" pairwise would not be transitive ("9" < "10" < "1a" < "9"), so
//! the key carries a type rank instead: Number < Text < Blank.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Apply this direction to an ascending ordering
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }

    /// Short name ("asc" / "desc")
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" | "up" => Ok(SortDirection::Ascending),
            "desc" | "descending" | "down" => Ok(SortDirection::Descending),
            _ => Err(Error::InvalidSortDirection(s.to_string())),
        }
    }
}

/// The last applied sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SortConfig {
    /// Column the rows were sorted by
    pub column: usize,
    /// Direction of the sort
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(column: usize, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Whether the sort indicator for `column`/`direction` should be lit
    pub fn is_active(&self, column: usize, direction: SortDirection) -> bool {
        self.column == column && self.direction == direction
    }
}

/// Sort key inferred from a cell's text
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortKey<'a> {
    /// Parses as a decimal float (never NaN)
    Number(f64),
    /// Any other non-empty text
    Text(&'a str),
    /// Empty cell
    Blank,
}

impl<'a> SortKey<'a> {
    /// Classify a cell's text
    pub fn from_cell(text: &'a str) -> Self {
        if text.is_empty() {
            return SortKey::Blank;
        }
        match parse_number(text) {
            Some(n) => SortKey::Number(n),
            None => SortKey::Text(text),
        }
    }

    /// Type rank: Number(0) < Text(1) < Blank(2)
    fn rank(&self) -> u8 {
        match self {
            SortKey::Number(_) => 0,
            SortKey::Text(_) => 1,
            SortKey::Blank => 2,
        }
    }
}

/// Parse a decimal number from trimmed text
///
/// "Infinity" (optionally signed) is the only spelled-out value accepted;
/// "inf", "infinity" and "NaN" stay text.
fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned.starts_with(|c: char| c.is_ascii_alphabetic()) && unsigned != "Infinity" {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Compare two cells for a sort in `direction`
///
/// Blanks are last regardless of direction; everything else honours it.
pub fn compare_cells(a: &str, b: &str, direction: SortDirection) -> Ordering {
    let (ka, kb) = (SortKey::from_cell(a), SortKey::from_cell(b));
    match (ka, kb) {
        (SortKey::Blank, SortKey::Blank) => Ordering::Equal,
        (SortKey::Blank, _) => Ordering::Greater,
        (_, SortKey::Blank) => Ordering::Less,
        (SortKey::Number(x), SortKey::Number(y)) => {
            direction.apply(x.partial_cmp(&y).unwrap_or(Ordering::Equal))
        }
        (SortKey::Text(x), SortKey::Text(y)) => direction.apply(compare_text(x, y)),
        _ => direction.apply(ka.rank().cmp(&kb.rank())),
    }
}

/// Dictionary-style text ordering
///
/// Case-insensitive first, then lowercase before uppercase at the first
/// case difference, then by code point.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}
