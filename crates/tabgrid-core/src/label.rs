//! Column labels and A1-style cell positions
//!
//! Column headers use the spreadsheet convention: 0 = A, 25 = Z, 26 = AA,
//! 51 = AZ, 52 = BA. Rows are shown 1-based.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Convert a column index to its label (0 = A, 25 = Z, 26 = AA, etc.)
///
/// # Examples
/// ```
/// use tabgrid_core::column_label;
///
/// assert_eq!(column_label(0), "A");
/// assert_eq!(column_label(26), "AA");
/// assert_eq!(column_label(52), "BA");
/// ```
pub fn column_label(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1; // 1-based for calculation

    while n > 0 {
        n -= 1;
        letters.push((n % 26) as u8 + b'A');
        n /= 26;
    }

    letters.reverse();
    // Only ASCII uppercase letters were pushed
    letters.into_iter().map(char::from).collect()
}

/// Convert a column label back to its index (A = 0, Z = 25, AA = 26, etc.)
///
/// Case-insensitive. Fails on empty input, non-letters, or labels too long
/// to index.
pub fn column_index(label: &str) -> Result<usize> {
    let label = label.trim();
    if label.is_empty() {
        return Err(Error::InvalidLabel("empty label".into()));
    }

    let mut col: usize = 0;
    for c in label.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidLabel(format!(
                "invalid column letter '{}' in '{}'",
                c, label
            )));
        }
        let digit = c.to_ascii_uppercase() as usize - 'A' as usize + 1;
        col = col
            .checked_mul(26)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| Error::InvalidLabel(format!("label too long: '{}'", label)))?;
    }

    Ok(col - 1)
}

/// A cell position (0-based row and column)
///
/// Displays and parses in A1 notation, where the row number is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellPosition {
    /// Row index (0-based internally, 1-based in display)
    pub row: usize,
    /// Column index (0-based, A=0, B=1, ...)
    pub col: usize,
}

impl CellPosition {
    /// Create a new cell position
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Parse a position from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use tabgrid_core::CellPosition;
    ///
    /// let pos = CellPosition::parse("B3").unwrap();
    /// assert_eq!(pos.row, 2);
    /// assert_eq!(pos.col, 1);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(s.len());

        if split == 0 {
            return Err(Error::InvalidPosition(format!(
                "no column letters in '{}'",
                s
            )));
        }

        let (letters, digits) = s.split_at(split);
        if digits.is_empty() {
            return Err(Error::InvalidPosition(format!("no row number in '{}'", s)));
        }

        let col = column_index(letters).map_err(|e| Error::InvalidPosition(e.to_string()))?;
        let row: usize = digits
            .parse()
            .map_err(|_| Error::InvalidPosition(format!("invalid row number in '{}'", s)))?;

        // Rows are 1-based in A1 notation
        if row == 0 {
            return Err(Error::InvalidPosition(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        Ok(Self { row: row - 1, col })
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", column_label(self.col), self.row + 1)
    }
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellPosition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
