//! Command scripts
//!
//! One command per line; blank lines and lines starting with `#` are
//! skipped. Rows are written as shown on screen (1-based), columns as
//! labels (`A`, `B`, ...).
//!
//! ```text
//! rows 4
//! set A1 Apple
//! sort A desc
//! filter A app
//! menu row 1
//! action insert-row-below
//! ```

use std::io::{BufRead, Write};

use anyhow::{anyhow, bail, Context, Result};
use tabgrid::prelude::*;
use tabgrid::column_index;

use crate::render::render;

/// One parsed script line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `rows N` (typed text, clamped like the count field)
    Rows(String),
    /// `cols N`
    Cols(String),
    /// `set A1 text...` or `edit ROW COL text...`
    Set(CellPosition, String),
    /// `sort COL asc|desc`
    Sort(usize, SortDirection),
    /// `filter COL text...` (set the form and apply it)
    Filter(usize, String),
    /// `filter-column COL`
    FilterColumn(usize),
    /// `filter-value text...`
    FilterValue(String),
    /// `apply-filter`
    ApplyFilter,
    /// `clear-filter`
    ClearFilter,
    /// `focus A1`
    Focus(CellPosition),
    /// `key DIRECTION`
    Key(Direction),
    /// `menu row N | menu col COL | menu cell A1`
    Menu(MenuTarget),
    /// `action NAME`
    Action(MenuAction),
    /// `dismiss`
    Dismiss,
    /// `print`
    Print,
}

/// Split off the first whitespace-delimited word
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], s[i..].trim_start()),
        None => (s, ""),
    }
}

/// Parse a 1-based row number as shown in the row header
fn parse_row_number(s: &str) -> Result<usize> {
    let n: usize = s
        .parse()
        .with_context(|| format!("invalid row number '{}'", s))?;
    n.checked_sub(1)
        .ok_or_else(|| anyhow!("row numbers start at 1"))
}

fn require<'a>(arg: &'a str, what: &str) -> Result<&'a str> {
    if arg.is_empty() {
        bail!("missing {}", what);
    }
    Ok(arg)
}

/// Parse one line; `None` for blank lines and comments
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = split_word(line);
    let command = match word.to_ascii_lowercase().as_str() {
        "rows" => Command::Rows(require(rest, "row count")?.to_string()),
        "cols" | "columns" => Command::Cols(require(rest, "column count")?.to_string()),
        "set" => {
            let (pos, text) = split_word(rest);
            Command::Set(require(pos, "cell position")?.parse()?, text.to_string())
        }
        "edit" => {
            let (row, rest) = split_word(rest);
            let (col, text) = split_word(rest);
            let pos = CellPosition::new(
                parse_row_number(require(row, "row number")?)?,
                column_index(require(col, "column")?)?,
            );
            Command::Set(pos, text.to_string())
        }
        "sort" => {
            let (col, dir) = split_word(rest);
            let dir = if dir.is_empty() { "asc" } else { dir };
            Command::Sort(column_index(require(col, "column")?)?, dir.parse()?)
        }
        "filter" => {
            let (col, text) = split_word(rest);
            Command::Filter(column_index(require(col, "column")?)?, text.to_string())
        }
        "filter-column" => Command::FilterColumn(column_index(require(rest, "column")?)?),
        "filter-value" => Command::FilterValue(rest.to_string()),
        "apply-filter" => Command::ApplyFilter,
        "clear-filter" => Command::ClearFilter,
        "focus" => Command::Focus(require(rest, "cell position")?.parse()?),
        "key" => Command::Key(require(rest, "direction")?.parse()?),
        "menu" => {
            let (kind, arg) = split_word(rest);
            let arg = require(arg, "menu target")?;
            let target = match kind.to_ascii_lowercase().as_str() {
                "row" => MenuTarget::Row {
                    row: parse_row_number(arg)?,
                },
                "col" | "column" => MenuTarget::Column {
                    col: column_index(arg)?,
                },
                "cell" => {
                    let pos: CellPosition = arg.parse()?;
                    MenuTarget::Cell {
                        row: pos.row,
                        col: pos.col,
                    }
                }
                other => bail!("unknown menu target '{}' (expected row, col or cell)", other),
            };
            Command::Menu(target)
        }
        "action" => Command::Action(require(rest, "action")?.parse()?),
        "dismiss" => Command::Dismiss,
        "print" => Command::Print,
        other => bail!("unknown command '{}'", other),
    };

    Ok(Some(command))
}

/// Apply one command to a session
pub fn apply(session: &mut GridSession, command: &Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Rows(text) => session.set_row_count_text(text),
        Command::Cols(text) => session.set_column_count_text(text),
        Command::Set(pos, text) => session.edit_cell(pos.row, pos.col, text.as_str())?,
        Command::Sort(col, dir) => session.sort(*col, *dir)?,
        Command::Filter(col, text) => {
            session.set_filter_column(*col);
            session.set_filter_value(text.as_str());
            session.apply_filter();
        }
        Command::FilterColumn(col) => session.set_filter_column(*col),
        Command::FilterValue(text) => session.set_filter_value(text.as_str()),
        Command::ApplyFilter => {
            session.apply_filter();
        }
        Command::ClearFilter => session.clear_filter(),
        Command::Focus(pos) => session.focus_cell(pos.row, pos.col)?,
        Command::Key(dir) => {
            session.navigate(*dir);
        }
        Command::Menu(target) => {
            session.open_context_menu(*target)?;
        }
        Command::Action(action) => {
            if !session.choose_menu_action(*action)? {
                tracing::warn!(%action, "action left the grid unchanged");
            }
        }
        Command::Dismiss => {
            session.dismiss_context_menu();
        }
        Command::Print => write!(out, "{}", render(session))?,
    }
    Ok(())
}

/// Run every command from `input`, stopping at the first error
///
/// Returns the number of commands executed.
pub fn run(
    session: &mut GridSession,
    input: impl BufRead,
    out: &mut impl Write,
    print_each: bool,
) -> Result<usize> {
    let mut executed = 0;

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read line {}", line_no))?;
        let Some(command) =
            parse_line(&line).with_context(|| format!("line {}: '{}'", line_no, line.trim()))?
        else {
            continue;
        };

        tracing::debug!(line = line_no, ?command, "apply");
        apply(session, &command, &mut *out)
            .with_context(|| format!("line {}: '{}'", line_no, line.trim()))?;
        executed += 1;

        if print_each && command != Command::Print {
            writeln!(out, "> {}", line.trim())?;
            write!(out, "{}", render(session))?;
        }
    }

    Ok(executed)
}
