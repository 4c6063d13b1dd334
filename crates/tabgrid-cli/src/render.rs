//! Plain-text grid rendering
//!
//! ```text
//!    | A ^ | B
//! ---+-----+---
//!  1 | 1   | []
//!  2 | 2   | x
//! focus B1 | rows 2/2 | sort A asc
//! ```

use std::fmt::Write;

use tabgrid::prelude::*;

fn width(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, to: usize) -> String {
    format!("{}{}", text, " ".repeat(to.saturating_sub(width(text))))
}

/// Render the displayed part of a session as a text table
pub fn render(session: &GridSession) -> String {
    let snap = session.snapshot();

    let headers: Vec<String> = snap
        .column_labels
        .iter()
        .enumerate()
        .map(|(col, label)| match snap.sort {
            Some(sort) if sort.column == col => match sort.direction {
                SortDirection::Ascending => format!("{} ^", label),
                SortDirection::Descending => format!("{} v", label),
            },
            _ => label.clone(),
        })
        .collect();

    let cells: Vec<Vec<String>> = snap
        .rows
        .iter()
        .enumerate()
        .map(|(row, values)| {
            values
                .iter()
                .enumerate()
                .map(|(col, text)| {
                    if snap.focus == CellPosition::new(row, col) {
                        format!("[{}]", text)
                    } else {
                        text.clone()
                    }
                })
                .collect()
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            cells
                .iter()
                .map(|row| width(&row[col]))
                .chain(std::iter::once(width(header)))
                .max()
                .unwrap_or(1)
        })
        .collect();
    let gutter = snap.rows.len().to_string().len().max(2);

    let mut out = String::new();

    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad(h, *w))
        .collect();
    let _ = writeln!(
        out,
        "{} | {}",
        " ".repeat(gutter),
        header_line.join(" | ").trim_end()
    );

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}-+-{}", "-".repeat(gutter), rule.join("-+-"));

    for (row, values) in cells.iter().enumerate() {
        let line: Vec<String> = values
            .iter()
            .zip(&widths)
            .map(|(v, w)| pad(v, *w))
            .collect();
        let _ = writeln!(
            out,
            "{:>gutter$} | {}",
            row + 1,
            line.join(" | ").trim_end(),
            gutter = gutter
        );
    }

    let mut status = format!(
        "focus {} | rows {}/{}",
        snap.focus, snap.rows.len(), snap.total_rows
    );
    if snap.filtered {
        let form = session.filter_form();
        let _ = write!(
            status,
            " | filter {} contains '{}'",
            column_label(form.column),
            form.value
        );
    }
    if let Some(sort) = snap.sort {
        let _ = write!(status, " | sort {} {}", column_label(sort.column), sort.direction);
    }
    let _ = writeln!(out, "{}", status);

    if let Some(menu) = session.context_menu() {
        let actions: Vec<&str> = menu.actions().iter().map(|a| a.name()).collect();
        let _ = writeln!(out, "menu {:?}: {}", menu.target(), actions.join(", "));
    }

    out
}
