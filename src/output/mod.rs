//! Output formatting for CLI display
//!
//! This module renders one page of a [`BrowseView`] as a terminal table, as
//! JSON, or as CSV. Only the table carries view chrome (selection markers,
//! sort arrow, padding rows, footer); the data formats contain the visible
//! records and nothing else.

use crate::browse::{Browsable, BrowseView, Column, FieldValue, SelectAllState, SortDirection, ViewState};
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

/// Text of one cell, empty for a missing field
#[must_use]
pub fn cell_text(value: Option<FieldValue<'_>>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Header label with the sort arrow on the active column
#[must_use]
pub fn header_label(column: &Column, state: &ViewState) -> String {
    if column.key != state.sort_key() {
        return column.label.to_string();
    }
    let arrow = match state.sort_direction() {
        SortDirection::Ascending => '▲',
        SortDirection::Descending => '▼',
    };
    format!("{} {arrow}", column.label)
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

/// Render the current page as an aligned table
///
/// Padding rows keep a short final page at the height of a full one.
/// `quiet` drops the footer and colours.
#[must_use]
pub fn render_table<R: Browsable>(view: &BrowseView<'_, R>, state: &ViewState, quiet: bool) -> String {
    let columns = R::columns();
    let visible = view.visible();

    let headers: Vec<String> = columns.iter().map(|c| header_label(c, state)).collect();
    let cells: Vec<Vec<String>> = visible
        .iter()
        .map(|r| columns.iter().map(|c| cell_text(r.field(c.key))).collect())
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(visible.len() + view.window.empty_rows + 3);

    let header = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad(h, *w))
        .collect::<Vec<_>>()
        .join("  ");
    let header = format!("{} {header}", view.select_all.marker());
    lines.push(if quiet { header } else { header.bold().to_string() });

    if visible.is_empty() && view.window.empty_rows == 0 {
        lines.push(no_rows_message(view, state, quiet));
    }

    for (record, row) in visible.iter().zip(&cells) {
        let selected = state.selection().is_selected(&record.record_id());
        let marker = if selected { "[x]" } else { "[ ]" };
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| pad(cell, *w))
            .collect::<Vec<_>>()
            .join("  ");
        let line = format!("{marker} {line}");
        lines.push(if selected && !quiet { line.green().to_string() } else { line });
    }

    lines.extend(std::iter::repeat_n(String::new(), view.window.empty_rows));

    if !quiet {
        lines.push(footer(view, state).dimmed().to_string());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn no_rows_message<R>(view: &BrowseView<'_, R>, state: &ViewState, quiet: bool) -> String {
    let message = if view.rows.is_empty() && !state.filter_text().trim().is_empty() {
        format!("    No results found for \"{}\"", state.filter_text())
    } else if view.rows.is_empty() {
        "    No records".to_string()
    } else {
        format!(
            "    Page {} is past the end ({} page(s))",
            view.window.page_index + 1,
            view.window.page_count()
        )
    };
    if quiet { message } else { message.yellow().to_string() }
}

/// One-line page summary, e.g. `Rows 6-7 of 7 | page 2/2 | 1 selected`
#[must_use]
pub fn footer<R>(view: &BrowseView<'_, R>, state: &ViewState) -> String {
    let window = &view.window;
    let rows = if window.range.is_empty() {
        format!("Rows 0 of {}", window.total)
    } else {
        format!(
            "Rows {}-{} of {}",
            window.range.start + 1,
            window.range.end,
            window.total
        )
    };
    format!(
        "{rows} | page {}/{} | {} per page | {} selected",
        window.page_index + 1,
        window.page_count().max(1),
        window.page_size.get(),
        state.selection().len()
    )
}

/// Visible records as a pretty JSON array
///
/// # Errors
///
/// Returns `serde_json::Error` if a record fails to serialize.
pub fn render_json<R: Serialize>(records: &[&R]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

/// Write visible records as CSV with the column keys as header
///
/// # Errors
///
/// Returns `csv::Error` if writing fails.
pub fn write_csv<R: Browsable, W: Write>(records: &[&R], writer: W) -> Result<(), csv::Error> {
    let mut csv = csv::Writer::from_writer(writer);
    let columns = R::columns();

    csv.write_record(columns.iter().map(|c| c.key))?;
    for record in records {
        csv.write_record(columns.iter().map(|c| cell_text(record.field(c.key))))?;
    }
    csv.flush()?;
    Ok(())
}

/// Short description of how much of the view is selected
#[must_use]
pub const fn select_all_label(state: SelectAllState) -> &'static str {
    match state {
        SelectAllState::None => "none selected",
        SelectAllState::Partial => "some selected",
        SelectAllState::All => "all selected",
    }
}
