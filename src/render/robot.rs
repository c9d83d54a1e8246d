//! Robot-mode output (JSON and Markdown).
//!
//! Provides stable, token-efficient output for scripts and agents.

use crate::core::aggregator::ActivityQuery;
use crate::core::models::{ActivityRow, BookChange, Entry, RobotOutput};
use crate::error::Result;
use crate::render::human::counterparty_label;
use crate::util::{format_sem, format_timestamp_ms};

/// Render any serializable value as JSON.
pub fn render_json<T: serde::Serialize>(output: &T) -> Result<String> {
    Ok(serde_json::to_string(output)?)
}

/// Render any serializable value as pretty JSON.
pub fn render_json_pretty<T: serde::Serialize>(output: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(output)?)
}

/// Wrap `data` in the [`RobotOutput`] envelope and render it.
pub fn render_json_envelope<T: serde::Serialize + ?Sized>(
    command: &str,
    data: &T,
    pretty: bool,
) -> Result<String> {
    let output = RobotOutput::new(command, data);
    let mut json = if pretty {
        render_json_pretty(&output)?
    } else {
        render_json(&output)?
    };
    json.push('\n');
    Ok(json)
}

/// Escape a value for a Markdown table cell.
fn md_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

/// Render entries as a Markdown table.
#[must_use]
pub fn render_entries_md(entries: &[Entry]) -> String {
    let mut output = String::from("## Address Book\n\n");
    if entries.is_empty() {
        output.push_str("- entries: 0\n");
        return output;
    }

    output.push_str("| name | address |\n");
    output.push_str("|------|---------|\n");
    for entry in entries {
        output.push_str(&format!(
            "| {} | {} |\n",
            md_cell(&entry.name),
            md_cell(&entry.address)
        ));
    }
    output
}

/// Render a book change as a Markdown list.
#[must_use]
pub fn render_book_change_md(change: &BookChange) -> String {
    let mut output = format!("## book {}\n\n", change.action);
    if let Some(entry) = &change.entry {
        output.push_str(&format!("- name: {}\n", entry.name));
        if !entry.address.is_empty() {
            output.push_str(&format!("- address: {}\n", entry.address));
        }
    }
    output.push_str(&format!("- changed: {}\n", change.changed));
    output.push_str(&format!("- entries: {}\n", change.entries));
    output
}

/// Render activity rows as a Markdown table.
#[must_use]
pub fn render_activity_md(rows: &[ActivityRow], query: &ActivityQuery) -> String {
    let mut output = format!("## Recent {} transactions\n\n", query.type_filter);
    if rows.is_empty() {
        output.push_str("- rows: 0\n");
        return output;
    }

    output.push_str("| relation | time | amount | counterparty |\n");
    output.push_str("|----------|------|--------|--------------|\n");
    for row in rows {
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            row.relation.label(),
            format_timestamp_ms(row.timestamp),
            format_sem(row.value, row.relation.sign_prefix()),
            md_cell(&counterparty_label(row))
        ));
    }
    output
}
