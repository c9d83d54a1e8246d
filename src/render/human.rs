//! Human-readable output using `colored`.
//!
//! Colors are applied per fragment so `no_color` output is plain text with
//! the same layout.

use colored::{ColoredString, Colorize};

use crate::core::aggregator::ActivityQuery;
use crate::core::models::{ActivityRow, BookChange, Entry, Relation};
use crate::util::{format_sem, format_timestamp_ms};

/// Label shown instead of a counterparty for internal transfers.
pub const INTERNAL_TRANSFER: &str = "Internal transfer";

fn paint(text: &str, no_color: bool, style: impl Fn(&str) -> ColoredString) -> String {
    if no_color {
        text.to_string()
    } else {
        style(text).to_string()
    }
}

fn relation_style(relation: Relation) -> impl Fn(&str) -> ColoredString {
    move |s: &str| match relation {
        Relation::Inbound => s.green(),
        Relation::Outbound => s.red(),
        Relation::Cycle => s.cyan(),
    }
}

/// Render all entries as an aligned two-column list.
#[must_use]
pub fn render_entries(entries: &[Entry], no_color: bool) -> String {
    if entries.is_empty() {
        return format!("{}\n", paint("Address book is empty", no_color, |s| s.dimmed()));
    }

    let width = entries.iter().map(|e| e.name.chars().count()).max().unwrap_or(0);
    let noun = if entries.len() == 1 { "entry" } else { "entries" };
    let mut output = format!(
        "{}\n",
        paint(
            &format!("Address book ({} {noun})", entries.len()),
            no_color,
            |s| s.bold()
        )
    );

    for entry in entries {
        let name = format!("{:<width$}", entry.name);
        output.push_str(&format!(
            "  {}  {}\n",
            paint(&name, no_color, |s| s.bold()),
            entry.address
        ));
    }
    output
}

/// Render one entry.
#[must_use]
pub fn render_entry(entry: &Entry, no_color: bool) -> String {
    format!(
        "{}  {}\n",
        paint(&entry.name, no_color, |s| s.bold()),
        entry.address
    )
}

/// Render the outcome of a mutating book command.
#[must_use]
pub fn render_book_change(change: &BookChange, no_color: bool) -> String {
    let name = change.entry.as_ref().map_or("", |e| e.name.as_str());
    let line = match (change.action.as_str(), change.changed) {
        ("put", _) => {
            let address = change.entry.as_ref().map_or("", |e| e.address.as_str());
            format!("Saved {} -> {address}", paint(name, no_color, |s| s.bold()))
        }
        ("remove", true) => format!("Removed {}", paint(name, no_color, |s| s.bold())),
        ("remove", false) => format!("No entry named '{name}', nothing removed"),
        ("clear", _) => "Cleared address book".to_string(),
        (action, _) => format!("{action}: done"),
    };
    let status = if change.changed {
        paint("✓", no_color, |s| s.green())
    } else {
        paint("-", no_color, |s| s.dimmed())
    };
    format!("{status} {line}\n")
}

/// Text shown for the other side of a row: the address book names if any,
/// else the hex address. Internal transfers get a fixed label.
#[must_use]
pub fn counterparty_label(row: &ActivityRow) -> String {
    match &row.counterparty {
        None => INTERNAL_TRANSFER.to_string(),
        Some(address) if row.counterparty_names.is_empty() => address.to_string(),
        Some(address) => format!("{} ({address})", row.counterparty_names.join(", ")),
    }
}

/// Render activity rows, newest first.
#[must_use]
pub fn render_activity(rows: &[ActivityRow], query: &ActivityQuery, no_color: bool) -> String {
    if rows.is_empty() {
        return format!(
            "{}\n",
            paint(
                &format!("No recent {} transactions", query.type_filter),
                no_color,
                |s| s.dimmed()
            )
        );
    }

    let mut output = format!(
        "{}\n",
        paint(
            &format!("Recent {} transactions ({})", query.type_filter, rows.len()),
            no_color,
            |s| s.bold()
        )
    );

    let amounts: Vec<String> = rows
        .iter()
        .map(|row| format_sem(row.value, row.relation.sign_prefix()))
        .collect();
    let amount_width = amounts.iter().map(String::len).max().unwrap_or(0);

    for (row, amount) in rows.iter().zip(&amounts) {
        let style = relation_style(row.relation);
        let label = format!("{:<8}", row.relation.label());
        let amount = format!("{amount:>amount_width$}");
        output.push_str(&format!(
            "  {}  {}  {}  {}\n",
            paint(&label, no_color, &style),
            format_timestamp_ms(row.timestamp),
            paint(&amount, no_color, &style),
            counterparty_label(row)
        ));
    }
    output
}
