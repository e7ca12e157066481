//! Console rendering for the shell: banner, menu, message lines and the
//! record table.

use colored::*;
use std::io::{self, Write};

use crate::domain::{Field, Locale, Record};

/// Menu entries in display order.
pub const MENU: [(&str, &str); 4] = [
    ("1", "Create record"),
    ("2", "List records"),
    ("3", "Update record"),
    ("4", "Exit"),
];

pub fn banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{} {} {}", "ROSTER".bold(), "•".dimmed(), "Directory".dimmed())?;
    writeln!(out)
}

pub fn menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "Main menu".bold())?;
    for (key, label) in MENU {
        writeln!(out, "  {} {}", key.cyan().bold(), format!("• {}", label).dimmed())?;
    }
    writeln!(out)
}

pub fn success<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "✓".green().bold(), message)
}

pub fn error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "✗".red(), message)
}

pub fn notice<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "•".yellow(), message.dimmed())
}

/// Cell text as shown on screen; line breaks are flattened.
fn display_cell(value: &str) -> String {
    value.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Render the records as an aligned table with a leading `#` index column.
pub fn table<W: Write>(out: &mut W, records: &[Record], locale: Locale) -> io::Result<()> {
    if records.is_empty() {
        return notice(out, "No records available");
    }

    let mut headers = vec!["#".to_string()];
    headers.extend(Field::ALL.iter().map(|f| f.label(locale).to_string()));

    let rows: Vec<Vec<String>> = records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let mut row = vec![i.to_string()];
            row.extend(Field::ALL.iter().map(|f| display_cell(&r.get(*f))));
            row
        })
        .collect();

    let widths: Vec<usize> = (0..headers.len())
        .map(|col| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(headers[col].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad(h, *w))
        .collect::<Vec<_>>()
        .join(" │ ");
    writeln!(out, "{}", header_line.bold())?;

    let rule = widths
        .iter()
        .map(|w| "─".repeat(*w))
        .collect::<Vec<_>>()
        .join("─┼─");
    writeln!(out, "{}", rule.dimmed())?;

    for row in &rows {
        let mut cells = row.iter().zip(&widths).map(|(c, w)| pad(c, *w));
        let index = cells.next().unwrap_or_default();
        let rest = cells.collect::<Vec<_>>().join(" │ ");
        writeln!(out, "{} │ {}", index.cyan(), rest)?;
    }

    writeln!(out, "{}", format!("{} record(s)", records.len()).dimmed())
}

/// Left-align `s` to `width` display characters.
fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    format!("{}{}", s, " ".repeat(width.saturating_sub(len)))
}
