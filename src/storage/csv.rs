//! Delimited-text codec for the directory file.
//!
//! Comma separated, double-quote escaped. Quoted cells may contain commas,
//! doubled quotes and line breaks. Blank lines are skipped.

use crate::error::{Result, RosterError};

/// A parsed row and the 1-based line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub line: usize,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// At the start of a cell
    Start,
    /// Inside a bare cell
    Unquoted,
    /// Inside a quoted cell
    Quoted,
    /// Just past the closing quote of a quoted cell
    QuoteClosed,
}

/// Parse the whole file into rows.
pub fn parse(text: &str) -> Result<Vec<Row>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut rows = Vec::new();
    let mut cells: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut state = State::Start;
    let mut line = 1;
    let mut row_line = 1;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if state == State::Quoted {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    cell.push('"');
                }
                '"' => state = State::QuoteClosed,
                '\n' => {
                    line += 1;
                    cell.push(c);
                }
                _ => cell.push(c),
            }
            continue;
        }

        match c {
            '"' if state == State::Start => state = State::Quoted,
            ',' => {
                cells.push(std::mem::take(&mut cell));
                state = State::Start;
            }
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                finish_row(&mut rows, &mut cells, &mut cell, state, row_line);
                state = State::Start;
                line += 1;
                row_line = line;
            }
            _ if state == State::QuoteClosed => {
                return Err(RosterError::Malformed {
                    line,
                    reason: format!("unexpected '{}' after closing quote", c),
                });
            }
            _ => {
                cell.push(c);
                state = State::Unquoted;
            }
        }
    }

    if state == State::Quoted {
        return Err(RosterError::Malformed {
            line: row_line,
            reason: "unterminated quoted field".to_string(),
        });
    }
    finish_row(&mut rows, &mut cells, &mut cell, state, row_line);

    Ok(rows)
}

fn finish_row(rows: &mut Vec<Row>, cells: &mut Vec<String>, cell: &mut String, state: State, line: usize) {
    let blank = cells.is_empty() && cell.is_empty() && state == State::Start;
    if blank {
        return;
    }
    cells.push(std::mem::take(cell));
    rows.push(Row {
        line,
        cells: std::mem::take(cells),
    });
}

/// Encode a single cell, quoting it only when needed.
pub fn encode_cell(value: &str) -> String {
    if value.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Encode a row as one line, without the trailing newline.
pub fn encode_row<S: AsRef<str>>(cells: &[S]) -> String {
    cells
        .iter()
        .map(|c| encode_cell(c.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}
