//! Comma-separated table reader.
//!
//! Each non-blank line is one row. Leading whitespace of a cell is skipped,
//! and a cell may be double-quoted so it can hold commas; `""` inside quotes
//! is a literal quote.

use std::fs;
use std::path::Path;

use tracing::{debug, instrument};

use crate::error::{TableError, TableResult};

/// One row of a table, with the 1-based line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Line number in the source.
    pub line: usize,
    /// Cell contents in column order.
    pub cells: Vec<String>,
}

impl Row {
    /// Cell at `column`, if present.
    pub fn cell(&self, column: usize) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }
}

/// An ordered sequence of rows read from one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    source: String,
    rows: Vec<Row>,
}

impl Table {
    /// Name of the source the rows came from, used in error messages.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Rows in source order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read a table from a file.
#[instrument]
pub fn read_table(path: &Path) -> TableResult<Table> {
    let text = fs::read_to_string(path).map_err(|source| TableError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let table = parse_table(path.display().to_string(), &text)?;
    debug!("Read {} rows from {}", table.len(), table.source());
    Ok(table)
}

/// Parse table text. `source` names the table in error messages.
pub fn parse_table(source: impl Into<String>, text: &str) -> TableResult<Table> {
    let source = source.into();
    let mut rows = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        if raw.trim().is_empty() {
            continue;
        }
        let cells = split_line(raw).ok_or_else(|| TableError::UnterminatedQuote {
            table: source.clone(),
            line,
        })?;
        rows.push(Row { line, cells });
    }

    Ok(Table { source, rows })
}

/// Split one line into cells, or `None` on an unterminated quote.
fn split_line(line: &str) -> Option<Vec<String>> {
    let mut cells = Vec::new();
    let mut chars = line.trim_end_matches('\r').chars().peekable();

    loop {
        while chars.next_if(|c| *c == ' ' || *c == '\t').is_some() {}

        let mut cell = String::new();
        if chars.next_if_eq(&'"').is_some() {
            loop {
                match chars.next()? {
                    '"' if chars.next_if_eq(&'"').is_some() => cell.push('"'),
                    '"' => break,
                    c => cell.push(c),
                }
            }
        }

        let mut more = false;
        for c in chars.by_ref() {
            if c == ',' {
                more = true;
                break;
            }
            cell.push(c);
        }
        cells.push(cell);

        if !more {
            return Some(cells);
        }
    }
}
