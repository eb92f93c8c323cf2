//! Row-oriented view of a merged theme.
//!
//! [`to_table`] projects a [`MergedMap`] into a [`Table`] with one row per
//! color key. The table can be rendered as aligned plain text for console
//! previews or exported as CSV.

use serde_json::Value;
use tracing::debug;
use unicode_width::UnicodeWidthStr;

use vstheme_shared::{MergedMap, Result, VsthemeError};

/// Name of the leading column holding the color key.
pub const KEY_COLUMN: &str = "key";

/// Widest cell, in terminal columns, rendered by [`Table::render`] before truncation.
const MAX_CELL_WIDTH: usize = 60;

/// One table row: the key plus one cell per non-key column.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub key: String,
    pub cells: Vec<Value>,
}

/// An ordered table with a leading `key` column.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Column names, `key` first.
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
    /// Row count before any [`Table::head`] truncation.
    pub total_rows: usize,
}

/// Project a merged theme into a table, one row per key in map order.
pub fn to_table(merged: &MergedMap) -> Table {
    let table = Table::from_records(
        merged
            .iter()
            .map(|(key, record)| (key.as_str(), record.fields())),
    );
    debug!(rows = table.rows.len(), columns = table.columns.len(), "projected table");
    table
}

impl Table {
    /// Build a table from `(key, fields)` records.
    ///
    /// Columns are the union of all field names in first-seen order; a record
    /// lacking a field gets `null` in that column.
    pub fn from_records<'a, I, F, N>(records: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, F)>,
        F: IntoIterator<Item = (N, Value)>,
        N: Into<String>,
    {
        let mut fields: Vec<String> = Vec::new();
        let mut collected: Vec<(String, Vec<(String, Value)>)> = Vec::new();

        for (key, record) in records {
            let record: Vec<(String, Value)> =
                record.into_iter().map(|(name, value)| (name.into(), value)).collect();
            for (name, _) in &record {
                if !fields.contains(name) {
                    fields.push(name.clone());
                }
            }
            collected.push((key.to_string(), record));
        }

        let rows: Vec<Row> = collected
            .into_iter()
            .map(|(key, mut record)| {
                let cells = fields
                    .iter()
                    .map(|field| {
                        record
                            .iter()
                            .position(|(name, _)| name == field)
                            .map_or(Value::Null, |i| record.swap_remove(i).1)
                    })
                    .collect();
                Row { key, cells }
            })
            .collect();

        let mut columns = Vec::with_capacity(fields.len() + 1);
        columns.push(KEY_COLUMN.to_string());
        columns.extend(fields);

        Self {
            columns,
            total_rows: rows.len(),
            rows,
        }
    }

    /// Keep only the first `n` rows.
    pub fn head(mut self, n: usize) -> Self {
        self.rows.truncate(n);
        self
    }

    /// Look up a cell by row key and column name.
    pub fn cell(&self, key: &str, column: &str) -> Option<&Value> {
        let index = self.columns.iter().skip(1).position(|c| c == column)?;
        self.rows.iter().find(|row| row.key == key)?.cells.get(index)
    }

    /// Render as left-aligned plain text with a header line.
    ///
    /// Columns are aligned by terminal display width, so wide (e.g. CJK)
    /// characters count as two columns.
    ///
    /// Strings are shown without quotes, nulls as `None`, other values as
    /// compact JSON. A shape footer is appended when rows were elided.
    pub fn render(&self) -> String {
        let grid: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                std::iter::once(truncate(&row.key))
                    .chain(row.cells.iter().map(|cell| truncate(&display_cell(cell))))
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                grid.iter()
                    .map(|line| line[i].width())
                    .chain(std::iter::once(column.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        push_line(&mut out, &self.columns, &widths);
        for line in &grid {
            push_line(&mut out, line, &widths);
        }

        if self.rows.len() < self.total_rows {
            out.push_str(&format!(
                "\n[{} rows x {} columns]\n",
                self.total_rows,
                self.columns.len()
            ));
        }

        out
    }

    /// Export as CSV (RFC 4180). Nulls become empty cells.
    pub fn to_csv(&self) -> Result<String> {
        let mut wtr = csv::Writer::from_writer(Vec::new());

        wtr.write_record(&self.columns).map_err(VsthemeError::csv)?;
        for row in &self.rows {
            let record = std::iter::once(row.key.clone()).chain(row.cells.iter().map(csv_cell));
            wtr.write_record(record).map_err(VsthemeError::csv)?;
        }

        let bytes = wtr.into_inner().map_err(VsthemeError::csv)?;
        String::from_utf8(bytes).map_err(VsthemeError::csv)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn display_cell(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn csv_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Cut `text` to at most [`MAX_CELL_WIDTH`] display columns, ending in `…`.
fn truncate(text: &str) -> String {
    use unicode_width::UnicodeWidthChar;

    if text.width() <= MAX_CELL_WIDTH {
        return text.to_string();
    }

    let limit = MAX_CELL_WIDTH.saturating_sub(1);
    let mut kept = String::new();
    let mut current = 0;
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if current + char_width > limit {
            break;
        }
        kept.push(c);
        current += char_width;
    }
    kept.push('…');
    kept
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.width());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
