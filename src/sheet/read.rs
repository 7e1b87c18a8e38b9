//! Workbook loading.
//!
//! Reads the first worksheet of an xlsx file into a [`Table`], first row
//! as the header. The two identifying columns are coerced to text so
//! values like numeric project codes survive loading unchanged.

use std::path::Path;

use calamine::{Data, DataType, Reader, open_workbook_auto};

use crate::consts::{EMPLOYEE_NAME, PROJECT_NUMBER, UNIQUE_CODE};
use crate::error::ParseError;
use crate::table::{Table, Value};

/// Columns parsed as text regardless of their cell types.
const TEXT_COLUMNS: &[&str] = &[PROJECT_NUMBER, EMPLOYEE_NAME];

fn map_cell(cell: &Data, as_text: bool) -> Value {
    let value = match cell {
        Data::Empty => Value::Empty,
        Data::String(s) => Value::Text(s.clone()),
        Data::Float(f) => Value::Number(*f),
        Data::Int(i) => Value::Number(*i as f64),
        Data::Bool(b) => Value::Bool(*b),
        Data::DateTime(_) | Data::DateTimeIso(_) => match cell.as_datetime() {
            Some(dt) => Value::DateTime(dt),
            None => Value::Empty,
        },
        Data::DurationIso(s) => Value::Text(s.clone()),
        Data::Error(e) => Value::Text(e.to_string()),
    };
    if as_text && !value.is_empty() {
        Value::Text(value.to_text())
    } else {
        value
    }
}

pub(crate) fn read_table(path: &Path) -> Result<Table, ParseError> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(ParseError::NoSheets)?;
    let range = workbook.worksheet_range(&sheet)?;

    let mut rows = range.rows();
    let header = rows.next().ok_or_else(|| ParseError::EmptySheet {
        sheet: sheet.clone(),
    })?;
    let columns: Vec<String> = header.iter().map(|cell| cell.to_string()).collect();
    let text_indices: Vec<usize> = columns
        .iter()
        .enumerate()
        .filter(|(_, name)| TEXT_COLUMNS.contains(&name.as_str()))
        .map(|(idx, _)| idx)
        .collect();

    let mut table = Table::new(columns);
    for row in rows {
        let values = row
            .iter()
            .enumerate()
            .map(|(idx, cell)| map_cell(cell, text_indices.contains(&idx)))
            .collect();
        table.push_row(values);
    }
    Ok(table)
}

fn require_columns(table: &Table, required: &[&str]) -> Result<(), ParseError> {
    for name in required {
        if !table.has_column(name) {
            return Err(ParseError::MissingColumn {
                column: (*name).to_string(),
            });
        }
    }
    Ok(())
}

/// Load the latest snapshot; both identifying columns are required.
pub(crate) fn read_latest(path: &Path) -> Result<Table, ParseError> {
    let table = read_table(path)?;
    require_columns(&table, TEXT_COLUMNS)?;
    Ok(table)
}

/// Load the previous snapshot. A file that already carries the Unique
/// Code column needs nothing else; otherwise the identifying columns
/// must be present so the key can be derived.
pub(crate) fn read_previous(path: &Path) -> Result<Table, ParseError> {
    let table = read_table(path)?;
    if !table.has_column(UNIQUE_CODE) {
        require_columns(&table, TEXT_COLUMNS)?;
    }
    Ok(table)
}
