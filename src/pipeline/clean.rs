//! Latest-snapshot cleanup
//!
//! Trims employee names, drops blank and aggregate rows, derives the
//! Unique Code key and removes duplicate keys keeping the first
//! occurrence.

use std::collections::HashSet;

use crate::consts::{AGGREGATE_LABEL, EMPLOYEE_NAME, PROJECT_NUMBER, UNIQUE_CODE};
use crate::error::ParseError;
use crate::table::{Table, Value};

/// Per-stage row counts reported to the host layer.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct CleanCounts {
    /// Rows in the latest snapshot before cleaning.
    pub(crate) total: usize,
    /// Rows dropped for a blank or aggregate employee name.
    pub(crate) dropped: usize,
    /// Later rows discarded because their key was already seen.
    pub(crate) deduped: usize,
}

pub(crate) fn unique_code(project_number: &str, employee_name: &str) -> String {
    format!("{project_number} - {employee_name}")
}

fn missing(column: &str) -> ParseError {
    ParseError::MissingColumn {
        column: column.to_string(),
    }
}

/// Clean the latest snapshot.
///
/// Guarantees on the output: every employee name is non-empty, trimmed
/// and not the aggregate label; the Unique Code column exists and its
/// values are pairwise distinct. Idempotent: cleaning a cleaned table
/// yields an identical table.
pub(crate) fn clean_latest(table: &Table) -> Result<(Table, CleanCounts), ParseError> {
    let name_idx = table
        .column_index(EMPLOYEE_NAME)
        .ok_or_else(|| missing(EMPLOYEE_NAME))?;
    let project_idx = table
        .column_index(PROJECT_NUMBER)
        .ok_or_else(|| missing(PROJECT_NUMBER))?;
    let existing_code_idx = table.column_index(UNIQUE_CODE);

    let mut counts = CleanCounts {
        total: table.row_count(),
        ..CleanCounts::default()
    };
    let mut out = Table::new(table.columns().to_vec());
    let mut codes: Vec<Value> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for row in table.rows() {
        let name = row[name_idx].to_text().trim().to_string();
        if name.is_empty() || name == AGGREGATE_LABEL {
            counts.dropped += 1;
            continue;
        }

        let mut row = row.clone();
        row[name_idx] = Value::Text(name.clone());
        let project = row[project_idx].to_text();
        row[project_idx] = Value::Text(project.clone());

        let code = unique_code(&project, &name);
        if !seen.insert(code.clone()) {
            counts.deduped += 1;
            continue;
        }
        codes.push(Value::Text(code));
        out.push_row(row);
    }

    // A table that already carries the key column (a re-run over cleaned
    // output) gets it overwritten in place instead of a second copy.
    match existing_code_idx {
        Some(idx) => out.set_column(idx, codes),
        None => out.insert_column_front(UNIQUE_CODE, codes),
    }

    Ok((out, counts))
}
