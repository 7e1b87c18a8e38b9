//! New-record selection against the previous snapshot.

use std::collections::HashSet;

use crate::consts::{EMPLOYEE_NAME, PROJECT_NUMBER, UNIQUE_CODE};
use crate::error::ParseError;
use crate::pipeline::clean::unique_code;
use crate::table::Table;

/// Key set of the previous snapshot.
///
/// An existing Unique Code column is authoritative and used verbatim,
/// duplicates included. Only when it is absent is the key derived the
/// same way the cleaner derives it (blank project numbers read as empty
/// text). Deriving into a set makes the keep-first dedup implicit.
pub(crate) fn previous_key_set(previous: &Table) -> Result<HashSet<String>, ParseError> {
    if let Some(idx) = previous.column_index(UNIQUE_CODE) {
        return Ok(previous.rows().iter().map(|r| r[idx].to_text()).collect());
    }

    let name_idx = previous
        .column_index(EMPLOYEE_NAME)
        .ok_or_else(|| ParseError::MissingColumn {
            column: EMPLOYEE_NAME.to_string(),
        })?;
    let project_idx = previous
        .column_index(PROJECT_NUMBER)
        .ok_or_else(|| ParseError::MissingColumn {
            column: PROJECT_NUMBER.to_string(),
        })?;

    Ok(previous
        .rows()
        .iter()
        .map(|row| unique_code(&row[project_idx].to_text(), &row[name_idx].to_text()))
        .collect())
}

/// Select every cleaned row whose key is absent from the previous key
/// set, preserving cleaned order. An empty result still carries the
/// cleaned table's columns.
pub(crate) fn new_records(
    cleaned: &Table,
    previous_keys: &HashSet<String>,
) -> Result<Table, ParseError> {
    let code_idx = cleaned
        .column_index(UNIQUE_CODE)
        .ok_or_else(|| ParseError::MissingColumn {
            column: UNIQUE_CODE.to_string(),
        })?;

    let mut out = Table::new(cleaned.columns().to_vec());
    for row in cleaned.rows() {
        if !previous_keys.contains(&row[code_idx].to_text()) {
            out.push_row(row.clone());
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Value;

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    fn keyed_table(codes: &[&str]) -> Table {
        let mut t = Table::new(vec![UNIQUE_CODE.to_string(), "Hours".to_string()]);
        for code in codes {
            t.push_row(vec![text(code), Value::Number(1.0)]);
        }
        t
    }

    #[test]
    fn existing_key_column_is_trusted_verbatim() {
        // Duplicate keys stay duplicated: no dedup is applied to the
        // previous table when it already carries the key column.
        let previous = keyed_table(&["P1 - Alice", "P1 - Alice", "P2 - Bob"]);
        let keys = previous_key_set(&previous).unwrap();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains("P1 - Alice"));
        assert!(keys.contains("P2 - Bob"));
    }

    #[test]
    fn existing_key_column_wins_over_name_columns() {
        let mut previous = Table::new(vec![
            UNIQUE_CODE.to_string(),
            PROJECT_NUMBER.to_string(),
            EMPLOYEE_NAME.to_string(),
        ]);
        previous.push_row(vec![text("stale-key"), text("P1"), text("Alice")]);
        let keys = previous_key_set(&previous).unwrap();
        assert!(keys.contains("stale-key"));
        assert!(!keys.contains("P1 - Alice"));
    }

    #[test]
    fn derives_keys_when_column_absent() {
        let mut previous = Table::new(vec![
            PROJECT_NUMBER.to_string(),
            EMPLOYEE_NAME.to_string(),
        ]);
        previous.push_row(vec![text("P1"), text("Alice")]);
        previous.push_row(vec![Value::Empty, text("Bob")]);
        let keys = previous_key_set(&previous).unwrap();
        assert!(keys.contains("P1 - Alice"));
        assert!(keys.contains(" - Bob"));
    }

    #[test]
    fn derive_without_name_column_is_an_error() {
        let previous = Table::new(vec![PROJECT_NUMBER.to_string()]);
        let err = previous_key_set(&previous).unwrap_err();
        assert!(err.to_string().contains(EMPLOYEE_NAME));
    }

    #[test]
    fn new_records_preserves_cleaned_order() {
        let cleaned = keyed_table(&["A", "B", "C", "D"]);
        let previous: HashSet<String> = ["B".to_string(), "D".to_string()].into();
        let new = new_records(&cleaned, &previous).unwrap();
        let codes: Vec<String> = new.rows().iter().map(|r| r[0].to_text()).collect();
        assert_eq!(codes, vec!["A", "C"]);
    }

    #[test]
    fn no_new_records_is_empty_but_well_formed() {
        let cleaned = keyed_table(&["A", "B"]);
        let previous: HashSet<String> = ["A".to_string(), "B".to_string()].into();
        let new = new_records(&cleaned, &previous).unwrap();
        assert_eq!(new.row_count(), 0);
        assert_eq!(new.columns(), cleaned.columns());
    }
}
