//! Date-column normalization applied to both output tables.
//!
//! Every column whose name contains "date" (any case) is rewritten to
//! DD-MM-YYYY text. Conversion is atomic per column: cells are converted
//! into a scratch column first, and a candidate column in which nothing
//! parses is left exactly as loaded.

use chrono::{NaiveDate, NaiveDateTime};

use crate::consts::CELL_DATE_FORMAT;
use crate::table::{Table, Value};

const DATE_LAYOUTS: &[&str] = &["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%Y/%m/%d"];
const DATETIME_LAYOUTS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

fn parse_text_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    for layout in DATE_LAYOUTS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, layout) {
            return Some(date);
        }
    }
    for layout in DATETIME_LAYOUTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, layout) {
            return Some(dt.date());
        }
    }
    None
}

/// Native datetime cells convert directly; text cells go through the
/// layout list. Everything else (numbers, booleans) is unparsable: typed
/// date cells already arrive as `DateTime` from the workbook, so a bare
/// number in a date column is unrelated data.
fn convert_cell(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::DateTime(dt) => Some(dt.date()),
        Value::Text(s) => parse_text_date(s),
        _ => None,
    }
}

fn is_date_column(name: &str) -> bool {
    name.to_lowercase().contains("date")
}

pub(crate) fn reformat_date_columns(table: &mut Table) {
    let candidates: Vec<usize> = table
        .columns()
        .iter()
        .enumerate()
        .filter(|(_, name)| is_date_column(name))
        .map(|(idx, _)| idx)
        .collect();

    for idx in candidates {
        let mut scratch = Vec::with_capacity(table.row_count());
        let mut parsed = 0usize;
        let mut non_empty = 0usize;
        for row in table.rows() {
            let cell = &row[idx];
            if !cell.is_empty() {
                non_empty += 1;
            }
            match convert_cell(cell) {
                Some(date) => {
                    parsed += 1;
                    scratch.push(Value::Text(date.format(CELL_DATE_FORMAT).to_string()));
                }
                None => scratch.push(Value::Empty),
            }
        }
        // A "date"-named column of unrelated data: keep the original.
        if parsed == 0 && non_empty > 0 {
            continue;
        }
        table.set_column(idx, scratch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    fn single_column(name: &str, values: Vec<Value>) -> Table {
        let mut t = Table::new(vec![name.to_string()]);
        for v in values {
            t.push_row(vec![v]);
        }
        t
    }

    fn column(table: &Table, idx: usize) -> Vec<Value> {
        table.rows().iter().map(|r| r[idx].clone()).collect()
    }

    #[test]
    fn parses_common_text_layouts() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(parse_text_date("2024-03-05"), Some(expected));
        assert_eq!(parse_text_date("05-03-2024"), Some(expected));
        assert_eq!(parse_text_date("05/03/2024"), Some(expected));
        assert_eq!(parse_text_date("2024-03-05 14:30:00"), Some(expected));
        assert_eq!(parse_text_date(" 2024-03-05 "), Some(expected));
        assert_eq!(parse_text_date("N/A"), None);
    }

    #[test]
    fn start_date_column_reformats_with_missing_marker() {
        let mut t = single_column("Start Date", vec![text("2024-03-05"), text("N/A")]);
        reformat_date_columns(&mut t);
        assert_eq!(column(&t, 0), vec![text("05-03-2024"), Value::Empty]);
    }

    #[test]
    fn native_datetime_cells_reformat() {
        let dt = NaiveDate::from_ymd_opt(2024, 12, 1)
            .unwrap()
            .and_hms_opt(8, 15, 0)
            .unwrap();
        let mut t = single_column("End date", vec![Value::DateTime(dt)]);
        reformat_date_columns(&mut t);
        assert_eq!(column(&t, 0), vec![text("01-12-2024")]);
    }

    #[test]
    fn column_name_match_is_case_insensitive() {
        let mut t = single_column("UPDATE DATE", vec![text("2024-01-02")]);
        reformat_date_columns(&mut t);
        assert_eq!(column(&t, 0), vec![text("02-01-2024")]);
    }

    #[test]
    fn non_date_named_column_is_never_touched() {
        let mut t = single_column("Notes", vec![text("2024-03-05"), text("N/A")]);
        reformat_date_columns(&mut t);
        assert_eq!(column(&t, 0), vec![text("2024-03-05"), text("N/A")]);
    }

    #[test]
    fn unparsable_date_named_column_is_left_untouched() {
        // "Mandate" matches the substring but holds plain numbers; the
        // whole column must stay as loaded, not half-converted.
        let mut t = single_column(
            "Mandate",
            vec![Value::Number(12.0), Value::Number(34.0), Value::Empty],
        );
        reformat_date_columns(&mut t);
        assert_eq!(
            column(&t, 0),
            vec![Value::Number(12.0), Value::Number(34.0), Value::Empty]
        );
    }

    #[test]
    fn partially_parsable_column_converts_with_missing_markers() {
        let mut t = single_column(
            "Due Date",
            vec![text("garbage"), text("2025-06-30"), Value::Number(7.0)],
        );
        reformat_date_columns(&mut t);
        assert_eq!(
            column(&t, 0),
            vec![Value::Empty, text("30-06-2025"), Value::Empty]
        );
    }

    #[test]
    fn all_empty_date_column_stays_empty() {
        let mut t = single_column("Start Date", vec![Value::Empty, Value::Empty]);
        reformat_date_columns(&mut t);
        assert_eq!(column(&t, 0), vec![Value::Empty, Value::Empty]);
    }

    #[test]
    fn only_matching_columns_are_converted() {
        let mut t = Table::new(vec!["Start Date".to_string(), "Notes".to_string()]);
        t.push_row(vec![text("2024-03-05"), text("2024-03-05")]);
        reformat_date_columns(&mut t);
        assert_eq!(t.rows()[0][0], text("05-03-2024"));
        assert_eq!(t.rows()[0][1], text("2024-03-05"));
    }
}
