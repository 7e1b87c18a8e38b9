//! Workbook serialization and output filenames.

use chrono::NaiveDate;
use rust_xlsxwriter::Workbook;

use crate::consts::STAMP_FORMAT;
use crate::error::WriteError;
use crate::table::{Table, Value};

/// Encode a table as xlsx bytes: header row of column names, then one
/// row per record in table order, no index column.
pub(crate) fn table_to_xlsx(table: &Table) -> Result<Vec<u8>, WriteError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, name) in table.columns().iter().enumerate() {
        worksheet.write_string(0, col as u16, name)?;
    }
    for (r, row) in table.rows().iter().enumerate() {
        let r = (r + 1) as u32;
        for (c, value) in row.iter().enumerate() {
            let c = c as u16;
            match value {
                Value::Empty => {}
                Value::Text(s) => {
                    worksheet.write_string(r, c, s)?;
                }
                Value::Number(n) => {
                    worksheet.write_number(r, c, *n)?;
                }
                Value::Bool(b) => {
                    worksheet.write_boolean(r, c, *b)?;
                }
                Value::DateTime(dt) => {
                    worksheet.write_string(r, c, dt.format("%Y-%m-%d %H:%M:%S").to_string())?;
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

pub(crate) fn cleaned_filename(stamp: NaiveDate) -> String {
    format!(
        "Project Plan Analysis-continuous-{}.xlsx",
        stamp.format(STAMP_FORMAT)
    )
}

pub(crate) fn new_records_filename(stamp: NaiveDate) -> String {
    format!("NEW PFP-{}.xlsx", stamp.format(STAMP_FORMAT))
}
