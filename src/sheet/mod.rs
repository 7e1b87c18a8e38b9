//! Workbook I/O: calamine on the way in, rust_xlsxwriter on the way out.

mod read;
mod write;

pub(crate) use read::{read_latest, read_previous};
pub(crate) use write::{cleaned_filename, new_records_filename, table_to_xlsx};
