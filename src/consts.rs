/// Column holding the project identifier; may be blank.
pub(crate) const PROJECT_NUMBER: &str = "Project Number";

/// Column holding the person a plan row belongs to.
pub(crate) const EMPLOYEE_NAME: &str = "Employee Name";

/// Derived composite key column, inserted as the first column.
pub(crate) const UNIQUE_CODE: &str = "Unique Code";

/// Employee Name value marking aggregate/summary rows; never processed.
pub(crate) const AGGREGATE_LABEL: &str = "Labor Cost, Conversion Employee";

/// Display format for date cells: "05-03-2024"
pub(crate) const CELL_DATE_FORMAT: &str = "%d-%m-%Y";

/// Filename stamp format: "05032024"
pub(crate) const STAMP_FORMAT: &str = "%d%m%Y";

/// MIME type of the produced workbooks, surfaced in the JSON summary.
pub(crate) const XLSX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
