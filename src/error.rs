use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("{path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ParseError,
    },

    #[error("{0}")]
    Process(#[from] ParseError),

    #[error("{0}")]
    Write(#[from] WriteError),

    #[error("Failed to write {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub(crate) enum ParseError {
    #[error("not a readable workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("workbook has no sheets")]
    NoSheets,

    #[error("sheet \"{sheet}\" has no header row")]
    EmptySheet { sheet: String },

    #[error("required column \"{column}\" is missing")]
    MissingColumn { column: String },
}

#[derive(Debug, Error)]
pub(crate) enum WriteError {
    #[error("xlsx encode failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
