use hrm_core::ValidationErrors;
use thiserror::Error;

/// Errors that can occur when loading fixture data.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    /// `row` is 1-based; the header is row 0.
    #[error("unrecognised employee status '{status}' on row {row}")]
    InvalidStatus { status: String, row: usize },

    #[error("invalid payroll record on row {row}: {errors}")]
    InvalidRow {
        row: usize,
        errors: ValidationErrors,
    },

    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<csv::Error> for LoaderError {
    fn from(err: csv::Error) -> Self {
        LoaderError::CsvParse(err.to_string())
    }
}

/// Errors that can occur when writing the payroll sheet.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
