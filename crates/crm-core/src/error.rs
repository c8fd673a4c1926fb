use std::path::PathBuf;
use thiserror::Error;

/// All errors produced while loading customer data.
#[derive(Error, Debug)]
pub enum CrmError {
    /// The spreadsheet file does not exist.
    #[error("Customer file not found: {0}")]
    FileNotFound(PathBuf),

    /// The workbook exists but could not be opened or decoded.
    #[error("Failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// The workbook contains no worksheet to read from.
    #[error("Workbook has no worksheets: {0}")]
    NoWorksheet(PathBuf),

    /// The first worksheet has no header row.
    #[error("Worksheet has no header row: {0}")]
    MissingHeader(PathBuf),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience alias used throughout the dashboard crates.
pub type Result<T> = std::result::Result<T, CrmError>;
