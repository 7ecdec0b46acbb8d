//! Error types for roster and history ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading exchange CSV files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// The CSV reader rejected the input.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// The roster file has no participant rows.
    #[error("roster has no participants: {path}")]
    EmptyRoster { path: PathBuf },

    /// A roster row before the end of the file lacks a required column.
    #[error("row on line {line} of {path} is missing '{field}'")]
    IncompleteRow {
        path: PathBuf,
        line: u64,
        field: &'static str,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/roster.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/roster.csv");

        let err = IngestError::IncompleteRow {
            path: PathBuf::from("roster.csv"),
            line: 4,
            field: "email",
        };
        assert_eq!(err.to_string(), "row on line 4 of roster.csv is missing 'email'");

        let err = IngestError::EmptyRoster {
            path: PathBuf::from("roster.csv"),
        };
        assert_eq!(err.to_string(), "roster has no participants: roster.csv");
    }
}
