//! Error types for audit export ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an export.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("file too large: {path} is {size} bytes (limit {max_size})")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === CSV Parsing Errors ===
    /// Content is not valid delimited text.
    #[error("failed to parse CSV at line {line}: {message}")]
    Parse { line: u64, message: String },

    /// Content is not UTF-8.
    #[error("invalid UTF-8 at line {line}")]
    InvalidUtf8 { line: u64 },

    /// Byte-order mark for an encoding other than UTF-8.
    #[error("unsupported encoding: {encoding} (expected UTF-8)")]
    UnsupportedEncoding { encoding: &'static str },

    /// No bytes or only blank lines.
    #[error("CSV input is empty")]
    EmptyInput,

    /// Header row exists but has no usable column names.
    #[error("could not detect header row")]
    NoHeaderDetected,
}

impl IngestError {
    /// True for failures of the content itself, as opposed to file access.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            IngestError::Parse { .. }
                | IngestError::InvalidUtf8 { .. }
                | IngestError::UnsupportedEncoding { .. }
                | IngestError::EmptyInput
                | IngestError::NoHeaderDetected
        )
    }
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map_or(0, csv::Position::line);
        match err.kind() {
            csv::ErrorKind::Utf8 { .. } => Self::InvalidUtf8 { line },
            _ => Self::Parse {
                line,
                message: err.to_string(),
            },
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/file.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/file.csv");
    }

    #[test]
    fn test_parse_classification() {
        assert!(IngestError::EmptyInput.is_parse_error());
        assert!(
            IngestError::Parse {
                line: 2,
                message: "bad".to_string()
            }
            .is_parse_error()
        );
        assert!(
            !IngestError::FileNotFound {
                path: PathBuf::from("x.csv")
            }
            .is_parse_error()
        );
    }
}
