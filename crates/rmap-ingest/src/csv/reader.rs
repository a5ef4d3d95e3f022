//! Export loading: raw bytes or a file path into an [`InputTable`].

use std::path::Path;

use csv::ReaderBuilder;
use rmap_model::{InputTable, Record};
use tracing::debug;

use crate::error::{IngestError, Result};

use super::header::{is_blank_header, normalize_headers};

/// Maximum file size for export loading (500 MB default).
pub const MAX_INPUT_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_INPUT_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| file_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Reject byte-order marks of encodings other than UTF-8.
///
/// A UTF-8 BOM is fine; it is dropped from the first header cell.
pub fn validate_encoding(bytes: &[u8]) -> Result<()> {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(IngestError::UnsupportedEncoding {
            encoding: "UTF-16 LE",
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(IngestError::UnsupportedEncoding {
            encoding: "UTF-16 BE",
        });
    }
    Ok(())
}

/// Parse CSV bytes with a header row into a table of strings.
///
/// Short rows are padded with empty cells; a row with more cells than the
/// header is a parse error. Blank lines are skipped. Values are kept as-is
/// (no trimming); empty cells read as the empty string.
pub fn load(bytes: &[u8]) -> Result<InputTable> {
    validate_encoding(bytes)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let raw_headers = reader.headers()?.clone();
    if raw_headers.is_empty() {
        return Err(IngestError::EmptyInput);
    }
    if is_blank_header(raw_headers.iter()) {
        return Err(IngestError::NoHeaderDetected);
    }
    let headers = normalize_headers(raw_headers.iter());
    let width = headers.len();
    debug!(columns = width, "header parsed");

    let mut table = InputTable::new(headers);
    for result in reader.records() {
        let record = result?;
        if record.len() > width {
            let line = record.position().map_or(0, csv::Position::line);
            return Err(IngestError::Parse {
                line,
                message: format!("expected {width} fields, saw {}", record.len()),
            });
        }
        let mut row = Record::new();
        for (idx, column) in table.headers.iter().enumerate() {
            row.set(column.as_str(), record.get(idx).unwrap_or(""));
        }
        table.push_row(row);
    }

    debug!(rows = table.row_count(), columns = width, "records parsed");
    Ok(table)
}

/// Read an export from disk and parse it with [`load`].
pub fn load_file(path: &Path) -> Result<InputTable> {
    check_file_size(path)?;
    let bytes = std::fs::read(path).map_err(|e| file_error(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "export read");
    load(&bytes)
}

fn file_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}
