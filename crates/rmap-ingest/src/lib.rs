//! Audit export ingestion.
//!
//! Loads a CSV export (UTF-8, header row required) into an
//! [`rmap_model::InputTable`] where every value is a string.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use rmap_ingest::{load, load_file};
//!
//! let table = load_file(Path::new("audits_basic_data_export.csv"))?;
//! let same = load(&std::fs::read("audits_basic_data_export.csv")?)?;
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use self::csv::{
    MAX_INPUT_FILE_SIZE, check_file_size, check_file_size_with_limit, is_blank_header, load,
    load_file, normalize_headers, validate_encoding,
};
