//! Report output generation.
//!
//! Serializes an [`rmap_model::OutputTable`] as CSV prefixed with a UTF-8
//! byte-order mark, which spreadsheet tools use to pick the right encoding.

mod common;
mod report_csv;

pub use common::ensure_parent_dir;
pub use report_csv::{UTF8_BOM, serialize, write_output};
