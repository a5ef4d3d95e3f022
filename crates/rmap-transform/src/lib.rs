//! Audit report transformation.
//!
//! - **rows**: exclusion filter and stable result ordering
//! - **datetime**: day-first visit date and hour:minute time parsing
//! - **normalize**: date/time rewriting and month derivation
//! - **project**: field resolution and projection into the report schema
//! - **pipeline**: the whole transform with a run report

pub mod datetime;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod project;
pub mod rows;

pub use error::{Result, TransformError};
pub use normalize::{NormalizationReport, normalize_date_time};
pub use pipeline::{
    TransformOptions, TransformOutcome, TransformReport, transform, transform_table,
};
pub use project::{missing_source_columns, project, resolve};
pub use rows::{RowFilter, filter_rows, sort_by_result};
