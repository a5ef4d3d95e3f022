//! The report transform: filter → normalize → sort → project.
//!
//! # Example
//!
//! ```ignore
//! use rmap_model::report_mapping;
//! use rmap_transform::{TransformOptions, transform};
//!
//! let outcome = transform(&bytes, &report_mapping(), &TransformOptions::default())?;
//! println!("Rows: {}", outcome.table.row_count());
//! ```

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn};

use rmap_model::{InputTable, MappingSpec, OutputTable};

use crate::error::Result;
use crate::normalize::{NormalizationReport, normalize_date_time};
use crate::project::{missing_source_columns, project};
use crate::rows::{RowFilter, filter_rows, sort_by_result};

/// Knobs for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformOptions {
    pub row_filter: RowFilter,
}

/// What a run did, for summaries and the JSON run report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformReport {
    pub input_rows: usize,
    pub excluded_rows: usize,
    pub output_rows: usize,
    pub output_columns: usize,
    pub normalization: NormalizationReport,
    /// Referenced source columns absent from the input header.
    pub missing_columns: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct TransformOutcome {
    pub table: OutputTable,
    pub report: TransformReport,
}

/// Parse CSV bytes and run the full transform.
///
/// Only parsing can fail; every field-level problem degrades to an empty
/// value and is counted in the report.
pub fn transform(
    bytes: &[u8],
    spec: &MappingSpec,
    options: &TransformOptions,
) -> Result<TransformOutcome> {
    let table = info_span!("load").in_scope(|| rmap_ingest::load(bytes))?;
    Ok(transform_table(table, spec, options))
}

/// Run the transform on an already loaded table.
pub fn transform_table(
    mut table: InputTable,
    spec: &MappingSpec,
    options: &TransformOptions,
) -> TransformOutcome {
    let start = Instant::now();
    let input_rows = table.row_count();

    let missing_columns = missing_source_columns(&table, spec);
    if !missing_columns.is_empty() {
        warn!(
            count = missing_columns.len(),
            columns = ?missing_columns,
            "source columns missing; their output values will be empty"
        );
    }

    let excluded_rows =
        info_span!("filter").in_scope(|| filter_rows(&mut table, &options.row_filter));

    let normalization = info_span!("normalize").in_scope(|| normalize_date_time(&mut table));
    if normalization.has_failures() {
        warn!(
            date_failures = normalization.date_failures,
            time_failures = normalization.time_failures,
            "some visit dates or times could not be parsed and were left empty"
        );
    }

    info_span!("sort").in_scope(|| sort_by_result(&mut table));

    let output = info_span!("project").in_scope(|| project(&table, spec));

    let report = TransformReport {
        input_rows,
        excluded_rows,
        output_rows: output.row_count(),
        output_columns: output.columns.len(),
        normalization,
        missing_columns,
    };
    info!(
        input_rows = report.input_rows,
        excluded_rows = report.excluded_rows,
        output_rows = report.output_rows,
        duration_ms = start.elapsed().as_millis(),
        "transform complete"
    );

    TransformOutcome {
        table: output,
        report,
    }
}
