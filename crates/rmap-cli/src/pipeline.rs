//! Report mapping pipeline with explicit stages.
//!
//! 1. **Ingest**: read and parse the export
//! 2. **Transform**: filter, normalize, sort, project
//! 3. **Output**: write the report CSV and the optional JSON run report
//!
//! Each stage takes the output of the previous one and adds `anyhow`
//! context naming the file it was working on.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{info, info_span};

use rmap_model::{DEFAULT_OUTPUT_FILE_NAME, InputTable, MappingSpec};
use rmap_output::{ensure_parent_dir, serialize, write_output};
use rmap_transform::{RowFilter, TransformOptions, TransformOutcome, TransformReport};

/// Parse, transform, and serialize in one call. Touches no files.
///
/// The only failure for well-formed options is an unparseable input.
pub fn transform_to_bytes(
    bytes: &[u8],
    spec: &MappingSpec,
    options: &TransformOptions,
) -> Result<Vec<u8>> {
    let outcome = rmap_transform::transform(bytes, spec, options)?;
    serialize(&outcome.table)
}

/// Where the report goes when no output path is given: next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    input
        .parent()
        .map(|dir| dir.join(DEFAULT_OUTPUT_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE_NAME))
}

/// Pick the report path: `output` if given, else [`default_output_path`].
///
/// Fails when the chosen path is the input export itself, e.g. an input
/// already named `Deliveroo Report Data.csv` with no `--output`.
pub fn resolve_output_path(input: &Path, output: Option<&Path>) -> Result<PathBuf> {
    let path = output.map_or_else(|| default_output_path(input), Path::to_path_buf);
    if is_same_file(input, &path) {
        bail!(
            "report path {} is the input export; choose another with --output",
            path.display()
        );
    }
    Ok(path)
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// The mapping as pretty JSON, as printed by `columns --format json`.
pub fn mapping_json(spec: &MappingSpec) -> Result<String> {
    serde_json::to_string_pretty(spec.entries()).context("serialize mapping")
}

/// `[position, report column, source]` rows for the column listing.
pub fn mapping_rows(spec: &MappingSpec) -> Vec<[String; 3]> {
    spec.entries()
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            [
                (idx + 1).to_string(),
                entry.output.clone(),
                entry.rule.describe(),
            ]
        })
        .collect()
}

/// Build transform options from exclusion flags.
///
/// The built-in test site stays excluded unless `no_default_exclusion` is set.
pub fn transform_options(extra_sites: &[String], no_default_exclusion: bool) -> TransformOptions {
    let base = if no_default_exclusion {
        RowFilter::on(rmap_model::SITE_ID_COLUMN)
    } else {
        RowFilter::default()
    };
    let row_filter = extra_sites
        .iter()
        .map(|site| site.trim())
        .filter(|site| !site.is_empty())
        .fold(base, |filter, site| filter.exclude(site));
    TransformOptions { row_filter }
}

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Read and parse the export at `path`.
pub fn ingest(path: &Path) -> Result<InputTable> {
    let span = info_span!("ingest", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();
    let table =
        rmap_ingest::load_file(path).with_context(|| format!("load {}", path.display()))?;
    info!(
        rows = table.row_count(),
        columns = table.headers.len(),
        duration_ms = start.elapsed().as_millis(),
        "export loaded"
    );
    Ok(table)
}

// ============================================================================
// Stage 2: Transform
// ============================================================================

/// Run the in-memory transform on a loaded export.
pub fn transform(
    table: InputTable,
    spec: &MappingSpec,
    options: &TransformOptions,
) -> TransformOutcome {
    let span = info_span!("transform", rows = table.row_count());
    let _guard = span.enter();
    rmap_transform::transform_table(table, spec, options)
}

// ============================================================================
// Stage 3: Output
// ============================================================================

/// Paths the output stage writes to.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub output: PathBuf,
    pub run_report: Option<PathBuf>,
    pub dry_run: bool,
}

/// JSON document written by `--report`.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub options: &'a TransformOptions,
    #[serde(flatten)]
    pub report: &'a TransformReport,
}

/// Write the report CSV (unless dry run) and return whether it was written.
pub fn output(outcome: &TransformOutcome, config: &OutputConfig) -> Result<bool> {
    let span = info_span!("output", path = %config.output.display());
    let _guard = span.enter();
    if config.dry_run {
        info!("dry run; report not written");
        return Ok(false);
    }
    write_output(&config.output, &outcome.table)
        .with_context(|| format!("write report {}", config.output.display()))?;
    Ok(true)
}

/// Write the run report as pretty JSON.
pub fn write_run_report(path: &Path, report: &RunReport<'_>) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(report).context("serialize run report")?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "run report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmap_model::EXCLUDED_SITE_ID;

    #[test]
    fn test_default_output_path_sits_next_to_input() {
        let path = default_output_path(Path::new("/data/exports/audits.csv"));
        assert_eq!(
            path,
            PathBuf::from("/data/exports/Deliveroo Report Data.csv")
        );
    }

    #[test]
    fn test_default_output_path_bare_file_name() {
        let path = default_output_path(Path::new("audits.csv"));
        assert_eq!(path, PathBuf::from(DEFAULT_OUTPUT_FILE_NAME));
    }

    #[test]
    fn test_explicit_output_path_is_kept() {
        let path = resolve_output_path(Path::new("in.csv"), Some(Path::new("out/report.csv")))
            .expect("distinct paths");
        assert_eq!(path, PathBuf::from("out/report.csv"));
    }

    #[test]
    fn test_output_path_equal_to_input_is_refused() {
        let input = Path::new("/data/Deliveroo Report Data.csv");
        let error = resolve_output_path(input, None).expect_err("would overwrite input");
        assert!(error.to_string().contains("--output"));
        assert!(resolve_output_path(input, Some(input)).is_err());
    }

    #[test]
    fn test_transform_options_keep_default_exclusion() {
        let options = transform_options(&["SITE9".to_string(), "  ".to_string()], false);
        assert!(options.row_filter.is_excluded(EXCLUDED_SITE_ID));
        assert!(options.row_filter.is_excluded("SITE9"));
        assert_eq!(options.row_filter.excluded.len(), 2);
    }

    #[test]
    fn test_transform_options_without_default_exclusion() {
        let options = transform_options(&[], true);
        assert!(!options.row_filter.is_excluded(EXCLUDED_SITE_ID));
        assert!(options.row_filter.excluded.is_empty());
    }
}
