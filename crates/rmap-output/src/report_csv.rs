use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::info;

use rmap_model::OutputTable;

use crate::common::ensure_parent_dir;

/// UTF-8 byte-order mark written ahead of the header row.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Serialize a report table: BOM, header row, then one line per row.
///
/// Fields are quoted only when they contain a delimiter, quote, or line
/// break. Lines end in `\n`.
pub fn serialize(table: &OutputTable) -> Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(UTF8_BOM.len() + 64 * (table.row_count() + 1));
    buffer.extend_from_slice(UTF8_BOM);

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(buffer);
    writer
        .write_record(&table.columns)
        .context("write header row")?;
    for (idx, row) in table.rows.iter().enumerate() {
        writer
            .write_record(row)
            .with_context(|| format!("write row {}", idx + 1))?;
    }
    writer
        .into_inner()
        .map_err(|error| anyhow::anyhow!("flush csv buffer: {}", error.error()))
}

/// Serialize and write a report table to `path`, creating parent folders.
pub fn write_output(path: &Path, table: &OutputTable) -> Result<()> {
    let bytes = serialize(table)?;
    ensure_parent_dir(path)?;
    fs::write(path, &bytes).with_context(|| format!("write {}", path.display()))?;
    info!(
        path = %path.display(),
        rows = table.row_count(),
        bytes = bytes.len(),
        "report written"
    );
    Ok(())
}
