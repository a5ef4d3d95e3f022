use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use rmap_cli::pipeline::{
    OutputConfig, RunReport, ingest, mapping_json, mapping_rows, output, resolve_output_path,
    transform, transform_options, write_run_report,
};
use rmap_model::report_mapping;

use crate::cli::{ColumnsFormatArg, MapArgs};
use crate::summary::{apply_table_style, header_cell};
use crate::types::MapResult;

pub fn run_columns(format: ColumnsFormatArg) -> Result<()> {
    let spec = report_mapping();
    match format {
        ColumnsFormatArg::Json => println!("{}", mapping_json(&spec)?),
        ColumnsFormatArg::Table => {
            let mut table = Table::new();
            table.set_header(vec![
                header_cell("#"),
                header_cell("Report column"),
                header_cell("Source"),
            ]);
            apply_table_style(&mut table);
            for row in mapping_rows(&spec) {
                table.add_row(Vec::from(row));
            }
            println!("{table}");
        }
    }
    Ok(())
}

pub fn run_map(args: &MapArgs) -> Result<MapResult> {
    let span = info_span!("map", input = %args.input.display());
    let _guard = span.enter();

    let spec = report_mapping();
    let options = transform_options(&args.exclude_sites, args.no_default_exclusion);
    let config = OutputConfig {
        output: resolve_output_path(&args.input, args.output.as_deref())?,
        run_report: args.report.clone(),
        dry_run: args.dry_run,
    };

    let table = ingest(&args.input)?;
    let outcome = transform(table, &spec, &options);
    let written = output(&outcome, &config)?;

    let mut run_report = None;
    if written && let Some(path) = &config.run_report {
        let report = RunReport {
            input: &args.input,
            output: &config.output,
            options: &options,
            report: &outcome.report,
        };
        write_run_report(path, &report)
            .with_context(|| format!("write run report {}", path.display()))?;
        run_report = Some(path.clone());
    }

    info!(rows = outcome.report.output_rows, written, "map complete");
    Ok(MapResult {
        input: args.input.clone(),
        output: config.output,
        written,
        run_report,
        report: outcome.report,
    })
}
