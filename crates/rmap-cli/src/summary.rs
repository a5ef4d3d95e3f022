use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::MapResult;

pub fn print_summary(result: &MapResult) {
    println!("Input: {}", result.input.display());
    if result.written {
        println!("Output: {}", result.output.display());
    } else {
        println!("Output: {} (dry run, not written)", result.output.display());
    }
    if let Some(path) = &result.run_report {
        println!("Run report: {}", path.display());
    }

    let report = &result.report;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Input rows"), Cell::new(report.input_rows)]);
    table.add_row(vec![
        Cell::new("Excluded rows"),
        count_cell(report.excluded_rows, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Output rows")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.output_rows).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Unparsed visit dates"),
        count_cell(report.normalization.date_failures, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Unparsed visit times"),
        count_cell(report.normalization.time_failures, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Missing source columns"),
        count_cell(report.missing_columns.len(), Color::Yellow),
    ]);
    println!("{table}");

    if !report.missing_columns.is_empty() {
        println!();
        println!("Missing source columns (output left empty):");
        for column in &report.missing_columns {
            println!("- {column}");
        }
    }
    println!();
    println!("File processed successfully! Rows: {}", report.output_rows);
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
