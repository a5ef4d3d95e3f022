//! End-to-end tests for the report transform.

use rmap_model::{FieldRule, MappingSpec, report_mapping};
use rmap_transform::{RowFilter, TransformOptions, TransformError, transform};

const HEADER: &str = "order_internal_id,site_internal_id,date_of_visit,time_of_visit,primary_result,Please give details of the alcohol that you purchased:,Please give details of the cigarettes that you purchased:,City";

fn export(rows: &[&str]) -> Vec<u8> {
    let mut text = String::from(HEADER);
    text.push('\n');
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    text.into_bytes()
}

fn column<'a>(outcome: &'a rmap_transform::TransformOutcome, name: &str) -> Vec<&'a str> {
    outcome
        .table
        .column_values(name)
        .unwrap_or_else(|| panic!("missing output column {name}"))
}

#[test]
fn three_rows_one_excluded_sorted_by_result() {
    let bytes = export(&[
        "ORD1,SITE1,31/01/2024,14:05,Fail,,",
        "ORD2,SITE224854,01/02/2024,09:30,Pass,,",
        "ORD3,SITE3,02/02/2024,10:00,Pass,,",
    ]);
    let outcome = transform(&bytes, &report_mapping(), &TransformOptions::default())
        .expect("transform");

    assert_eq!(outcome.table.row_count(), 2);
    assert_eq!(column(&outcome, "Order"), vec!["ORD3", "ORD1"]);
    assert_eq!(column(&outcome, "Pass-Fail"), vec!["Pass", "Fail"]);
    assert_eq!(outcome.report.input_rows, 3);
    assert_eq!(outcome.report.excluded_rows, 1);
    assert_eq!(outcome.report.output_rows, 2);
}

#[test]
fn visit_date_and_month_are_normalized() {
    let bytes = export(&[
        "ORD1,SITE1,31/01/2024,14:05,Pass,,",
        "ORD2,SITE2,notadate,25:99,Pass,,",
    ]);
    let outcome = transform(&bytes, &report_mapping(), &TransformOptions::default())
        .expect("transform");

    assert_eq!(column(&outcome, "Actual Visit Date"), vec!["2024-01-31", ""]);
    assert_eq!(column(&outcome, "Actual Visit Time"), vec!["14:05:00", ""]);
    assert_eq!(column(&outcome, "Extra Site 2"), vec!["January", ""]);
    assert_eq!(outcome.report.normalization.date_failures, 1);
    assert_eq!(outcome.report.normalization.time_failures, 1);
}

#[test]
fn candidate_list_falls_back_to_second_column() {
    let bytes = export(&["ORD1,SITE1,31/01/2024,14:05,Pass,,Lager 4-pack"]);
    let spec = MappingSpec::from_pairs([(
        "Product",
        FieldRule::candidates([
            "Please give details of the alcohol that you purchased:",
            "Please give details of the cigarettes that you purchased:",
        ]),
    )])
    .expect("spec");
    let outcome = transform(&bytes, &spec, &TransformOptions::default()).expect("transform");
    assert_eq!(column(&outcome, "Product"), vec!["Lager 4-pack"]);
}

#[test]
fn dropped_columns_are_always_empty() {
    let bytes = export(&[
        "ORD1,SITE1,31/01/2024,14:05,Pass,,,Leeds",
        "ORD2,SITE2,31/01/2024,14:05,Pass,,,York",
    ]);
    let outcome = transform(&bytes, &report_mapping(), &TransformOptions::default())
        .expect("transform");
    assert_eq!(column(&outcome, "City"), vec!["", ""]);
    assert_eq!(column(&outcome, "AM / PM"), vec!["", ""]);
}

#[test]
fn output_follows_mapping_order() {
    let bytes = export(&["ORD1,SITE1,31/01/2024,14:05,Pass,,"]);
    let spec = report_mapping();
    let outcome = transform(&bytes, &spec, &TransformOptions::default()).expect("transform");
    assert_eq!(outcome.table.columns, spec.output_columns());
    assert_eq!(outcome.table.rows[0].len(), spec.len());
}

#[test]
fn missing_source_columns_are_reported_not_fatal() {
    let bytes = export(&["ORD1,SITE1,31/01/2024,14:05,Pass,,"]);
    let outcome = transform(&bytes, &report_mapping(), &TransformOptions::default())
        .expect("transform");
    assert!(
        outcome
            .report
            .missing_columns
            .contains(&"client_name".to_string())
    );
    assert!(
        !outcome
            .report
            .missing_columns
            .contains(&"primary_result".to_string())
    );
    assert_eq!(column(&outcome, "Client"), vec![""]);
}

#[test]
fn extra_exclusions_apply() {
    let bytes = export(&[
        "ORD1,SITE1,31/01/2024,14:05,Pass,,",
        "ORD2,SITE2,31/01/2024,14:05,Pass,,",
        "ORD3,SITE224854,31/01/2024,14:05,Pass,,",
    ]);
    let options = TransformOptions {
        row_filter: RowFilter::default().exclude("SITE2"),
    };
    let outcome = transform(&bytes, &report_mapping(), &options).expect("transform");
    assert_eq!(column(&outcome, "Order"), vec!["ORD1"]);
}

#[test]
fn unparseable_input_fails_with_parse_error() {
    let result = transform(b"", &report_mapping(), &TransformOptions::default());
    match result {
        Err(TransformError::Ingest(error)) => assert!(error.is_parse_error()),
        other => panic!("expected ingest error, got {other:?}"),
    }
}

#[test]
fn report_serializes_to_json() {
    let bytes = export(&["ORD1,SITE1,31/01/2024,14:05,Pass,,"]);
    let outcome = transform(&bytes, &report_mapping(), &TransformOptions::default())
        .expect("transform");
    let json = serde_json::to_value(&outcome.report).expect("serialize report");
    assert_eq!(json["output_rows"], 1);
    assert_eq!(json["normalization"]["dates_parsed"], 1);
}
