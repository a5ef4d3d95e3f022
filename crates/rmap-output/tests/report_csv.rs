//! Tests for report CSV output.

use rmap_model::OutputTable;
use rmap_output::{UTF8_BOM, serialize, write_output};

fn sample_table() -> OutputTable {
    let mut table = OutputTable::new(vec![
        "Order".to_string(),
        "Pass-Fail".to_string(),
        "Notes".to_string(),
    ]);
    table.push_row(vec![
        "A1".to_string(),
        "Pass".to_string(),
        "said \"hi\"".to_string(),
    ]);
    table.push_row(vec!["A2".to_string(), "Fail".to_string(), String::new()]);
    table.push_row(vec![
        "A3".to_string(),
        String::new(),
        "two\nlines".to_string(),
    ]);
    table
}

fn without_bom(bytes: &[u8]) -> String {
    let body = bytes.strip_prefix(UTF8_BOM).expect("BOM prefix");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}

#[test]
fn serialize_snapshot() {
    let bytes = serialize(&sample_table()).expect("serialize");
    insta::assert_snapshot!(without_bom(&bytes), @r#"
    Order,Pass-Fail,Notes
    A1,Pass,"said ""hi"""
    A2,Fail,
    A3,,"two
    lines"
    "#);
}

#[test]
fn serialized_output_reloads_with_identical_values() {
    let table = sample_table();
    let bytes = serialize(&table).expect("serialize");
    let reloaded = rmap_ingest::load(&bytes).expect("reload");

    assert_eq!(reloaded.headers, table.columns);
    assert_eq!(reloaded.row_count(), table.row_count());
    for (row, expected) in reloaded.rows.iter().zip(&table.rows) {
        let values: Vec<&str> = table
            .columns
            .iter()
            .map(|column| row.value(column))
            .collect();
        let expected: Vec<&str> = expected.iter().map(String::as_str).collect();
        assert_eq!(values, expected);
    }
}

#[test]
fn write_output_creates_parent_dirs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("Deliveroo Report Data.csv");
    write_output(&path, &sample_table()).expect("write output");

    let bytes = std::fs::read(&path).expect("read back");
    assert!(bytes.starts_with(UTF8_BOM));
    assert_eq!(bytes, serialize(&sample_table()).expect("serialize"));
}
