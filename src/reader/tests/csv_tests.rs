//! Tests for the delimited-text reader

use crate::reader::{CsvReader, Reader};
use crate::value::Value;

#[test]
fn test_header_row_names_fields() {
    let records = CsvReader::new()
        .parse(b"userName,email\nArthur,a@example.com\nBea,b@example.com\n")
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].get("userName"), Some(&Value::from("Arthur")));
    assert_eq!(records[1].get("email"), Some(&Value::from("b@example.com")));
}

#[test]
fn test_field_order_follows_header() {
    let records = CsvReader::new().parse(b"b,a\n1,2\n").unwrap();
    let names: Vec<&str> = records[0].field_names().collect();
    assert_eq!(names, vec!["b", "a"]);
}

#[test]
fn test_empty_cell_stays_empty_string() {
    // Blank handling belongs to translations, not the reader
    let records = CsvReader::new().parse(b"name,email\nArthur,\n").unwrap();
    assert_eq!(records[0].get("email"), Some(&Value::from("")));
}

#[test]
fn test_short_row_pads_with_null() {
    let records = CsvReader::new().parse(b"a,b,c\n1,2\n").unwrap();
    assert_eq!(records[0].get("c"), Some(&Value::Null));
}

#[test]
fn test_long_row_drops_extra_cells() {
    let records = CsvReader::new().parse(b"a,b\n1,2,3\n").unwrap();
    assert_eq!(records[0].len(), 2);
}

#[test]
fn test_explicit_columns_headless_payload() {
    let reader = CsvReader::new().with_columns(["name", "email"]);
    let records = reader.parse(b"Arthur,a@example.com\n").unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get("name"), Some(&Value::from("Arthur")));
}

#[test]
fn test_custom_delimiter() {
    let reader = CsvReader::new().delimiter(b';');
    let records = reader.parse(b"a;b\n1;2\n").unwrap();
    assert_eq!(records[0].get("b"), Some(&Value::from("2")));
}

#[test]
fn test_empty_payload_yields_no_records() {
    assert!(CsvReader::new().parse(b"").unwrap().is_empty());
}

#[test]
fn test_header_only_payload_yields_no_records() {
    assert!(CsvReader::new().parse(b"a,b\n").unwrap().is_empty());
}

#[test]
fn test_from_params() {
    let reader = CsvReader::from_params(&serde_json::json!({
        "delimiter": "|",
        "columns": ["id", "name"],
    }))
    .unwrap();

    let records = reader.parse(b"1|Arthur\n").unwrap();
    assert_eq!(records[0].get("id"), Some(&Value::from("1")));
    assert_eq!(records[0].get("name"), Some(&Value::from("Arthur")));
}

#[test]
fn test_from_params_rejects_non_ascii_delimiter() {
    assert!(CsvReader::from_params(&serde_json::json!({"delimiter": "→"})).is_err());
}
