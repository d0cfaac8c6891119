use pretty_assertions::assert_eq;
use serde_json::json;
use std::fs;
use tabconv::{read_records, write_records, ErrorCategory, FieldValue, Format, Record};
use tempfile::tempdir;

fn people() -> Vec<Record> {
    vec![
        Record::from_iter([("name", "John"), ("age", "22")]),
        Record::from_iter([("name", "Alice"), ("age", "30")]),
    ]
}

#[test]
fn test_write_csv_and_read_back() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("test.csv");

    write_records(&people(), &path, Format::Delimited).unwrap();
    assert_eq!(read_records(&path, Format::Delimited).unwrap(), people());
}

#[test]
fn test_csv_header_matches_first_record() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("test.csv");
    let records = vec![
        Record::from_iter([("zip", "1000"), ("city", "Oslo"), ("country", "NO")]),
        Record::from_iter([("country", "SE"), ("city", "Lund"), ("zip", "22100")]),
    ];

    write_records(&records, &path, Format::Delimited).unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().next(), Some("zip,city,country"));
    assert_eq!(contents.lines().nth(2), Some("22100,Lund,SE"));
}

#[test]
fn test_write_csv_from_json_values() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("test.csv");
    let records = vec![Record::from_iter([
        ("name", FieldValue::text("John")),
        ("age", FieldValue::from(json!(22))),
    ])];

    write_records(&records, &path, Format::Delimited).unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().collect::<Vec<_>>(), vec!["name,age", "John,22"]);
}

#[test]
fn test_write_csv_empty_records() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("test.csv");

    let err = write_records(&[], &path, Format::Delimited).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::EmptyInput);
    assert!(!path.exists());
}

#[test]
fn test_write_json_and_read_back() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("test.json");
    let records = vec![
        Record::from_iter([("name", FieldValue::text("John")), ("age", FieldValue::from(json!(20)))]),
        Record::from_iter([("name", FieldValue::text("Alice")), ("age", FieldValue::from(json!(30)))]),
    ];

    write_records(&records, &path, Format::Structured).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        parsed,
        json!([{"name": "John", "age": 20}, {"name": "Alice", "age": 30}])
    );
    assert_eq!(read_records(&path, Format::Structured).unwrap(), records);
}

#[test]
fn test_write_json_uses_four_space_indent() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("test.json");

    write_records(&people(), &path, Format::Structured).unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\n    {\n        \"name\": \"John\",\n"));
}
