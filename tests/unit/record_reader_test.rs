use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use std::io::Write;
use tabconv::conversion::{ConversionConfig, DelimiterType};
use tabconv::parser::parse_str;
use tabconv::{read_records, ConversionError, ErrorCategory, FieldValue, Format, Record};
use tempfile::NamedTempFile;

fn text_record(pairs: &[(&str, &str)]) -> Record {
    pairs.iter().map(|(k, v)| (*k, *v)).collect()
}

#[test]
fn test_read_csv_rows_as_text() {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(tmp, "name,age\nJohn,22\nAlice,30\n").unwrap();

    let records = read_records(tmp.path(), Format::Delimited).unwrap();
    assert_eq!(
        records,
        vec![
            text_record(&[("name", "John"), ("age", "22")]),
            text_record(&[("name", "Alice"), ("age", "30")]),
        ]
    );
}

#[test]
fn test_read_csv_missing_file() {
    let err = read_records("file_that_does_not_exist.csv", Format::Delimited).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::NotFound);
    assert!(err.user_message().starts_with("File not found"));
}

#[test]
fn test_read_csv_unterminated_quote() {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(tmp, "name,age\n\"John,22\n").unwrap();

    let err = read_records(tmp.path(), Format::Delimited).unwrap_err();
    assert_matches!(err, ConversionError::ParseError(ref parse) if parse.line == Some(2));
}

#[test]
fn test_read_json_keeps_native_types() {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(
        tmp,
        r#"[
    {{"name": "John", "age": 22}},
    {{"name": "Alice", "age": 30}}
]"#
    )
    .unwrap();

    let records = read_records(tmp.path(), Format::Structured).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].get("name"), Some(&FieldValue::text("John")));
    assert_eq!(records[1].get("age"), Some(&FieldValue::Number(30.into())));
}

#[test]
fn test_read_json_missing_file() {
    let err = read_records("file_that_does_not_exist.json", Format::Structured).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::NotFound);
}

#[test]
fn test_read_malformed_json() {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(tmp, r#"{{"name": "John", "age": 22,,,}}"#).unwrap();

    let err = read_records(tmp.path(), Format::Structured).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Parse);
    assert!(err.user_message().contains("at line 1, column"));
}

#[test]
fn test_parse_str_with_pipe_delimiter() {
    let config = ConversionConfig {
        delimiter: DelimiterType::Pipe,
        ..Default::default()
    };
    let records = parse_str("a|b\n1|x,y\n", Format::Delimited, &config).unwrap();
    assert_eq!(records, vec![text_record(&[("a", "1"), ("b", "x,y")])]);
}
