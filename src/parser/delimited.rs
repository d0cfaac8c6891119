//! CSV reader: header row keys every later row, all values stay text

use crate::conversion::DelimiterType;
use crate::error::{ParseError, ParseResult};
use crate::parser::validation::check_quotes_terminated;
use crate::record::{FieldValue, Record, RecordSet};

/// Parse CSV text into records keyed by the header row. Every value is text.
pub fn parse_delimited(content: &str, delimiter: DelimiterType) -> ParseResult<RecordSet> {
    check_quotes_terminated(content, delimiter.as_byte())?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter.as_byte())
        .from_reader(content.as_bytes());

    let headers = reader.headers().map_err(csv_parse_error)?.clone();

    let mut records = RecordSet::new();
    for row in reader.records() {
        let row = row.map_err(csv_parse_error)?;
        let mut record = Record::with_capacity(headers.len());
        for (name, value) in headers.iter().zip(row.iter()) {
            record.insert(name, FieldValue::text(value));
        }
        records.push(record);
    }

    Ok(records)
}

fn csv_parse_error(err: csv::Error) -> ParseError {
    let line = err.position().map(|pos| pos.line() as usize);
    let message = match err.kind() {
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => format!(
            "row has {} fields but the header has {}",
            len, expected_len
        ),
        _ => err.to_string(),
    };
    ParseError::new(message, line, None)
}
