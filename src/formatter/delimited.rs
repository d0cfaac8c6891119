//! CSV writer: header from the first record, one row per record

use crate::conversion::ConversionConfig;
use crate::error::{ConversionError, ConversionErrorKind, ConversionResult, FormattingError};
use crate::record::Record;
use std::io::Write;
use tracing::warn;

/// Write records as CSV.
///
/// The header is the first record's keys in their original order. Every
/// later record must carry all of those keys; keys outside the header are
/// dropped.
pub fn write_delimited<W: Write>(
    writer: W,
    records: &[Record],
    config: &ConversionConfig,
) -> ConversionResult<()> {
    let first = records.first().ok_or(FormattingError::EmptyInput)?;
    let header: Vec<&str> = first.keys().collect();
    if header.is_empty() {
        return Err(FormattingError::EmptyInput.into());
    }

    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(config.delimiter.as_byte())
        .terminator(config.line_terminator.to_csv())
        .from_writer(writer);

    csv_writer.write_record(&header).map_err(csv_write_error)?;

    for (index, record) in records.iter().enumerate() {
        let mut row = Vec::with_capacity(header.len());
        for field in &header {
            let value = record
                .get(field)
                .ok_or_else(|| FormattingError::missing_field(index + 1, field.to_string()))?;
            row.push(value.to_field_text());
        }

        if record.len() > header.len() {
            let dropped: Vec<&str> = record.keys().filter(|k| !header.contains(k)).collect();
            warn!(record = index + 1, ?dropped, "dropping fields not present in the CSV header");
        }

        csv_writer
            .write_record(row.iter().map(|value| value.as_bytes()))
            .map_err(csv_write_error)?;
    }

    csv_writer.flush().map_err(|e| {
        ConversionError::conversion_with_source(
            ConversionErrorKind::io(e.to_string(), None),
            e.into(),
        )
    })
}

fn csv_write_error(err: csv::Error) -> ConversionError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(e) => ConversionError::conversion_with_source(
            ConversionErrorKind::io(e.to_string(), None),
            e.into(),
        ),
        _ => FormattingError::serialization(message).into(),
    }
}
