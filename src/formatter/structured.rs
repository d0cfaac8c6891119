//! JSON writer

use crate::conversion::ConversionConfig;
use crate::error::{ConversionError, ConversionErrorKind, ConversionResult, FormattingError};
use crate::record::Record;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;

/// Write records as a JSON array of objects, indented by `config.indent_size`
/// spaces (compact when zero), followed by a newline.
pub fn write_structured<W: Write>(
    mut writer: W,
    records: &[Record],
    config: &ConversionConfig,
) -> ConversionResult<()> {
    if config.indent_size == 0 {
        serde_json::to_writer(&mut writer, records).map_err(json_write_error)?;
    } else {
        let indent = vec![b' '; config.indent_size as usize];
        let formatter = PrettyFormatter::with_indent(&indent);
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        records
            .serialize(&mut serializer)
            .map_err(json_write_error)?;
    }

    writer.write_all(b"\n").map_err(io_error)?;
    writer.flush().map_err(io_error)
}

fn json_write_error(err: serde_json::Error) -> ConversionError {
    if err.is_io() {
        let io: std::io::Error = err.into();
        return io_error(io);
    }
    FormattingError::serialization(err.to_string()).into()
}

fn io_error(err: std::io::Error) -> ConversionError {
    ConversionError::conversion_with_source(ConversionErrorKind::io(err.to_string(), None), err.into())
}
