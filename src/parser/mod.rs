//! Record reading for both supported formats

pub mod delimited;
pub mod structured;
pub mod validation;

pub use delimited::parse_delimited;
pub use structured::parse_structured;

use crate::conversion::{ConversionConfig, Format};
use crate::error::{ConversionError, ConversionResult, ParseResult};
use crate::record::RecordSet;
use std::path::Path;
use tracing::debug;

const BOM: char = '\u{feff}';

/// Read a whole file and parse it as `format`.
///
/// A file that cannot be opened or read is reported as not found. Content
/// problems, including invalid UTF-8, are parse errors tagged with the path.
pub fn read(path: &Path, format: Format, config: &ConversionConfig) -> ConversionResult<RecordSet> {
    let bytes = std::fs::read(path).map_err(|e| ConversionError::not_found(path, &e))?;
    debug!(path = %path.display(), bytes = bytes.len(), %format, "read input file");

    let records = parse_bytes(bytes, format, config).map_err(|e| e.with_path(path))?;
    debug!(path = %path.display(), records = records.len(), "parsed records");

    Ok(records)
}

/// Parse in-memory content as `format`
pub fn parse_str(content: &str, format: Format, config: &ConversionConfig) -> ParseResult<RecordSet> {
    let content = content.strip_prefix(BOM).unwrap_or(content);
    match format {
        Format::Delimited => parse_delimited(content, config.delimiter),
        Format::Structured => parse_structured(content),
    }
}

fn parse_bytes(bytes: Vec<u8>, format: Format, config: &ConversionConfig) -> ParseResult<RecordSet> {
    let content = validation::decode_utf8(bytes)?;
    parse_str(&content, format, config)
}
