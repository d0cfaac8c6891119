//! CSV/JSON tabular converter
//!
//! A Rust CLI tool for converting a CSV file with a header row into a JSON
//! array of objects, and back again.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod record;

// Re-export commonly used types
pub use conversion::{
    convert_file, convert_file_with_config, ConversionConfig, ConversionEngine, ConversionOutcome,
    Format,
};
pub use error::{ConversionError, ConversionErrorKind, ConversionResult, ErrorCategory, ParseError};
pub use record::{FieldValue, Record, RecordSet};

use std::path::Path;

/// Read a file in the given format with default configuration
pub fn read_records(path: impl AsRef<Path>, format: Format) -> ConversionResult<RecordSet> {
    parser::read(path.as_ref(), format, &ConversionConfig::default())
}

/// Write records to a file in the given format with default configuration
pub fn write_records(
    records: &[Record],
    path: impl AsRef<Path>,
    format: Format,
) -> ConversionResult<()> {
    formatter::write(records, path.as_ref(), format, &ConversionConfig::default())
}
