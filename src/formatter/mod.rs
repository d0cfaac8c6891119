//! Record writing for both supported formats

pub mod delimited;
pub mod structured;

pub use delimited::write_delimited;
pub use structured::write_structured;

use crate::conversion::{ConversionConfig, Format};
use crate::error::{ConversionError, ConversionResult};
use crate::record::Record;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Serialize records as `format` into any writer
pub fn render<W: Write>(
    writer: W,
    records: &[Record],
    format: Format,
    config: &ConversionConfig,
) -> ConversionResult<()> {
    match format {
        Format::Delimited => write_delimited(writer, records, config),
        Format::Structured => write_structured(writer, records, config),
    }
}

/// Serialize records to `path`, creating or overwriting it.
///
/// Output is rendered in memory first, so a formatting error leaves an
/// existing destination untouched.
pub fn write(
    records: &[Record],
    path: &Path,
    format: Format,
    config: &ConversionConfig,
) -> ConversionResult<()> {
    let mut buffer = Vec::new();
    render(&mut buffer, records, format, config)?;

    if config.atomic_write {
        write_atomic(path, &buffer)?;
    } else {
        std::fs::write(path, &buffer).map_err(|e| ConversionError::io(path, e))?;
    }

    debug!(path = %path.display(), bytes = buffer.len(), atomic = config.atomic_write, "wrote output file");
    Ok(())
}

fn write_atomic(path: &Path, contents: &[u8]) -> ConversionResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ConversionError::io(path, e))?;
    tmp.write_all(contents).map_err(|e| ConversionError::io(path, e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| ConversionError::io(path, e))?;
    tmp.persist(path)
        .map_err(|e| ConversionError::io(path, e.error))?;
    Ok(())
}
