//! Format identifiers derived from file extensions and user input

use std::fmt;
use std::path::Path;

/// The two supported serialization formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Comma-separated text with a header row
    Delimited,
    /// A JSON array of flat objects
    Structured,
}

impl Format {
    /// Resolve a format from an extension or format name such as `CSV` or `.json`
    pub fn from_extension(ext: &str) -> Option<Self> {
        match normalize_format(ext).as_str() {
            "csv" => Some(Format::Delimited),
            "json" => Some(Format::Structured),
            _ => None,
        }
    }

    /// Resolve the format of a file from its extension
    pub fn from_path(path: &Path) -> Option<Self> {
        Self::from_extension(&source_extension(path))
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Format::Delimited => "csv",
            Format::Structured => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Lower-case a requested format and strip any leading dots
pub fn normalize_format(format: &str) -> String {
    format.trim().trim_start_matches('.').to_lowercase()
}

/// Lower-cased text after the last `.` of the file name, or empty
pub fn source_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}
