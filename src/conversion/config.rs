//! Configuration options for CSV/JSON conversion

use crate::error::{ConversionError, ConversionErrorKind, ConversionResult};
use std::path::PathBuf;

/// Field delimiter options for the delimited format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterType {
    /// Comma delimiter (,)
    Comma,
    /// Tab delimiter (\\t)
    Tab,
    /// Pipe delimiter (|)
    Pipe,
}

impl DelimiterType {
    pub fn as_byte(&self) -> u8 {
        match self {
            DelimiterType::Comma => b',',
            DelimiterType::Tab => b'\t',
            DelimiterType::Pipe => b'|',
        }
    }
}

/// Record terminator for delimited output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTerminator {
    /// CRLF on Windows, LF elsewhere
    Platform,
    Lf,
    CrLf,
}

impl LineTerminator {
    pub fn to_csv(self) -> csv::Terminator {
        match self {
            LineTerminator::Platform if cfg!(windows) => csv::Terminator::CRLF,
            LineTerminator::Platform => csv::Terminator::Any(b'\n'),
            LineTerminator::Lf => csv::Terminator::Any(b'\n'),
            LineTerminator::CrLf => csv::Terminator::CRLF,
        }
    }
}

/// Conversion configuration options
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Spaces per indentation level in JSON output (0 = compact)
    pub indent_size: u8,
    /// CSV field delimiter, used for both reading and writing
    pub delimiter: DelimiterType,
    /// CSV record terminator
    pub line_terminator: LineTerminator,
    /// Directory for converted files; `None` means the working directory
    pub output_dir: Option<PathBuf>,
    /// Write to a temporary file and rename it over the destination
    pub atomic_write: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            indent_size: 4,
            delimiter: DelimiterType::Comma,
            line_terminator: LineTerminator::Platform,
            output_dir: None,
            atomic_write: false,
        }
    }
}

impl ConversionConfig {
    pub const MAX_INDENT: u8 = 8;

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn validate(&self) -> ConversionResult<()> {
        if self.indent_size > Self::MAX_INDENT {
            return Err(ConversionError::conversion(
                ConversionErrorKind::configuration(format!(
                    "indent size must be between 0 and {}, got {}",
                    Self::MAX_INDENT,
                    self.indent_size
                )),
            ));
        }
        Ok(())
    }
}
