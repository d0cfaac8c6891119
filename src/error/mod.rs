//! Error types and handling infrastructure for CSV/JSON conversion

use anyhow::Error;
use std::fmt;
use std::path::{Path, PathBuf};

/// Core error types for the conversion process
#[derive(Debug, thiserror::Error)]
pub enum ConversionErrorKind {
    #[error("File not found: {}: {reason}", path.display())]
    NotFound { path: PathBuf, reason: String },

    #[error("Unsupported format: {format} is not supported")]
    UnsupportedFormat { format: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl ConversionErrorKind {
    pub fn not_found(path: &Path, reason: String) -> Self {
        Self::NotFound {
            path: path.to_path_buf(),
            reason,
        }
    }

    pub fn unsupported_format(format: String) -> Self {
        Self::UnsupportedFormat { format }
    }

    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }
}

/// Error categories reported to the user, one per failure class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Parse,
    UnsupportedFormat,
    EmptyInput,
    Io,
    InconsistentRecords,
    Unexpected,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::NotFound => "not found",
            ErrorCategory::Parse => "parse error",
            ErrorCategory::UnsupportedFormat => "unsupported format",
            ErrorCategory::EmptyInput => "empty input",
            ErrorCategory::Io => "io error",
            ErrorCategory::InconsistentRecords => "inconsistent records",
            ErrorCategory::Unexpected => "unexpected error",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error(transparent)]
    ParseError(#[from] ParseError),

    #[error(transparent)]
    FormattingError(#[from] FormattingError),

    #[error("{kind}")]
    Conversion {
        kind: ConversionErrorKind,
        source: Option<anyhow::Error>,
    },

    #[error(transparent)]
    Other(#[from] Error),
}

impl ConversionError {
    pub fn parse(message: String, line: Option<usize>, column: Option<usize>) -> Self {
        Self::ParseError(ParseError::new(message, line, column))
    }

    pub fn conversion(kind: ConversionErrorKind) -> Self {
        Self::Conversion { kind, source: None }
    }

    pub fn conversion_with_source(kind: ConversionErrorKind, source: anyhow::Error) -> Self {
        Self::Conversion {
            kind,
            source: Some(source),
        }
    }

    pub fn not_found(path: &Path, error: &std::io::Error) -> Self {
        Self::conversion(ConversionErrorKind::not_found(path, error.to_string()))
    }

    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::conversion(ConversionErrorKind::unsupported_format(format.into()))
    }

    pub fn io(path: &Path, error: std::io::Error) -> Self {
        Self::conversion_with_source(
            ConversionErrorKind::io(
                format!("{}: {}", path.display(), error),
                Some(path.to_path_buf()),
            ),
            error.into(),
        )
    }

    pub fn other(error: Error) -> Self {
        Self::Other(error)
    }

    /// Classify the error into one of the user-facing categories
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ParseError(_) => ErrorCategory::Parse,
            Self::FormattingError(err) => match err {
                FormattingError::EmptyInput => ErrorCategory::EmptyInput,
                FormattingError::MissingField { .. } => ErrorCategory::InconsistentRecords,
                FormattingError::Serialization { .. } => ErrorCategory::Unexpected,
            },
            Self::Conversion { kind, .. } => match kind {
                ConversionErrorKind::NotFound { .. } => ErrorCategory::NotFound,
                ConversionErrorKind::UnsupportedFormat { .. } => ErrorCategory::UnsupportedFormat,
                ConversionErrorKind::Io { .. } => ErrorCategory::Io,
                ConversionErrorKind::Configuration { .. } => ErrorCategory::Unexpected,
            },
            Self::Other(_) => ErrorCategory::Unexpected,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::ParseError(err) => {
                let mut message = String::from("Parse error");
                if let Some(path) = &err.path {
                    message.push_str(&format!(" in {}", path.display()));
                }
                match (err.line, err.column) {
                    (Some(line), Some(col)) => {
                        message.push_str(&format!(" at line {}, column {}", line, col))
                    }
                    (Some(line), None) => message.push_str(&format!(" at line {}", line)),
                    _ => {}
                }
                format!("{}: {}", message, err.message)
            }
            Self::FormattingError(err) => match err {
                FormattingError::EmptyInput => {
                    "Empty input: there are no records or fields to derive a CSV header from".to_string()
                }
                FormattingError::MissingField { .. } => format!("Write error: {}", err),
                FormattingError::Serialization { .. } => format!("Unexpected error: {}", err),
            },
            Self::Conversion { kind, .. } => match kind {
                ConversionErrorKind::Configuration { .. } => format!("Unexpected error: {}", kind),
                _ => kind.to_string(),
            },
            Self::Other(err) => {
                format!("Unexpected error: {}", err)
            }
        }
    }
}

/// Input parsing errors for either format
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub line: Option<usize>,
    pub column: Option<usize>,
    pub path: Option<PathBuf>,
}

impl ParseError {
    pub fn new(message: String, line: Option<usize>, column: Option<usize>) -> Self {
        Self {
            message,
            line,
            column,
            path: None,
        }
    }

    pub fn with_path(mut self, path: &Path) -> Self {
        self.path = Some(path.to_path_buf());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(line) = self.line {
            write!(f, " at line {}", line)?;
            if let Some(col) = self.column {
                write!(f, ", column {}", col)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Output formatting errors
#[derive(Debug, thiserror::Error)]
pub enum FormattingError {
    #[error("no records or fields to write, cannot derive a header")]
    EmptyInput,

    #[error("record {row} is missing field '{field}' present in the header")]
    MissingField { row: usize, field: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl FormattingError {
    pub fn missing_field(row: usize, field: String) -> Self {
        Self::MissingField { row, field }
    }

    pub fn serialization(message: String) -> Self {
        Self::Serialization { message }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
