//! CSV/JSON conversion module
//!
//! This module contains the dispatch logic, configuration, and format
//! identification.

pub mod config;
pub mod engine;
pub mod format;

pub use config::{ConversionConfig, DelimiterType, LineTerminator};

pub use engine::{
    convert_file, convert_file_with_config, ConversionEngine, ConversionOutcome, ConversionPlan,
    ConversionSummary,
};

pub use format::{normalize_format, source_extension, Format};
