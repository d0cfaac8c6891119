//! Command-line interface module

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::conversion::{ConversionConfig, DelimiterType, LineTerminator};
use crate::error::{ConversionError, ConversionResult};

pub mod logging;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "tabconv")]
#[command(about = "Convert a CSV file to JSON or a JSON file to CSV")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// File to convert (.csv or .json)
    #[arg()]
    pub filename: PathBuf,

    /// Target format: csv or json (case-insensitive, leading dot allowed)
    #[arg()]
    pub format: String,

    /// Directory for the converted file (default: current directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Spaces per indentation level in JSON output (0-8, 0 = compact)
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(0..=8))]
    pub indent: u8,

    /// CSV field delimiter
    #[arg(long, value_enum, default_value_t = Delimiter::Comma)]
    pub delimiter: Delimiter,

    /// CSV line ending
    #[arg(long, value_enum, default_value_t = LineEnding::Platform)]
    pub line_ending: LineEnding,

    /// Write to a temporary file and rename it into place
    #[arg(long)]
    pub atomic: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Delimiter types for CLI
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Delimiter {
    #[value(name = "comma", alias = ",")]
    Comma,
    #[value(name = "tab", alias = "\t")]
    Tab,
    #[value(name = "pipe", alias = "|")]
    Pipe,
}

impl From<Delimiter> for DelimiterType {
    fn from(delimiter: Delimiter) -> Self {
        match delimiter {
            Delimiter::Comma => DelimiterType::Comma,
            Delimiter::Tab => DelimiterType::Tab,
            Delimiter::Pipe => DelimiterType::Pipe,
        }
    }
}

/// Line endings for CLI
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum LineEnding {
    Platform,
    Lf,
    Crlf,
}

impl From<LineEnding> for LineTerminator {
    fn from(ending: LineEnding) -> Self {
        match ending {
            LineEnding::Platform => LineTerminator::Platform,
            LineEnding::Lf => LineTerminator::Lf,
            LineEnding::Crlf => LineTerminator::CrLf,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub conversion_config: ConversionConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConversionResult<Self> {
        let conversion_config = Self::create_conversion_config(&args)?;

        Ok(Self {
            args,
            conversion_config,
        })
    }

    fn create_conversion_config(args: &Args) -> ConversionResult<ConversionConfig> {
        let config = ConversionConfig {
            indent_size: args.indent,
            delimiter: args.delimiter.into(),
            line_terminator: args.line_ending.into(),
            output_dir: args.output_dir.clone(),
            atomic_write: args.atomic,
        };

        config.validate()?;
        Ok(config)
    }
}

/// Print the one-line error report for a failed run
pub fn handle_error(error: &ConversionError) {
    eprintln!("{}", error.user_message());
}
