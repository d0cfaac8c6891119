//! Conversion dispatch: pick reader, writer and output path for a file

use crate::conversion::config::ConversionConfig;
use crate::conversion::format::{normalize_format, source_extension, Format};
use crate::error::{ConversionError, ConversionResult};
use crate::{formatter, parser};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// What a conversion request resolves to before any file is touched
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionPlan {
    Convert {
        from: Format,
        to: Format,
        output: PathBuf,
    },
    /// The file is already in the requested format
    Unchanged,
}

/// Details of a completed conversion
#[derive(Debug, Clone)]
pub struct ConversionSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub from: Format,
    pub to: Format,
    pub record_count: usize,
    pub processing_time_ms: u64,
}

#[derive(Debug, Clone)]
pub enum ConversionOutcome {
    Converted(ConversionSummary),
    Unchanged,
}

impl ConversionOutcome {
    pub fn output_path(&self) -> Option<&Path> {
        match self {
            ConversionOutcome::Converted(summary) => Some(&summary.output),
            ConversionOutcome::Unchanged => None,
        }
    }
}

/// Main conversion engine
pub struct ConversionEngine {
    config: ConversionConfig,
}

impl ConversionEngine {
    /// Create a new conversion engine
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Decide what converting `path` to `requested` means.
    ///
    /// `json -> csv` and `csv -> json` convert; a request matching the
    /// source extension is a no-op; anything else is unsupported.
    pub fn plan(&self, path: &Path, requested: &str) -> ConversionResult<ConversionPlan> {
        let target = normalize_format(requested);

        match (Format::from_path(path), Format::from_extension(&target)) {
            (Some(from), Some(to)) if from != to => Ok(ConversionPlan::Convert {
                from,
                to,
                output: self.output_path(path, to),
            }),
            _ if source_extension(path) == target => Ok(ConversionPlan::Unchanged),
            _ => Err(ConversionError::unsupported_format(target)),
        }
    }

    /// Convert `path` to the `requested` format, writing a sibling file with
    /// the same base name into the configured output directory
    pub fn convert(&self, path: &Path, requested: &str) -> ConversionResult<ConversionOutcome> {
        self.config.validate()?;

        let (from, to, output) = match self.plan(path, requested)? {
            ConversionPlan::Convert { from, to, output } => (from, to, output),
            ConversionPlan::Unchanged => {
                debug!(path = %path.display(), requested, "already in requested format, nothing to do");
                return Ok(ConversionOutcome::Unchanged);
            }
        };

        let start_time = Instant::now();
        debug!(input = %path.display(), output = %output.display(), %from, %to, "converting");

        let records = parser::read(path, from, &self.config)?;
        formatter::write(&records, &output, to, &self.config)?;

        let summary = ConversionSummary {
            input: path.to_path_buf(),
            output,
            from,
            to,
            record_count: records.len(),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        };
        info!(
            input = %summary.input.display(),
            output = %summary.output.display(),
            records = summary.record_count,
            elapsed_ms = summary.processing_time_ms,
            "conversion complete"
        );

        Ok(ConversionOutcome::Converted(summary))
    }

    fn output_path(&self, input: &Path, to: Format) -> PathBuf {
        let name = input
            .file_name()
            .map(|name| Path::new(name).with_extension(to.extension()))
            .unwrap_or_default();

        match &self.config.output_dir {
            Some(dir) => dir.join(name),
            None => name,
        }
    }
}

/// Convert a file with the default configuration
pub fn convert_file(path: impl AsRef<Path>, format: &str) -> ConversionResult<ConversionOutcome> {
    convert_file_with_config(path, format, &ConversionConfig::default())
}

/// Convert a file with a custom configuration
pub fn convert_file_with_config(
    path: impl AsRef<Path>,
    format: &str,
    config: &ConversionConfig,
) -> ConversionResult<ConversionOutcome> {
    let engine = ConversionEngine::new(config.clone());
    engine.convert(path.as_ref(), format)
}
