use clap::Parser;
use std::process::ExitCode;

use tabconv::cli::{handle_error, logging, Args, CliConfig};
use tabconv::conversion::{ConversionEngine, ConversionOutcome};

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init_cli_logger(args.verbose) {
        eprintln!("Unexpected error: failed to initialise logging: {}", e);
        return ExitCode::FAILURE;
    }

    let config = match CliConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            handle_error(&e);
            return ExitCode::FAILURE;
        }
    };

    let engine = ConversionEngine::new(config.conversion_config.clone());
    match engine.convert(&config.args.filename, &config.args.format) {
        Ok(ConversionOutcome::Converted(summary)) => {
            tracing::debug!(
                "converted {} records from {} to {}",
                summary.record_count,
                summary.input.display(),
                summary.output.display()
            );
            ExitCode::SUCCESS
        }
        Ok(ConversionOutcome::Unchanged) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(category = %e.category(), "conversion failed");
            handle_error(&e);
            ExitCode::FAILURE
        }
    }
}
