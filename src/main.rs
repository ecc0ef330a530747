use camflow::cli::{self, Args};
use camflow::core::{AppError, DefaultErrorReporter, ErrorCategory, ErrorReporter};
use camflow::logging;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let reporter = DefaultErrorReporter::new();

    let _guard = match logging::init() {
        Ok(guard) => guard,
        Err(err) => {
            let error = AppError::new(
                ErrorCategory::ConfigError,
                format!("failed to initialize logging: {:#}", err),
            );
            reporter.report_error(&error);
            return ExitCode::FAILURE;
        }
    };

    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(code = %err.code, category = %err.category, "conversion failed");
            reporter.report_error(&err);
            ExitCode::FAILURE
        }
    }
}
