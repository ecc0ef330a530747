#![allow(clippy::result_large_err)]

use crate::core::{
    build_project, load_parameters, write_project, AppError, DefaultErrorReporter, ErrorCategory,
    ErrorReporter,
};
use std::path::Path;

/// Load `input`, build the project document and write it to `output`.
pub fn convert(input: &Path, output: &Path) -> Result<(), AppError> {
    tracing::info!(input = %input.display(), output = %output.display(), "converting");

    let params = load_parameters(input)?;
    if params.provided_keys().is_empty() {
        let mut warning = AppError::warning(
            ErrorCategory::ParseError,
            format!(
                "no recognized milling parameters in {}; every parameter-derived field will be null",
                input.display()
            ),
        )
        .with_code("NO_RECOGNIZED_KEYS");
        warning.recovery_suggestions =
            vec!["Run `camflow --help` for the recognized input keys".to_string()];
        DefaultErrorReporter::new().report_error(&warning);
    }

    let project = build_project(&params);
    write_project(&project, output)?;

    println!("Data written to {}", output.display());
    Ok(())
}
