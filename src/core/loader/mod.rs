#![allow(clippy::result_large_err)]

use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use crate::utils::serialization::{FileSerializer, FileUtils, JsonSerializer};
use camflow_types::MillingParameters;
use serde_json::Value;
use std::io;
use std::path::Path;

/// Read the milling parameter JSON at `path`.
///
/// A path that does not resolve yields [`ErrorCategory::FileNotFound`]; content that is not a
/// JSON object yields [`ErrorCategory::ParseError`]. Keys are never required.
pub fn load_parameters(path: &Path) -> Result<MillingParameters, AppError> {
    let document: Value = FileUtils
        .load_from_file(path, &JsonSerializer)
        .map_err(|err| classify_read_error(path, err))?;
    let params = parameters_from_value(document).map_err(|mut err| {
        err.add_context("path", &path.display().to_string());
        err
    })?;

    tracing::debug!(
        path = %path.display(),
        provided = ?params.provided_keys(),
        "loaded milling parameters"
    );
    Ok(params)
}

/// Interpret an already decoded JSON document as milling parameters.
pub fn parameters_from_value(document: Value) -> Result<MillingParameters, AppError> {
    let map = match document {
        Value::Object(map) => map,
        other => {
            return Err(AppError::new(
                ErrorCategory::ParseError,
                format!("expected a JSON object, found {}", json_kind(&other)),
            ))
        }
    };
    serde_json::from_value(Value::Object(map)).map_err(|err| {
        AppError::with_source(
            ErrorCategory::ParseError,
            "failed to read milling parameters",
            Box::new(err),
        )
    })
}

fn classify_read_error(path: &Path, err: anyhow::Error) -> AppError {
    let (category, message) = match err.downcast_ref::<io::Error>() {
        Some(io_err) if io_err.kind() == io::ErrorKind::NotFound => (
            ErrorCategory::FileNotFound,
            format!("input file {} not found", path.display()),
        ),
        Some(io_err) => (
            ErrorCategory::IoError,
            format!("failed to read {}: {}", path.display(), io_err),
        ),
        None => (
            ErrorCategory::ParseError,
            format!("{} is not valid JSON: {}", path.display(), err),
        ),
    };
    let mut error = AppError::new(category, message);
    error.add_context("path", &path.display().to_string());
    error
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
