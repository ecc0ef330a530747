#![allow(clippy::result_large_err)]

use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use crate::utils::serialization::{FileSerializer, FileUtils, YamlSerializer};
use camflow_types::ProjectDocument;
use std::io;
use std::path::Path;

/// Serialize `project` as YAML and atomically replace `path` with it.
///
/// The destination is either fully written or left as it was; missing directories are reported
/// as [`ErrorCategory::WriteError`] rather than created.
pub fn write_project(project: &ProjectDocument, path: &Path) -> Result<(), AppError> {
    FileUtils
        .save_to_file(path, project, &YamlSerializer)
        .map_err(|err| classify_write_error(path, err))?;
    tracing::info!(path = %path.display(), "project file written");
    Ok(())
}

fn classify_write_error(path: &Path, err: anyhow::Error) -> AppError {
    let mut error = match err.downcast_ref::<io::Error>() {
        Some(io_err) => AppError::new(
            ErrorCategory::WriteError,
            format!("failed to write {}: {}", path.display(), io_err),
        ),
        None => AppError::new(
            ErrorCategory::SerializationError,
            format!("failed to encode project as YAML: {}", err),
        ),
    };
    error.add_context("path", &path.display().to_string());
    error
}
