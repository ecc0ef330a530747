use crate::logging::config::LoggingConfig;
use crate::Result;
use anyhow::{anyhow, Context};
use dirs_next::home_dir;
use std::fs::{create_dir_all, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::{self as tracing_fmt, format, writer::BoxMakeWriter};
use tracing_subscriber::registry::LookupSpan;

const LOG_FILE_NAME: &str = "camflow.log";

/// Layer type produced by the file sink builder.
pub type FileFmtLayer<S> =
    tracing_fmt::Layer<S, format::DefaultFields, format::Format<format::Full>, BoxMakeWriter>;

/// Layer stack that already wraps the provided subscriber.
pub type FileLayerStack<S> = tracing_subscriber::layer::Layered<FileFmtLayer<S>, S>;

/// Path of the log file, or `None` when the file sink is disabled.
pub fn log_file_path(config: &LoggingConfig, base_dir: Option<&Path>) -> Result<Option<PathBuf>> {
    if !config.enable_file {
        return Ok(None);
    }
    let directory = resolve_log_dir(config, base_dir)?;
    Ok(Some(directory.join(LOG_FILE_NAME)))
}

/// Build a tracing layer that appends to `log_file` via a non-blocking writer.
///
/// Without a path the layer writes to a sink, which keeps the subscriber type identical either way.
pub fn file_layer<S>(log_file: Option<&Path>) -> Result<(FileFmtLayer<S>, Option<WorkerGuard>)>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    match log_file {
        Some(log_file) => {
            ensure_log_dir(log_file)?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)
                .with_context(|| format!("failed to open log file {}", log_file.display()))?;

            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            let writer = BoxMakeWriter::new(move || non_blocking.clone());
            Ok((make_layer(writer), Some(guard)))
        }
        None => Ok((make_layer(BoxMakeWriter::new(io::sink)), None)),
    }
}

fn make_layer<S>(writer: BoxMakeWriter) -> FileFmtLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    tracing_fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
}

fn ensure_log_dir(log_file: &Path) -> Result<()> {
    let directory = log_file.parent().ok_or_else(|| {
        anyhow!(
            "log file path {} has no parent directory",
            log_file.display()
        )
    })?;
    create_dir_all(directory)
        .with_context(|| format!("failed to create log directory {}", directory.display()))?;
    Ok(())
}

fn resolve_log_dir(config: &LoggingConfig, base_dir: Option<&Path>) -> Result<PathBuf> {
    let anchor = match base_dir {
        Some(base) => base.to_path_buf(),
        None => home_dir().ok_or_else(|| anyhow!("$HOME directory unavailable"))?,
    };
    let directory = match &config.log_dir {
        Some(custom) if custom.is_absolute() => custom.clone(),
        Some(custom) => anchor.join(custom),
        None => anchor.join(".camflow").join("logs"),
    };
    Ok(directory)
}
