pub mod config;
pub mod layers;

pub use layers::console::ConsoleOutput;

use crate::logging::config::LoggingConfig;
use crate::logging::layers::{console, file};
use crate::Result;
use anyhow::{anyhow, Context};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::Registry;

static LOGGER_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Keeps logging sinks active for the duration of the command.
pub struct LoggingGuard {
    _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
    console_output: ConsoleOutput,
    log_file_path: Option<PathBuf>,
}

impl LoggingGuard {
    /// Returns the console output configuration used during initialization.
    pub fn console_output(&self) -> ConsoleOutput {
        self.console_output
    }

    /// Returns the log file path backing the file sink, if enabled.
    pub fn log_file_path(&self) -> Option<&Path> {
        self.log_file_path.as_deref()
    }
}

/// Initialize the logging framework for this process.
///
/// Configuration is read from `.camflow/logging.toml` under the current directory plus
/// `CAMFLOW_LOG_*` overrides; `RUST_LOG` takes precedence over the configured level. Errors when
/// invoked more than once per process.
pub fn init() -> Result<LoggingGuard> {
    if LOGGER_INITIALIZED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Err(anyhow!("logging already initialized"));
    }

    let base_dir = env::current_dir().ok();
    let config = LoggingConfig::load(base_dir.as_deref())?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.default_level))
        .context("failed to configure tracing level")?;
    let log_file_path = file::log_file_path(&config, base_dir.as_deref())?;
    type BaseRegistry = Registry;
    type FileSubscriber = file::FileLayerStack<BaseRegistry>;

    let (file_layer, file_guard) = file::file_layer::<BaseRegistry>(log_file_path.as_deref())?;

    let subscriber = tracing_subscriber::registry();
    let subscriber = subscriber.with(file_layer);

    let console_layer = console::console_layer::<FileSubscriber>(config.console_output);
    let subscriber = subscriber.with(console_layer);

    let subscriber = subscriber.with(env_filter);
    subscriber
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
        console_output: config.console_output,
        log_file_path,
    })
}
