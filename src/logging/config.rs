use crate::logging::layers::console::ConsoleOutput;
use crate::Result;
use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::filter::Directive;

const DEFAULT_LEVEL: &str = "info";

/// Resolved logging configuration after reading config files and env overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub log_dir: Option<PathBuf>,
    pub default_level: String,
    pub enable_file: bool,
    pub console_output: ConsoleOutput,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            default_level: DEFAULT_LEVEL.to_string(),
            enable_file: false,
            console_output: ConsoleOutput::default(),
        }
    }
}

impl LoggingConfig {
    /// Load configuration with deterministic precedence: defaults, config file, env overrides.
    pub fn load(base_dir: Option<&Path>) -> Result<Self> {
        let mut config = LoggingConfig::default();
        if let Some(base) = base_dir {
            if let Some(file_config) = Self::load_from_file(&Self::config_path(base))? {
                config.apply(file_config);
            }
        }
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Location of the optional logging config below `base_dir`.
    pub fn config_path(base_dir: &Path) -> PathBuf {
        base_dir.join(".camflow").join("logging.toml")
    }

    fn load_from_file(path: &Path) -> Result<Option<TomlLogging>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read logging config {}", path.display()))?;
        let parsed: TomlLogging = toml::from_str(&content)
            .with_context(|| format!("failed to parse logging config {}", path.display()))?;
        Ok(Some(parsed))
    }

    fn apply(&mut self, toml: TomlLogging) {
        if let Some(logging) = toml.logging {
            if let Some(log_dir) = logging.log_dir {
                self.log_dir = Some(PathBuf::from(log_dir));
            }
            if let Some(default_level) = logging.default_level {
                self.default_level = default_level;
            }
            if let Some(enable_file) = logging.enable_file {
                self.enable_file = enable_file;
            }
            if let Some(console_output) = logging.console_output {
                self.console_output = console_output;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(level) = env::var("CAMFLOW_LOG_LEVEL") {
            if !level.trim().is_empty() {
                self.default_level = level.trim().to_string();
            }
        }
        if let Ok(dir) = env::var("CAMFLOW_LOG_DIR") {
            if !dir.trim().is_empty() {
                self.log_dir = Some(PathBuf::from(dir));
                self.enable_file = true;
            }
        }
        if let Ok(output) = env::var("CAMFLOW_LOG_CONSOLE") {
            self.console_output = ConsoleOutput::from_str(&output).map_err(|err| anyhow!(err))?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        Directive::from_str(&self.default_level)
            .map_err(|_| anyhow!("logging.default_level must be a valid tracing directive"))?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct TomlLogging {
    pub logging: Option<TomlLoggingSection>,
}

#[derive(Debug, Deserialize)]
struct TomlLoggingSection {
    pub log_dir: Option<String>,
    pub default_level: Option<String>,
    pub enable_file: Option<bool>,
    #[serde(default)]
    pub console_output: Option<ConsoleOutput>,
}
