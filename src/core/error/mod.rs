use crate::core::types::{ErrorCategory, ErrorSeverity};
use std::collections::BTreeMap;

#[derive(Debug)]
pub struct AppError {
    pub category: ErrorCategory,
    pub severity: ErrorSeverity,
    pub code: String,
    pub message: String,
    pub context: BTreeMap<String, String>,
    pub recovery_suggestions: Vec<String>,
    pub source: Option<anyhow::Error>,
}

impl AppError {
    pub fn new<T: Into<String>>(category: ErrorCategory, message: T) -> Self {
        AppError {
            category,
            severity: ErrorSeverity::Error,
            code: default_code(category).to_string(),
            message: message.into(),
            context: BTreeMap::new(),
            recovery_suggestions: default_suggestions(category),
            source: None,
        }
    }

    /// Non-fatal variant of [`AppError::new`].
    pub fn warning<T: Into<String>>(category: ErrorCategory, message: T) -> Self {
        AppError {
            severity: ErrorSeverity::Warning,
            ..AppError::new(category, message)
        }
    }

    pub fn with_source<T: Into<String>>(
        category: ErrorCategory,
        message: T,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        let mut error = AppError::new(category, message);
        error.source = Some(anyhow::anyhow!(source));
        error
    }

    pub fn with_context<T: Into<String>>(mut self, context: T) -> Self {
        self.context.insert("context".to_string(), context.into());
        self
    }

    pub fn with_code<T: Into<String>>(mut self, code: T) -> Self {
        self.code = code.into();
        self
    }

    pub fn severity(&self) -> ErrorSeverity {
        self.severity
    }

    pub fn add_context(&mut self, key: &str, value: &str) {
        self.context.insert(key.to_string(), value.to_string());
    }
}

fn default_code(category: ErrorCategory) -> &'static str {
    match category {
        ErrorCategory::FileNotFound => "FILE_NOT_FOUND",
        ErrorCategory::ParseError => "PARSE_ERROR",
        ErrorCategory::WriteError => "WRITE_ERROR",
        ErrorCategory::IoError => "IO_ERROR",
        ErrorCategory::SerializationError => "SERIALIZATION_ERROR",
        ErrorCategory::ConfigError => "CONFIG_ERROR",
        ErrorCategory::InternalError => "INTERNAL_ERROR",
    }
}

fn default_suggestions(category: ErrorCategory) -> Vec<String> {
    let suggestion = match category {
        ErrorCategory::FileNotFound => "Check the --input path",
        ErrorCategory::ParseError => "Make sure the input file holds a single JSON object",
        ErrorCategory::WriteError => {
            "Check that the --output directory exists and is writable"
        }
        ErrorCategory::IoError => "Check file permissions and paths",
        ErrorCategory::ConfigError => "Check .camflow/logging.toml and CAMFLOW_LOG_* variables",
        ErrorCategory::SerializationError | ErrorCategory::InternalError => return vec![],
    };
    vec![suggestion.to_string()]
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.category, self.message)?;
        if !self.context.is_empty() {
            write!(f, " (Context: {:?})", self.context)?;
        }
        if let Some(ref source) = self.source {
            write!(f, "\nCaused by: {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {}

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        AppError {
            category: ErrorCategory::InternalError,
            severity: ErrorSeverity::Error,
            code: "ANYHOW_ERROR".to_string(),
            message: e.to_string(),
            context: BTreeMap::new(),
            recovery_suggestions: vec!["Check the error details".to_string()],
            source: Some(e),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError {
            category: ErrorCategory::IoError,
            severity: ErrorSeverity::Error,
            code: "IO_ERROR".to_string(),
            message: e.to_string(),
            context: BTreeMap::new(),
            recovery_suggestions: vec!["Check file permissions and paths".to_string()],
            source: Some(anyhow::anyhow!(e)),
        }
    }
}

pub trait ErrorReporter {
    fn report_error(&self, error: &AppError);
    fn report_warning(&self, message: &str, context: Option<String>);
}

pub struct DefaultErrorReporter;

impl DefaultErrorReporter {
    pub fn new() -> Self {
        DefaultErrorReporter
    }
}

impl Default for DefaultErrorReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorReporter for DefaultErrorReporter {
    fn report_error(&self, error: &AppError) {
        eprintln!("[{}] {}: {}", error.severity, error.code, error.message);
        if !error.context.is_empty() {
            eprintln!("  Context: {:?}", error.context);
        }
        if let Some(ref source) = error.source {
            eprintln!("  Caused by: {}", source);
        }
        for suggestion in &error.recovery_suggestions {
            eprintln!("  Hint: {}", suggestion);
        }
    }

    fn report_warning(&self, message: &str, context: Option<String>) {
        eprintln!("[WARNING] {}", message);
        if let Some(ref ctx) = context {
            eprintln!("  Context: {}", ctx);
        }
    }
}
