use serde::{Deserialize, Serialize};

/// Error category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// The input path does not resolve to a file.
    FileNotFound,
    /// The input is not a valid JSON object.
    ParseError,
    /// The destination could not be written.
    WriteError,
    /// Any other read failure (permissions, directories).
    IoError,
    SerializationError,
    ConfigError,
    InternalError,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Error severity enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Error,
    /// Reported, but the command still completes.
    Warning,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Warning => write!(f, "WARNING"),
        }
    }
}
