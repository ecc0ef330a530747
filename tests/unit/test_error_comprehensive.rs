use camflow::core::error::{AppError, DefaultErrorReporter, ErrorReporter};
use camflow::core::types::{ErrorCategory, ErrorSeverity};

#[test]
fn test_error_creation_all_categories() {
    let categories = vec![
        (ErrorCategory::FileNotFound, "FILE_NOT_FOUND"),
        (ErrorCategory::ParseError, "PARSE_ERROR"),
        (ErrorCategory::WriteError, "WRITE_ERROR"),
        (ErrorCategory::IoError, "IO_ERROR"),
        (ErrorCategory::SerializationError, "SERIALIZATION_ERROR"),
        (ErrorCategory::ConfigError, "CONFIG_ERROR"),
        (ErrorCategory::InternalError, "INTERNAL_ERROR"),
    ];

    for (category, code) in categories {
        let error = AppError::new(category, "test message");
        assert_eq!(error.category, category);
        assert_eq!(error.code, code);
        assert_eq!(error.message, "test message");
        assert_eq!(error.severity(), ErrorSeverity::Error);
        assert!(error.context.is_empty());
        assert!(error.source.is_none());
    }
}

#[test]
fn test_user_facing_categories_carry_hints() {
    for category in [
        ErrorCategory::FileNotFound,
        ErrorCategory::ParseError,
        ErrorCategory::WriteError,
    ] {
        let error = AppError::new(category, "x");
        assert_eq!(error.recovery_suggestions.len(), 1, "{category}");
    }
}

#[test]
fn test_error_add_context() {
    let mut error = AppError::new(ErrorCategory::WriteError, "cannot write");

    error.add_context("path", "/jobs/part.yml");
    error.add_context("stage", "writer");

    assert_eq!(
        error.context.get("path"),
        Some(&"/jobs/part.yml".to_string())
    );
    assert_eq!(error.context.get("stage"), Some(&"writer".to_string()));
    assert_eq!(error.context.len(), 2);
}

#[test]
fn test_error_display() {
    let mut error =
        AppError::new(ErrorCategory::ParseError, "invalid input").with_code("PARSE-001");
    error.add_context("path", "job.json");

    let display = format!("{}", error);
    assert!(display.contains("PARSE-001"));
    assert!(display.contains("ParseError"));
    assert!(display.contains("invalid input"));
    assert!(display.contains("job.json"));
}

#[test]
fn test_with_context_builder() {
    let error = AppError::new(ErrorCategory::FileNotFound, "missing").with_context("loader");
    assert_eq!(error.context.get("context"), Some(&"loader".to_string()));
}

#[test]
fn test_default_error_reporter() {
    let reporter = DefaultErrorReporter::new();

    let error = AppError::new(ErrorCategory::FileNotFound, "test error");

    reporter.report_error(&error);
    reporter.report_warning("test warning", Some("context".to_string()));
}

#[test]
fn test_warning_severity() {
    let warning = AppError::warning(ErrorCategory::ParseError, "no recognized keys")
        .with_code("NO_RECOGNIZED_KEYS");

    assert_eq!(warning.severity(), ErrorSeverity::Warning);
    assert_eq!(warning.category, ErrorCategory::ParseError);
    assert!(format!("{}", warning).starts_with("[NO_RECOGNIZED_KEYS] ParseError"));

    DefaultErrorReporter::new().report_error(&warning);
}

#[test]
fn test_error_from_anyhow() {
    let anyhow_error = anyhow::anyhow!("anyhow error message");
    let app_error = AppError::from(anyhow_error);

    assert_eq!(app_error.category, ErrorCategory::InternalError);
    assert_eq!(app_error.message, "anyhow error message");
    assert_eq!(app_error.code, "ANYHOW_ERROR");
}

#[test]
fn test_error_from_io_error() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let app_error = AppError::from(io_error);

    assert_eq!(app_error.category, ErrorCategory::IoError);
    assert!(app_error.message.contains("denied"));
    assert!(app_error.source.is_some());
}
