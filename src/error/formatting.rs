//! Error formatting utilities
//!
//! Provides error formatting functions for consistent error messages across
//! the CLI output and log lines.

use crate::Error;
use std::error::Error as StdError;

/// Format error for display
pub fn format_error(error: &Error) -> String {
    match error {
        Error::Config { field, message } => {
            format!("Configuration error in {}: {}", field, message)
        }

        Error::Validation {
            field,
            message,
            value,
        } => match value {
            Some(value) => format!(
                "Validation failed for {} (value '{}'): {}",
                field, value, message
            ),
            None => format!("Validation failed for {}: {}", field, message),
        },

        // Wrapped library errors already carry their own context
        other => other.to_string(),
    }
}

/// Format error for logging with full source chain
pub fn format_error_for_logging(error: &Error) -> String {
    let mut result = format_error(error);

    let mut source = error.source();
    while let Some(err) = source {
        result.push_str(&format!(" -> caused by: {}", err));
        source = err.source();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_config_error() {
        let error = Error::config("logging.level", "unknown level 'loud'");
        assert_eq!(
            format_error(&error),
            "Configuration error in logging.level: unknown level 'loud'"
        );
    }

    #[test]
    fn test_format_validation_error_with_value() {
        let error = Error::validation_with_value("R2_ENDPOINT", "not a valid URL", "not-a-url");
        let formatted = format_error(&error);
        assert!(formatted.contains("R2_ENDPOINT"));
        assert!(formatted.contains("not-a-url"));
    }

    #[test]
    fn test_format_error_for_logging_includes_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let error = Error::from(io);
        let formatted = format_error_for_logging(&error);
        assert!(formatted.contains("no such file"));
    }
}
