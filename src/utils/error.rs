use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FuelError {
    #[error("Input source '{path}' is unavailable: {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line} is not a valid mass: '{content}' ({source})")]
    ParseError {
        line: usize,
        content: String,
        #[source]
        source: ParseIntError,
    },

    #[error("The {total} fuel total does not fit in a 64-bit integer")]
    TotalOverflow { total: &'static str },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
}

impl FuelError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FuelError::SourceUnavailable { .. }
            | FuelError::ParseError { .. }
            | FuelError::TotalOverflow { .. }
            | FuelError::IoError(_) => ErrorCategory::Input,
            FuelError::ConfigError { .. }
            | FuelError::ConfigValidationError { .. }
            | FuelError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Input => 2,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FuelError::SourceUnavailable { .. } => {
                "Check the input path, or pass --allow-missing-input to treat it as empty"
            }
            FuelError::ParseError { .. } => {
                "Make sure every line holds exactly one decimal integer"
            }
            FuelError::TotalOverflow { .. } => {
                "Check the input for masses far larger than any real module"
            }
            FuelError::IoError(_) => "Check that the input file is readable",
            FuelError::ConfigError { .. } | FuelError::ConfigValidationError { .. } => {
                "Check the TOML configuration file syntax"
            }
            FuelError::InvalidConfigValueError { .. } => {
                "Fix the reported configuration value and try again"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FuelError::SourceUnavailable { path, .. } => {
                format!("Cannot open input file '{}'", path)
            }
            FuelError::ParseError { line, content, .. } => {
                format!("Bad mass on line {}: '{}'", line, content)
            }
            FuelError::IoError(e) => format!("Failed while reading input: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FuelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories_and_exit_codes() {
        let missing = FuelError::SourceUnavailable {
            path: "input".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(missing.category(), ErrorCategory::Input);
        assert_eq!(missing.exit_code(), 2);

        let config = FuelError::ConfigError {
            message: "broken".to_string(),
        };
        assert_eq!(config.category(), ErrorCategory::Configuration);
        assert_eq!(config.exit_code(), 1);
    }

    #[test]
    fn test_parse_error_names_line() {
        let source = "abc".parse::<i64>().unwrap_err();
        let err = FuelError::ParseError {
            line: 3,
            content: "abc".to_string(),
            source,
        };
        assert!(err.to_string().contains("Line 3"));
        assert!(err.user_friendly_message().contains("'abc'"));
    }

    #[test]
    fn test_overflow_is_an_input_error() {
        let err = FuelError::TotalOverflow { total: "simple" };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("simple fuel total"));
    }
}
