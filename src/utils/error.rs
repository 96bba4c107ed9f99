use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Invalid argument: `{parameter}` must be provided")]
    InvalidArgument { parameter: String },

    #[error("No result available: {message}")]
    EmptyResult { message: String },

    #[error("Fallback action failed: {message}")]
    FallbackError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for `{field}`: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value `{value}` for `{field}`: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Argument,
    Execution,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FlowError {
    pub fn invalid_argument(parameter: &str) -> Self {
        FlowError::InvalidArgument {
            parameter: parameter.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            FlowError::InvalidArgument { .. } => ErrorCategory::Argument,
            FlowError::EmptyResult { .. } | FlowError::FallbackError { .. } => {
                ErrorCategory::Execution
            }
            FlowError::IoError(_) | FlowError::SerializationError(_) | FlowError::CsvError(_) => {
                ErrorCategory::Io
            }
            FlowError::ConfigError { .. }
            | FlowError::ConfigValidationError { .. }
            | FlowError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Execution => match self {
                // a deliberate mismatch reported by the caller's own fallback
                FlowError::FallbackError { .. } => ErrorSeverity::Medium,
                _ => ErrorSeverity::High,
            },
            ErrorCategory::Argument | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FlowError::InvalidArgument { parameter } => format!(
                "Supply a value for `{}`; check that the function name is registered",
                parameter
            ),
            FlowError::EmptyResult { .. } => {
                "Provide an input document holding a JSON value or array".to_string()
            }
            FlowError::FallbackError { .. } => {
                "The input did not hold exactly one element; adjust the input or set on_mismatch = \"fallback\"".to_string()
            }
            FlowError::IoError(_) => "Verify the file paths exist and are readable".to_string(),
            FlowError::SerializationError(_) => {
                "Input must be a JSON array of values".to_string()
            }
            FlowError::CsvError(_) => "Check the output path and format".to_string(),
            FlowError::ConfigError { .. } | FlowError::ConfigValidationError { .. } => {
                "Review the TOML configuration file syntax".to_string()
            }
            FlowError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of `{}` in the configuration", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Argument => format!("A required function was not provided: {}", self),
            ErrorCategory::Execution => format!("The flow could not produce a value: {}", self),
            ErrorCategory::Io => format!("Could not read or write data: {}", self),
            ErrorCategory::Configuration => format!("The configuration is invalid: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, FlowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_names_parameter() {
        let err = FlowError::invalid_argument("predicate");
        assert_eq!(err.to_string(), "Invalid argument: `predicate` must be provided");
        assert_eq!(err.category(), ErrorCategory::Argument);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("predicate"));
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = FlowError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_fallback_error_is_medium() {
        let err = FlowError::FallbackError {
            message: "expected one element, got 3".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("got 3"));
    }
}
