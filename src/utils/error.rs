use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("Invalid input for {operation}: {value} ({reason})")]
    InvalidInput {
        operation: String,
        value: String,
        reason: String,
    },

    #[error("Operation cancelled: {operation}")]
    Cancelled { operation: String },

    #[error("Failed to parse {what} from '{value}': {reason}")]
    ParseError {
        what: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
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
    Runtime,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a command that ended with this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,      // 警告，但成功
            ErrorSeverity::Medium => 2,   // 中斷或輸入格式錯誤
            ErrorSeverity::High => 1,     // 處理錯誤
            ErrorSeverity::Critical => 3, // 系統錯誤
        }
    }
}

impl ToolkitError {
    pub fn invalid_input(
        operation: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidInput {
            operation: operation.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn parse_error(what: impl Into<String>, value: impl Into<String>, reason: impl ToString) -> Self {
        Self::ParseError {
            what: what.into(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::ParseError { .. } | Self::SerializationError(_) => {
                ErrorCategory::Input
            }
            Self::Cancelled { .. } => ErrorCategory::Runtime,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 取消代表沒有結果，必須與成功區分
            Self::Cancelled { .. } | Self::SerializationError(_) | Self::ParseError { .. } => {
                ErrorSeverity::Medium
            }
            Self::InvalidInput { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidInput { operation, .. } => {
                format!("Pass a non-negative number to {}", operation)
            }
            Self::Cancelled { .. } => "Re-run the command and let it finish".to_string(),
            Self::ParseError { what, .. } => format!("Check the {} argument", what),
            Self::SerializationError(_) => {
                "Make sure the argument is valid JSON of the expected shape".to_string()
            }
            Self::ConfigValidationError { field, .. }
            | Self::InvalidConfigValueError { field, .. } => {
                format!("Fix '{}' in the configuration file or on the command line", field)
            }
            Self::IoError(_) => "Check that the file exists and is readable".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidInput { value, reason, .. } => {
                format!("Invalid input {}: {}", value, reason)
            }
            Self::Cancelled { operation } => format!("{} was cancelled", operation),
            Self::ParseError { what, value, .. } => format!("'{}' is not a valid {}", value, what),
            Self::SerializationError(e) => format!("Could not read JSON input: {}", e),
            Self::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            Self::InvalidConfigValueError { field, value, reason } => {
                format!("Configuration '{}' = '{}' is invalid: {}", field, value, reason)
            }
            Self::IoError(e) => format!("File system error: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolkitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_high_severity_input_error() {
        let err = ToolkitError::invalid_input("square", -1.0, "input must not be negative");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(
            err.to_string(),
            "Invalid input for square: -1 (input must not be negative)"
        );
    }

    #[test]
    fn test_cancelled_exits_non_zero() {
        let err = ToolkitError::Cancelled {
            operation: "square".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Runtime);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.severity().exit_code(), 2);
        assert_eq!(err.user_friendly_message(), "square was cancelled");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ErrorSeverity::Low.exit_code(), 0);
        assert_eq!(ErrorSeverity::High.exit_code(), 1);
        assert_eq!(ErrorSeverity::Critical.exit_code(), 3);
    }

    #[test]
    fn test_config_errors_point_at_field() {
        let err = ToolkitError::InvalidConfigValueError {
            field: "square.delay_ms".to_string(),
            value: "600000".to_string(),
            reason: "Value must be between 0 and 60000".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.recovery_suggestion().contains("square.delay_ms"));
    }
}
