use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
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
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PortfolioError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PortfolioError::IoError(_) => ErrorSeverity::Critical,
            PortfolioError::SerializationError(_) => ErrorSeverity::Medium,
            PortfolioError::ConfigValidationError { .. }
            | PortfolioError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PortfolioError::IoError(e) => format!("Could not read or write a file: {}", e),
            PortfolioError::SerializationError(e) => {
                format!("Could not serialize the content record: {}", e)
            }
            PortfolioError::ConfigValidationError { field, message } => {
                format!("The content file is invalid ({}): {}", field, message)
            }
            PortfolioError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for {}: {}", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PortfolioError::IoError(_) => {
                "Check that the content file exists and the output directory is writable"
            }
            PortfolioError::SerializationError(_) => "Re-run with --verbose to inspect the record",
            PortfolioError::ConfigValidationError { .. } => {
                "Compare the file against content/portfolio.toml"
            }
            PortfolioError::InvalidConfigValueError { .. } => {
                "Fix the reported field in the content file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
