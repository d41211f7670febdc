use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("TOML rendering error: {0}")]
    TomlRenderError(#[from] toml::ser::Error),

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
    Io,
    Format,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl QuoteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            QuoteError::IoError(_) => ErrorCategory::Io,
            QuoteError::SerializationError(_)
            | QuoteError::CsvError(_)
            | QuoteError::TomlParseError(_)
            | QuoteError::TomlRenderError(_) => ErrorCategory::Format,
            QuoteError::ConfigValidationError { .. }
            | QuoteError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            QuoteError::IoError(_) => ErrorSeverity::Critical,
            QuoteError::TomlRenderError(_) | QuoteError::CsvError(_) => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            QuoteError::IoError(_) => {
                "Check that the input file exists and is readable".to_string()
            }
            QuoteError::SerializationError(_) => {
                "Make sure the answers or request file is valid JSON".to_string()
            }
            QuoteError::CsvError(_) => "Retry with --format json or --format text".to_string(),
            QuoteError::TomlParseError(_) | QuoteError::TomlRenderError(_) => {
                "Make sure the pricing file is valid TOML".to_string()
            }
            QuoteError::ConfigValidationError { field, .. }
            | QuoteError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the pricing file", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not read input: {}", self),
            ErrorCategory::Format => format!("Input could not be parsed: {}", self),
            ErrorCategory::Configuration => format!("Pricing configuration is invalid: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;
