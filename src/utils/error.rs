use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeederError {
    #[error("Failed to read {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid input: {message}")]
    InputFormatError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Configuration,
}

impl SeederError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SeederError::ReadError { .. }
            | SeederError::SerializationError(_)
            | SeederError::InputFormatError { .. } => ErrorCategory::Input,
            SeederError::WriteError { .. } | SeederError::IoError(_) | SeederError::CsvError(_) => {
                ErrorCategory::Output
            }
            SeederError::ConfigValidationError { .. }
            | SeederError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SeederError::ReadError { .. } => {
                "Check that the input file exists and is readable, or pass --input"
            }
            SeederError::SerializationError(_) | SeederError::InputFormatError { .. } => {
                "The input must be a JSON array of customer objects"
            }
            SeederError::WriteError { .. } | SeederError::IoError(_) => {
                "Check that the output directory is writable, or pass --output"
            }
            SeederError::CsvError(_) => "Check the report path passed with --report",
            SeederError::ConfigValidationError { .. }
            | SeederError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SeederError>;
