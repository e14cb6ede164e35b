use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    #[error("Input file is empty: {path}")]
    EmptyInput { path: String },

    #[error("Error reading input file {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing input file {path}: {source}")]
    ParseError {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Input file {path} is missing required column '{column}'")]
    MissingColumn { path: String, column: String },

    #[error("Invalid {field} '{value}' in {path} at line {line}: {reason}")]
    InvalidRecord {
        path: String,
        line: u64,
        field: String,
        value: String,
        reason: String,
    },

    #[error("Error writing report to {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

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
    Processing,
    Configuration,
}

impl AnalysisError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InputNotFound { .. }
            | Self::EmptyInput { .. }
            | Self::ReadError { .. }
            | Self::ParseError { .. }
            | Self::MissingColumn { .. }
            | Self::InvalidRecord { .. } => ErrorCategory::Input,
            Self::WriteError { .. } => ErrorCategory::Output,
            Self::ProcessingError { .. } => ErrorCategory::Processing,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// One-line message shown to the operator on stderr.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InputNotFound { path } => format!("Error: The file '{}' was not found.", path),
            Self::EmptyInput { path } => {
                format!("Error: The file '{}' is empty or has no data rows.", path)
            }
            Self::ReadError { path, source } => {
                format!("Error: Could not read '{}': {}", path, source)
            }
            Self::ParseError { path, source } => {
                format!("Error: Could not parse '{}': {}", path, source)
            }
            Self::WriteError { path, source } => {
                format!("Error: Could not write report to '{}': {}", path, source)
            }
            other => format!("Error: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InputNotFound { .. } => "Check the --input path or --base-dir",
            Self::EmptyInput { .. } => "Make sure the CSV file has a header row and at least one data row",
            Self::ReadError { .. } | Self::ParseError { .. } => {
                "Make sure the file is comma-separated UTF-8 text with consistent columns"
            }
            Self::MissingColumn { .. } => "The header must contain salary, occupation and email",
            Self::InvalidRecord { .. } => "Fix or remove the offending row and run again",
            Self::WriteError { .. } => "Make sure the output directory exists and is writable",
            Self::ProcessingError { .. } => "Check the input data",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Check the command line flags and the --config file"
            }
        }
    }

    /// Every error is terminal for the run.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
