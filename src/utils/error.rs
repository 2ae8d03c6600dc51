use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    SpreadsheetError(#[from] calamine::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("No file containing '{pattern}' found in {dir}")]
    FileNotFound { pattern: String, dir: String },

    #[error("Unsupported file format: {path}")]
    UnsupportedFormat { path: String },

    #[error("{cohort} column index {index} is out of range ({available} columns available)")]
    ColumnOutOfRange {
        cohort: String,
        index: usize,
        available: usize,
    },

    #[error("{cohort} column '{column}' not found")]
    ColumnNotFound { cohort: String, column: String },

    #[error("{cohort} table has no column whose header contains 'Name'")]
    NameColumnMissing { cohort: String },

    #[error("{cohort} survey produced no people")]
    EmptyCohort { cohort: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration parse error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Interactive shell error: {message}")]
    ShellError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Format,
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MatchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MatchError::FileNotFound { .. } => ErrorCategory::Input,
            MatchError::CsvError(_)
            | MatchError::SpreadsheetError(_)
            | MatchError::UnsupportedFormat { .. } => ErrorCategory::Format,
            MatchError::ColumnOutOfRange { .. }
            | MatchError::ColumnNotFound { .. }
            | MatchError::InvalidConfigValueError { .. }
            | MatchError::MissingConfigError { .. }
            | MatchError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            MatchError::NameColumnMissing { .. } | MatchError::EmptyCohort { .. } => {
                ErrorCategory::Data
            }
            MatchError::IoError(_) | MatchError::ShellError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Format | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Exit code for the binaries, derived from severity.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MatchError::FileNotFound { pattern, dir } => {
                format!("Could not find a survey file matching '{}' in '{}'", pattern, dir)
            }
            MatchError::UnsupportedFormat { path } => {
                format!("'{}' is not a CSV or spreadsheet file", path)
            }
            MatchError::ColumnOutOfRange {
                cohort,
                index,
                available,
            } => format!(
                "The {} survey has only {} usable columns, column {} does not exist",
                cohort, available, index
            ),
            MatchError::ColumnNotFound { cohort, column } => {
                format!("The {} survey has no column named '{}'", cohort, column)
            }
            MatchError::NameColumnMissing { cohort } => {
                format!("The {} survey has no name column", cohort)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MatchError::FileNotFound { .. } => {
                "Check --data-dir and the --mentee-file / --mentor-file substrings (matching is case-sensitive)"
            }
            MatchError::UnsupportedFormat { .. } => {
                "Export the survey responses as .csv or .xlsx"
            }
            MatchError::ColumnOutOfRange { .. } | MatchError::ColumnNotFound { .. } => {
                "Column indices are zero-based and exclude the leading timestamp column; pass --no-index-column to count it"
            }
            MatchError::NameColumnMissing { .. } => {
                "Rename the name column so its header contains 'Name', or pass --name-column"
            }
            MatchError::EmptyCohort { .. } => "Make sure the survey file has response rows",
            MatchError::CsvError(_) | MatchError::SpreadsheetError(_) => {
                "Re-export the file and check that it opens in a spreadsheet application"
            }
            MatchError::InvalidConfigValueError { .. }
            | MatchError::MissingConfigError { .. }
            | MatchError::ConfigValidationError { .. } => {
                "Review the configuration values and try again"
            }
            MatchError::IoError(_) => "Check file permissions and available disk space",
            MatchError::ShellError { .. } => "Run without --interactive",
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
