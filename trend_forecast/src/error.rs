//! Error types for the trend_forecast crate

use thiserror::Error;
use trend_math::MathError;

/// Custom error types for the trend_forecast crate
///
/// Every variant is terminal for a run. The `Display` text of each variant is
/// the exact line the command-line tool writes to stderr.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Wrong number of command-line arguments; holds the program name
    #[error("Usage: {0} <csv_file>")]
    Usage(String),

    /// The file could not be opened, read or parsed as delimited text
    #[error("Error loading CSV: {0}")]
    DataLoad(String),

    /// Required columns are absent; holds the missing column names
    #[error("Error: CSV missing required columns (_time, _value): missing {}", .0.join(", "))]
    Schema(Vec<String>),

    /// At least one timestamp failed the ISO-8601 parse
    #[error("Error parsing timestamps: {0}")]
    TimestampParse(String),

    /// Any other failure while building the dataset, fitting or predicting
    #[error("Error processing CSV: {0}")]
    Processing(String),
}

impl ForecastError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<std::io::Error> for ForecastError {
    fn from(err: std::io::Error) -> Self {
        ForecastError::DataLoad(err.to_string())
    }
}

impl From<csv::Error> for ForecastError {
    fn from(err: csv::Error) -> Self {
        ForecastError::DataLoad(err.to_string())
    }
}

impl From<MathError> for ForecastError {
    fn from(err: MathError) -> Self {
        ForecastError::Processing(err.to_string())
    }
}
