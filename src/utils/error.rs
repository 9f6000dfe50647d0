use thiserror::Error;

use crate::core::target::SUPPORTED_EXERCISES;

#[derive(Error, Debug)]
pub enum StandardsError {
    #[error("Request failed: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("No standards data for exercise {name:?}")]
    UnsupportedExercise { name: String },

    #[error("Body weight {weight} is outside the covered bucket range {min}..={max}")]
    OutOfRangeWeight { weight: u32, min: u32, max: u32 },

    #[error("Threshold cell {text:?} at row {row}, column {column} has no leading integer")]
    MalformedCell {
        row: usize,
        column: usize,
        text: String,
    },

    #[error("Standards table is malformed: {reason}")]
    MalformedTable { reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value:?} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, StandardsError>;

impl StandardsError {
    /// Short message for end users; the Display impl stays developer-facing.
    pub fn user_friendly_message(&self) -> String {
        match self {
            StandardsError::FetchError(e) => {
                format!("The standards page could not be fetched: {}", e)
            }
            StandardsError::IoError(e) => format!("A file operation failed: {}", e),
            StandardsError::SerializationError(_) => {
                "The result could not be serialized.".to_string()
            }
            StandardsError::CsvError(_) => "The table could not be written as CSV.".to_string(),
            StandardsError::UnsupportedExercise { name } => {
                format!("Data on {} is not available.", name)
            }
            StandardsError::OutOfRangeWeight { weight, min, max } => format!(
                "A body weight of {} is outside the published table ({} to {}).",
                weight, min, max
            ),
            StandardsError::MalformedCell { text, .. } => format!(
                "The standards table contains an unreadable threshold cell: {:?}.",
                text
            ),
            StandardsError::MalformedTable { reason } => {
                format!("The standards table could not be used: {}.", reason)
            }
            StandardsError::ConfigError { message } => {
                format!("The configuration is invalid: {}.", message)
            }
            StandardsError::InvalidConfigValue { field, reason, .. } => {
                format!("The value given for {} is invalid: {}.", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            StandardsError::FetchError(_) => {
                "Check the network connection and the base URL.".to_string()
            }
            StandardsError::IoError(_) => "Check that the output path is writable.".to_string(),
            StandardsError::SerializationError(_) => {
                "Re-run with --verbose to see details.".to_string()
            }
            StandardsError::CsvError(_) => {
                "Re-run with --verbose to see the offending row.".to_string()
            }
            StandardsError::UnsupportedExercise { .. } => format!(
                "Pick one of the supported exercises: {}.",
                SUPPORTED_EXERCISES.join(", ")
            ),
            StandardsError::OutOfRangeWeight { min, max, .. } => {
                format!("Provide a body weight between {} and {}.", min, max)
            }
            StandardsError::MalformedCell { .. } | StandardsError::MalformedTable { .. } => {
                "The page layout may have changed; re-run with --dump-table to inspect the extracted data.".to_string()
            }
            StandardsError::ConfigError { .. } | StandardsError::InvalidConfigValue { .. } => {
                "Fix the configuration value and try again.".to_string()
            }
        }
    }
}
