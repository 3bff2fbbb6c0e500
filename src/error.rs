//! Error types and handling
//!
//! The analyzer itself cannot fail: every query is a total function over
//! any well-formed dataset, including an empty one. Errors arise only at
//! the loading boundary (unreadable or unparseable input) and in
//! configuration handling. A load failure is distinct from "load
//! succeeded with zero records" — an empty dataset is valid input.

use thiserror::Error;

/// Errors that can occur while preparing a usage report
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Input file could not be read
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Input file could not be parsed as usage records
    #[error("Failed to parse usage records: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration is invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Report output could not be written
    #[error("Failed to write report: {0}")]
    ReportOutput(String),
}

impl From<anyhow::Error> for AnalyticsError {
    fn from(error: anyhow::Error) -> Self {
        AnalyticsError::ReportOutput(error.to_string())
    }
}

impl AnalyticsError {
    /// Create a configuration error
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            AnalyticsError::Io(_) => "IO",
            AnalyticsError::Json(_) => "Parse",
            AnalyticsError::InvalidConfiguration(_) => "Configuration",
            AnalyticsError::ReportOutput(_) => "Report",
        }
    }
}

/// Result type for analytics operations
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
