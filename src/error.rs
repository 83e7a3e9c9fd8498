//! Error types for the anofox-anomaly library.

use thiserror::Error;

/// Result type alias for anomaly analysis operations.
pub type Result<T> = std::result::Result<T, AnomalyError>;

/// Errors that can occur during ingestion and analysis.
///
/// Only input-shape problems surface here. Row-level problems (bad dates,
/// non-numeric values) are dropped and counted during ingestion, and
/// statistical degeneracy (constant buckets, too-short series) produces a
/// neutral "not anomalous" verdict rather than an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnomalyError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// No timestamp or value column could be located in the header row.
    #[error("missing timestamp or value column, found: {found}")]
    MissingColumns { found: String },

    /// Every data row was dropped during validation.
    #[error("no valid data rows found (read {rows_read})")]
    NoValidRows { rows_read: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Malformed CSV that prevents reading records at all.
    #[error("csv error: {0}")]
    Csv(String),

    /// Underlying I/O failure while reading a file.
    #[error("io error: {0}")]
    Io(String),
}

impl From<csv::Error> for AnomalyError {
    fn from(err: csv::Error) -> Self {
        AnomalyError::Csv(err.to_string())
    }
}

impl From<std::io::Error> for AnomalyError {
    fn from(err: std::io::Error) -> Self {
        AnomalyError::Io(err.to_string())
    }
}
