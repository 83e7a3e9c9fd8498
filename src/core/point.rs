//! Data carriers for raw observations and scored output.

use chrono::{DateTime, Utc};

/// A single observation in a time series.
///
/// Aggregated series use the same shape: one value at the start of each
/// bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimePoint {
    /// Observation time (UTC).
    pub timestamp: DateTime<Utc>,
    /// Observed value.
    pub value: f64,
}

impl TimePoint {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Severity grade for a flagged point, derived from its deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Medium,
    High,
    Critical,
}

/// A point annotated with its seasonal baseline and anomaly verdict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredPoint {
    /// Observation time (UTC).
    pub timestamp: DateTime<Utc>,
    /// Observed value.
    pub value: f64,
    /// Mean of the point's seasonal bucket.
    pub mean: f64,
    /// Sample standard deviation of the point's seasonal bucket.
    pub std_dev: f64,
    /// Absolute z-score against the bucket baseline.
    pub deviation: f64,
    /// Signed z-score; positive means above the bucket mean.
    pub signed_deviation: f64,
    /// Whether the point breached the threshold in the requested direction.
    pub is_anomaly: bool,
    /// Position within the seasonal cycle (index mod period).
    pub seasonal_position: usize,
}

impl ScoredPoint {
    /// Severity grade for a flagged point.
    ///
    /// `None` when the point is not anomalous. Deviations above 3.5σ grade
    /// Critical, above 3σ High, and everything else Medium.
    pub fn severity(&self) -> Option<Severity> {
        if !self.is_anomaly {
            return None;
        }
        Some(if self.deviation > 3.5 {
            Severity::Critical
        } else if self.deviation > 3.0 {
            Severity::High
        } else {
            Severity::Medium
        })
    }
}
