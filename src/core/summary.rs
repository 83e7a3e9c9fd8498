//! Summary statistics over a scored series.

use crate::core::ScoredPoint;
use crate::utils::stats;

/// Aggregate statistics over an analyzed series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    /// Number of points analyzed.
    pub total: usize,
    /// Number of points flagged anomalous.
    pub anomalies: usize,
    /// Percentage of points flagged, 0 to 100.
    pub anomaly_rate: f64,
    /// Mean of all analyzed values.
    pub mean: f64,
    /// Sample standard deviation of all analyzed values.
    pub std_dev: f64,
    /// Smallest analyzed value.
    pub min: f64,
    /// Largest analyzed value.
    pub max: f64,
}

impl SeriesSummary {
    /// Compute a summary from scored points. `None` for an empty slice.
    pub fn from_points(points: &[ScoredPoint]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        let anomalies = points.iter().filter(|p| p.is_anomaly).count();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            total: points.len(),
            anomalies,
            anomaly_rate: 100.0 * anomalies as f64 / points.len() as f64,
            mean: stats::mean(&values),
            std_dev: stats::std_dev(&values),
            min,
            max,
        })
    }
}
