//! Seasonal anomaly scoring.
//!
//! Partitions the series into positional buckets (`index mod period`),
//! fits a mean/std-dev baseline per bucket, and flags points whose z-score
//! against their own bucket exceeds the threshold in the requested
//! direction. Degenerate input (short series, constant buckets) resolves to
//! "not anomalous" rather than an error: silence over false positives on
//! insufficient evidence.

use crate::core::{ScoredPoint, TimePoint};
use crate::utils::stats;

/// Which side of the baseline counts as anomalous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnomalyDirection {
    /// Flag deviations on either side.
    Both,
    /// Flag only values above the bucket mean.
    Positive,
    /// Flag only values below the bucket mean.
    Negative,
}

impl Default for AnomalyDirection {
    fn default() -> Self {
        AnomalyDirection::Both
    }
}

impl AnomalyDirection {
    fn admits(&self, signed_deviation: f64) -> bool {
        match self {
            AnomalyDirection::Both => true,
            AnomalyDirection::Positive => signed_deviation > 0.0,
            AnomalyDirection::Negative => signed_deviation < 0.0,
        }
    }
}

/// Score every point of an ordered series against its seasonal bucket.
///
/// Deterministic and stateless: identical inputs give identical output,
/// and re-scoring the scored values with the same configuration reproduces
/// the same deviations. Series shorter than three points carry too little
/// evidence for any baseline and come back entirely unflagged with zero
/// deviation.
pub fn score_series(
    points: &[TimePoint],
    period: usize,
    threshold: f64,
    direction: AnomalyDirection,
) -> Vec<ScoredPoint> {
    let n = points.len();
    // Positions past the series end are structurally empty, so capping the
    // working period at `n` leaves every point's bucket and position
    // unchanged while bounding the bucket allocation.
    let period = period.max(1).min(n.max(1));

    if n < 3 {
        return points
            .iter()
            .enumerate()
            .map(|(i, p)| ScoredPoint {
                timestamp: p.timestamp,
                value: p.value,
                mean: p.value,
                std_dev: 0.0,
                deviation: 0.0,
                signed_deviation: 0.0,
                is_anomaly: false,
                seasonal_position: i % period,
            })
            .collect();
    }

    let mut buckets: Vec<Vec<f64>> = vec![Vec::new(); period];
    for (i, p) in points.iter().enumerate() {
        buckets[i % period].push(p.value);
    }

    // (mean, std_dev) per bucket; a bucket with a single member has zero
    // spread, and buckets past the series end stay unused.
    let baselines: Vec<(f64, f64)> = buckets
        .iter()
        .map(|bucket| {
            if bucket.is_empty() {
                (0.0, 0.0)
            } else {
                (stats::mean(bucket), stats::std_dev(bucket))
            }
        })
        .collect();

    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let (mean, std_dev) = baselines[i % period];
            let signed_deviation = if std_dev > 0.0 {
                (p.value - mean) / std_dev
            } else {
                0.0
            };
            let deviation = signed_deviation.abs();
            let is_anomaly = deviation > threshold && direction.admits(signed_deviation);

            ScoredPoint {
                timestamp: p.timestamp,
                value: p.value,
                mean,
                std_dev,
                deviation,
                signed_deviation,
                is_anomaly,
                seasonal_position: i % period,
            }
        })
        .collect()
}
