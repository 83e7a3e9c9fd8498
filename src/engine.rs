//! Analysis pipeline: aggregate, detect cycles, score, summarize.
//!
//! A single synchronous pass over the input; the engine owns no state
//! between calls, so re-running with the same series and configuration
//! reproduces the same [`Analysis`] exactly.

use std::path::Path;

use crate::aggregate::{aggregate, AggregationFn, AggregationLevel};
use crate::core::{ScoredPoint, SeriesSummary, TimePoint};
use crate::detection::{
    detect_seasonal_patterns, resolve_period, score_series, AnomalyDirection, SeasonalPattern,
    SeasonalityMode,
};
use crate::error::{AnomalyError, Result};
use crate::ingest::{ingest_csv_path, ingest_csv_str, Ingested};

/// Configuration for a full analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Bucket granularity applied before detection and scoring.
    pub aggregation: AggregationLevel,
    /// Reduction applied per aggregation bucket.
    pub aggregation_fn: AggregationFn,
    /// How the scoring period is chosen.
    pub seasonality: SeasonalityMode,
    /// Sensitivity threshold in bucket standard deviations, typically 1 to 4.
    pub threshold: f64,
    /// Which side of the baseline counts as anomalous.
    pub direction: AnomalyDirection,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            aggregation: AggregationLevel::Raw,
            aggregation_fn: AggregationFn::Avg,
            seasonality: SeasonalityMode::Auto,
            threshold: 2.5,
            direction: AnomalyDirection::Both,
        }
    }
}

impl EngineConfig {
    /// Set the aggregation level.
    pub fn with_aggregation(mut self, level: AggregationLevel) -> Self {
        self.aggregation = level;
        self
    }

    /// Set the aggregation reduction function.
    pub fn with_aggregation_fn(mut self, func: AggregationFn) -> Self {
        self.aggregation_fn = func;
        self
    }

    /// Set the seasonality mode.
    pub fn with_seasonality(mut self, mode: SeasonalityMode) -> Self {
        self.seasonality = mode;
        self
    }

    /// Set the sensitivity threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the anomaly direction filter.
    pub fn with_direction(mut self, direction: AnomalyDirection) -> Self {
        self.direction = direction;
        self
    }
}

/// Result of a full analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Every analyzed point with its baseline and verdict, in time order.
    pub points: Vec<ScoredPoint>,
    /// Detected seasonal patterns, strongest first.
    pub patterns: Vec<SeasonalPattern>,
    /// The period the series was scored against.
    pub period: usize,
    /// Aggregate statistics over the analyzed series.
    pub summary: SeriesSummary,
}

impl Analysis {
    /// The flagged points, strongest deviation first, at most `n` of them.
    pub fn top_anomalies(&self, n: usize) -> Vec<ScoredPoint> {
        let mut anomalies: Vec<ScoredPoint> = self
            .points
            .iter()
            .filter(|p| p.is_anomaly)
            .copied()
            .collect();
        anomalies.sort_by(|a, b| {
            b.deviation
                .partial_cmp(&a.deviation)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        anomalies.truncate(n);
        anomalies
    }
}

/// Run the full pipeline over an ordered series.
///
/// Aggregates per the configuration, detects seasonal patterns on the
/// aggregated series, resolves the scoring period, scores every point, and
/// summarizes. Fails only on shape problems (empty input, a non-positive or
/// non-finite threshold); statistical degeneracy comes back as an
/// unflagged analysis.
pub fn analyze(points: &[TimePoint], config: &EngineConfig) -> Result<Analysis> {
    if points.is_empty() {
        return Err(AnomalyError::EmptyData);
    }
    if !config.threshold.is_finite() || config.threshold <= 0.0 {
        return Err(AnomalyError::InvalidParameter(format!(
            "threshold must be a positive finite number, got {}",
            config.threshold
        )));
    }

    let aggregated = aggregate(points, config.aggregation, config.aggregation_fn);
    if aggregated.is_empty() {
        return Err(AnomalyError::EmptyData);
    }

    let patterns = detect_seasonal_patterns(&aggregated);
    let period = resolve_period(&aggregated, &patterns, config.seasonality);
    log::debug!(
        "scoring {} points with period {period} ({} patterns detected)",
        aggregated.len(),
        patterns.len()
    );

    let scored = score_series(&aggregated, period, config.threshold, config.direction);
    let summary = SeriesSummary::from_points(&scored).ok_or(AnomalyError::EmptyData)?;

    Ok(Analysis {
        points: scored,
        patterns,
        period,
        summary,
    })
}

/// Ingest CSV data from memory and analyze it.
///
/// Returns the analysis together with the ingest report so callers can
/// surface skipped-row counts.
pub fn analyze_csv_str(data: &str, config: &EngineConfig) -> Result<(Analysis, Ingested)> {
    let ingested = ingest_csv_str(data)?;
    let analysis = analyze(&ingested.points, config)?;
    Ok((analysis, ingested))
}

/// Ingest a CSV file and analyze it.
pub fn analyze_csv_path(path: &Path, config: &EngineConfig) -> Result<(Analysis, Ingested)> {
    let ingested = ingest_csv_path(path)?;
    let analysis = analyze(&ingested.points, config)?;
    Ok((analysis, ingested))
}
