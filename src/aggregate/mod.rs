//! Time-bucket aggregation of raw observations.
//!
//! Groups points into hour or day buckets by truncating their UTC
//! timestamp to the bucket start, then reduces each bucket with the chosen
//! function. UTC days are exactly 86 400 seconds, so truncation is plain
//! timestamp arithmetic.

use std::collections::BTreeMap;

use chrono::DateTime;

use crate::core::TimePoint;

const HOUR_SECONDS: i64 = 3_600;
const DAY_SECONDS: i64 = 86_400;

/// Granularity of the aggregation buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationLevel {
    /// No aggregation; points pass through unchanged.
    Raw,
    /// One bucket per UTC hour.
    Hour,
    /// One bucket per UTC day.
    Day,
}

impl Default for AggregationLevel {
    fn default() -> Self {
        AggregationLevel::Raw
    }
}

/// Reduction applied to each bucket's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationFn {
    Avg,
    Sum,
    Min,
    Max,
    /// Number of valid values in the bucket, ignoring their magnitudes.
    Count,
}

impl Default for AggregationFn {
    fn default() -> Self {
        AggregationFn::Avg
    }
}

impl AggregationFn {
    /// Reduce a non-empty slice of finite values.
    fn reduce(&self, values: &[f64]) -> f64 {
        match self {
            AggregationFn::Avg => values.iter().sum::<f64>() / values.len() as f64,
            AggregationFn::Sum => values.iter().sum(),
            AggregationFn::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
            AggregationFn::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            AggregationFn::Count => values.len() as f64,
        }
    }
}

/// Aggregate a series into time buckets.
///
/// `Raw` is the identity. For `Hour`/`Day`, non-finite values are dropped
/// (with one aggregate warning), each bucket of surviving values is reduced
/// per `func`, and one point per non-empty bucket is emitted at the bucket
/// start, in ascending timestamp order. A bucket whose values are all
/// non-finite emits nothing.
pub fn aggregate(points: &[TimePoint], level: AggregationLevel, func: AggregationFn) -> Vec<TimePoint> {
    let bucket_seconds = match level {
        AggregationLevel::Raw => return points.to_vec(),
        AggregationLevel::Hour => HOUR_SECONDS,
        AggregationLevel::Day => DAY_SECONDS,
    };

    let mut buckets: BTreeMap<i64, Vec<f64>> = BTreeMap::new();
    let mut dropped = 0usize;
    for point in points {
        if !point.value.is_finite() {
            dropped += 1;
            continue;
        }
        let secs = point.timestamp.timestamp();
        let start = secs - secs.rem_euclid(bucket_seconds);
        buckets.entry(start).or_default().push(point.value);
    }

    if dropped > 0 {
        log::warn!("dropped {dropped} non-finite values during aggregation");
    }

    buckets
        .into_iter()
        .filter_map(|(start, values)| {
            let timestamp = DateTime::from_timestamp(start, 0)?;
            Some(TimePoint::new(timestamp, func.reduce(&values)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{TimeZone, Utc};

    fn point(h: u32, m: u32, value: f64) -> TimePoint {
        TimePoint::new(Utc.with_ymd_and_hms(2024, 5, 10, h, m, 0).unwrap(), value)
    }

    #[test]
    fn raw_level_is_identity() {
        let points = vec![point(3, 15, 1.0), point(1, 0, 2.0), point(3, 20, f64::NAN)];
        let out = aggregate(&points, AggregationLevel::Raw, AggregationFn::Avg);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].timestamp, points[0].timestamp);
    }

    #[test]
    fn hourly_sum_and_avg() {
        let points = vec![point(9, 10, 3.0), point(9, 40, 7.0), point(11, 0, 5.0)];

        let sums = aggregate(&points, AggregationLevel::Hour, AggregationFn::Sum);
        assert_eq!(sums.len(), 2);
        assert_eq!(
            sums[0].timestamp,
            Utc.with_ymd_and_hms(2024, 5, 10, 9, 0, 0).unwrap()
        );
        assert_relative_eq!(sums[0].value, 10.0, epsilon = 1e-10);
        assert_relative_eq!(sums[1].value, 5.0, epsilon = 1e-10);

        let avgs = aggregate(&points, AggregationLevel::Hour, AggregationFn::Avg);
        assert_relative_eq!(avgs[0].value, 5.0, epsilon = 1e-10);
    }

    #[test]
    fn daily_min_max_and_count() {
        let points = vec![
            point(0, 0, 4.0),
            point(8, 30, -2.0),
            point(23, 59, 9.0),
            TimePoint::new(Utc.with_ymd_and_hms(2024, 5, 11, 1, 0, 0).unwrap(), 1.0),
        ];

        let mins = aggregate(&points, AggregationLevel::Day, AggregationFn::Min);
        assert_eq!(mins.len(), 2);
        assert_relative_eq!(mins[0].value, -2.0, epsilon = 1e-10);

        let maxs = aggregate(&points, AggregationLevel::Day, AggregationFn::Max);
        assert_relative_eq!(maxs[0].value, 9.0, epsilon = 1e-10);

        let counts = aggregate(&points, AggregationLevel::Day, AggregationFn::Count);
        assert_relative_eq!(counts[0].value, 3.0, epsilon = 1e-10);
        assert_relative_eq!(counts[1].value, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn non_finite_values_are_dropped() {
        let points = vec![point(9, 0, f64::NAN), point(9, 30, 6.0), point(9, 45, f64::INFINITY)];
        let out = aggregate(&points, AggregationLevel::Hour, AggregationFn::Avg);
        assert_eq!(out.len(), 1);
        assert_relative_eq!(out[0].value, 6.0, epsilon = 1e-10);

        let counts = aggregate(&points, AggregationLevel::Hour, AggregationFn::Count);
        assert_relative_eq!(counts[0].value, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn all_invalid_bucket_emits_no_point() {
        let points = vec![point(9, 0, f64::NAN), point(9, 30, f64::NEG_INFINITY), point(10, 0, 2.0)];
        let out = aggregate(&points, AggregationLevel::Hour, AggregationFn::Avg);
        assert_eq!(out.len(), 1);
        assert_eq!(
            out[0].timestamp,
            Utc.with_ymd_and_hms(2024, 5, 10, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn unsorted_input_yields_ascending_output() {
        let points = vec![point(22, 0, 1.0), point(3, 0, 2.0), point(15, 0, 3.0)];
        let out = aggregate(&points, AggregationLevel::Hour, AggregationFn::Avg);
        for pair in out.windows(2) {
            assert!(pair[0].timestamp < pair[1].timestamp);
        }
    }

    #[test]
    fn pre_epoch_timestamps_truncate_toward_bucket_start() {
        let before_epoch = TimePoint::new(Utc.with_ymd_and_hms(1969, 12, 31, 23, 45, 0).unwrap(), 1.0);
        let out = aggregate(&[before_epoch], AggregationLevel::Hour, AggregationFn::Avg);
        assert_eq!(
            out[0].timestamp,
            Utc.with_ymd_and_hms(1969, 12, 31, 23, 0, 0).unwrap()
        );
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(aggregate(&[], AggregationLevel::Hour, AggregationFn::Sum).is_empty());
    }
}
