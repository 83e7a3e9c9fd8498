//! # anofox-anomaly
//!
//! Seasonal anomaly detection for time series.
//!
//! Takes a time-ordered numeric series, optionally aggregates it into hour
//! or day buckets, discovers seasonal cycles via autocorrelation, and flags
//! points deviating from their seasonal baseline beyond a configurable
//! threshold. Includes a CSV ingest front-end with column auto-detection.
//!
//! ```
//! use anofox_anomaly::prelude::*;
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let points: Vec<TimePoint> = (0..100)
//!     .map(|i| {
//!         let value = 100.0 + 10.0 * (2.0 * std::f64::consts::PI * i as f64 / 24.0).sin();
//!         TimePoint::new(base + Duration::hours(i), value)
//!     })
//!     .collect();
//!
//! let analysis = analyze(&points, &EngineConfig::default()).unwrap();
//! assert_eq!(analysis.summary.total, 100);
//! ```

pub mod aggregate;
pub mod core;
pub mod detection;
pub mod engine;
pub mod error;
pub mod ingest;
pub mod utils;

pub use error::{AnomalyError, Result};

pub mod prelude {
    pub use crate::aggregate::{aggregate, AggregationFn, AggregationLevel};
    pub use crate::core::{ScoredPoint, SeriesSummary, Severity, TimePoint};
    pub use crate::detection::{
        detect_seasonal_patterns, score_series, AnomalyDirection, Confidence, CycleKind,
        SeasonalPattern, SeasonalityMode,
    };
    pub use crate::engine::{analyze, analyze_csv_path, analyze_csv_str, Analysis, EngineConfig};
    pub use crate::error::{AnomalyError, Result};
    pub use crate::ingest::{ingest_csv_path, ingest_csv_str, Ingested};
}
