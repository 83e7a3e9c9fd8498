//! Core data structures for anomaly analysis.

mod point;
mod summary;

pub use point::{ScoredPoint, Severity, TimePoint};
pub use summary::SeriesSummary;
