//! Detection utilities for seasonal time series.
//!
//! This module provides tools for:
//! - Discovering seasonal cycles via autocorrelation
//! - Scoring points against their seasonal baseline

mod scoring;
mod seasonality;

pub use scoring::{score_series, AnomalyDirection};
pub use seasonality::{
    detect_seasonal_patterns, mean_gap_minutes, resolve_period, Confidence, CycleKind,
    SeasonalPattern, SeasonalityMode, DEFAULT_PERIOD,
};
