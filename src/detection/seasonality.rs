//! Seasonal pattern discovery.
//!
//! Tests a small set of domain-typical cycles (hour, day, week, month,
//! quarter, year) against the series instead of scanning every lag:
//! autocorrelation at the candidate period is a cheap, interpretable proxy
//! for periodicity strength, and the named cycles are what callers actually
//! want reported.

use crate::core::TimePoint;
use crate::utils::stats;

/// Fallback scoring period when no pattern is detected in auto mode.
pub const DEFAULT_PERIOD: usize = 24;

/// Minimum series length for pattern detection.
const MIN_DETECTION_LEN: usize = 10;

/// A named cycle length tested against the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleKind {
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl CycleKind {
    /// Display name of the cycle.
    pub fn name(&self) -> &'static str {
        match self {
            CycleKind::Hourly => "Hourly",
            CycleKind::Daily => "Daily",
            CycleKind::Weekly => "Weekly",
            CycleKind::Monthly => "Monthly",
            CycleKind::Quarterly => "Quarterly",
            CycleKind::Yearly => "Yearly",
        }
    }

    /// Human-readable cycle length.
    pub fn description(&self) -> &'static str {
        match self {
            CycleKind::Hourly => "60-minute cycle",
            CycleKind::Daily => "24-hour cycle",
            CycleKind::Weekly => "7-day cycle",
            CycleKind::Monthly => "30-day cycle",
            CycleKind::Quarterly => "90-day cycle",
            CycleKind::Yearly => "365-day cycle",
        }
    }

    /// Cycle length in minutes.
    pub fn target_minutes(&self) -> f64 {
        match self {
            CycleKind::Hourly => 60.0,
            CycleKind::Daily => 1_440.0,
            CycleKind::Weekly => 10_080.0,
            CycleKind::Monthly => 43_200.0,
            CycleKind::Quarterly => 129_600.0,
            CycleKind::Yearly => 525_600.0,
        }
    }
}

/// Confidence grade for a detected pattern, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// A cycle found in the series, with its sample period and ACF strength.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalPattern {
    /// Which named cycle this is.
    pub cycle: CycleKind,
    /// Cycle length in samples at the series' spacing.
    pub period: usize,
    /// Autocorrelation at lag `period`.
    pub strength: f64,
    /// Confidence grade derived from `strength`.
    pub confidence: Confidence,
}

/// How the scoring period is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonalityMode {
    /// Use the strongest detected pattern, falling back to [`DEFAULT_PERIOD`].
    Auto,
    /// Derive the period from a named cycle and the series' spacing.
    Named(CycleKind),
    /// Use a caller-supplied period, clamped to `[2, n/3]`.
    Custom(usize),
}

impl Default for SeasonalityMode {
    fn default() -> Self {
        SeasonalityMode::Auto
    }
}

/// Mean spacing between consecutive timestamps, in fractional minutes.
///
/// Equal to total span over `n - 1` gaps; 0 for series shorter than two
/// points.
pub fn mean_gap_minutes(points: &[TimePoint]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    let span = points[n - 1].timestamp - points[0].timestamp;
    span.num_milliseconds() as f64 / 60_000.0 / (n - 1) as f64
}

/// Candidate cycles worth testing at a given sample spacing.
///
/// Sub-minute data can resolve hourly structure; hourly data daily
/// structure, and so on. Cycles shorter than the spacing itself are
/// unresolvable and never tested.
fn candidate_cycles(gap_minutes: f64) -> [CycleKind; 3] {
    if gap_minutes <= 1.0 {
        [CycleKind::Hourly, CycleKind::Daily, CycleKind::Weekly]
    } else if gap_minutes <= 60.0 {
        [CycleKind::Daily, CycleKind::Weekly, CycleKind::Monthly]
    } else if gap_minutes <= 1_440.0 {
        [CycleKind::Weekly, CycleKind::Monthly, CycleKind::Quarterly]
    } else {
        [CycleKind::Monthly, CycleKind::Quarterly, CycleKind::Yearly]
    }
}

/// Detect seasonal patterns in an ordered series.
///
/// Returns up to four patterns sorted by strength, strongest first. Series
/// shorter than ten points, or with no time spread at all, produce an empty
/// list. Candidates whose period would leave fewer than three full cycles in
/// the series are skipped since their bucket statistics would be unreliable.
pub fn detect_seasonal_patterns(points: &[TimePoint]) -> Vec<SeasonalPattern> {
    let n = points.len();
    if n < MIN_DETECTION_LEN {
        return Vec::new();
    }

    let gap = mean_gap_minutes(points);
    if gap <= 0.0 {
        return Vec::new();
    }

    let values: Vec<f64> = points.iter().map(|p| p.value).collect();

    let mut patterns: Vec<SeasonalPattern> = Vec::new();
    for cycle in candidate_cycles(gap) {
        let period = (cycle.target_minutes() / gap).round();
        if period <= 2.0 || period >= n as f64 / 3.0 {
            continue;
        }
        let period = period as usize;

        let strength = stats::autocorrelation(&values, period);
        // Keep-filter: NaN strength (non-finite input values) must drop too.
        if !(strength > 0.1) {
            continue;
        }

        let confidence = if strength > 0.3 {
            Confidence::High
        } else if strength > 0.15 {
            Confidence::Medium
        } else {
            Confidence::Low
        };

        patterns.push(SeasonalPattern {
            cycle,
            period,
            strength,
            confidence,
        });
    }

    patterns.sort_by(|a, b| {
        b.strength
            .partial_cmp(&a.strength)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    patterns.truncate(4);
    patterns
}

/// Resolve the scoring period for a series under the given mode.
///
/// `patterns` is the detector's output for the same series (only consulted
/// in auto mode). Named and custom periods are clamped to `[2, n/3]`; the
/// lower bound wins when the series is too short for the range to exist.
/// Auto mode keeps the strongest pattern's period unclamped (detected
/// patterns already satisfy the bound) and falls back to
/// [`DEFAULT_PERIOD`].
pub fn resolve_period(
    points: &[TimePoint],
    patterns: &[SeasonalPattern],
    mode: SeasonalityMode,
) -> usize {
    let n = points.len();
    match mode {
        SeasonalityMode::Auto => patterns
            .first()
            .map(|p| p.period)
            .unwrap_or(DEFAULT_PERIOD),
        SeasonalityMode::Named(cycle) => {
            let gap = mean_gap_minutes(points);
            let period = if gap > 0.0 {
                (cycle.target_minutes() / gap).round() as usize
            } else {
                DEFAULT_PERIOD
            };
            clamp_period(period, n)
        }
        SeasonalityMode::Custom(period) => clamp_period(period, n),
    }
}

fn clamp_period(period: usize, n: usize) -> usize {
    period.min(n / 3).max(2)
}
