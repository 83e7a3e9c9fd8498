//! Quickstart example demonstrating basic usage of anofox-anomaly.
//!
//! Run with: cargo run --example quickstart

use anofox_anomaly::ingest::format_timestamp;
use anofox_anomaly::prelude::*;
use chrono::{Duration, TimeZone, Utc};

fn main() {
    println!("=== anofox-anomaly Quickstart ===\n");

    // 1. Create three weeks of hourly data with a daily cycle and a few
    //    injected incidents.
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut points: Vec<TimePoint> = (0..504)
        .map(|i| {
            let value = 100.0
                + 25.0 * (2.0 * std::f64::consts::PI * i as f64 / 24.0).sin()
                + (i % 7) as f64 * 0.3;
            TimePoint::new(base + Duration::hours(i), value)
        })
        .collect();
    points[100].value += 80.0; // spike
    points[300].value -= 70.0; // dip
    println!("Created series with {} observations", points.len());

    // 2. Run the analysis with default settings (auto seasonality, 2.5 sigma).
    let config = EngineConfig::default();
    let analysis = analyze(&points, &config).unwrap();

    // 3. Show what cycles were found.
    println!("\n--- Detected Seasonal Patterns ---");
    for pattern in &analysis.patterns {
        println!(
            "  {:<10} {} | period {:>3} samples | strength {:.3} | {:?} confidence",
            pattern.cycle.name(),
            pattern.cycle.description(),
            pattern.period,
            pattern.strength,
            pattern.confidence
        );
    }
    println!("Scoring period: {}", analysis.period);

    // 4. Summary statistics.
    let summary = &analysis.summary;
    println!("\n--- Summary ---");
    println!("  points:       {}", summary.total);
    println!("  anomalies:    {} ({:.2}%)", summary.anomalies, summary.anomaly_rate);
    println!("  mean:         {:.2}", summary.mean);
    println!("  std dev:      {:.2}", summary.std_dev);
    println!("  range:        {:.2} .. {:.2}", summary.min, summary.max);

    // 5. The worst offenders.
    println!("\n--- Top Anomalies ---");
    for point in analysis.top_anomalies(5) {
        println!(
            "  {} | value {:>8.2} | baseline {:>7.2} +/- {:>6.2} | z {:+.2} | {:?}",
            format_timestamp(&point.timestamp),
            point.value,
            point.mean,
            point.std_dev,
            point.signed_deviation,
            point.severity()
        );
    }

    // 6. Only care about drops? Filter the direction.
    let drops_only = config.with_direction(AnomalyDirection::Negative);
    let drops = analyze(&points, &drops_only).unwrap();
    println!(
        "\nNegative-only run flags {} of {} points",
        drops.summary.anomalies, drops.summary.total
    );
}
