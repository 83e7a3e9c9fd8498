//! Statistical utility functions.

/// Calculate the mean of a slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Calculate the variance of a slice (sample variance with n-1 denominator).
///
/// Fewer than two values carry no spread information, so the variance is 0
/// rather than NaN; seasonal baselines built from a single observation must
/// score as "no deviation", not poison downstream arithmetic.
pub fn variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|x| (x - m).powi(2)).sum();
    sum_sq / (values.len() - 1) as f64
}

/// Calculate the standard deviation of a slice.
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Calculate the autocorrelation at a given lag.
///
/// Uses the full-series mean and normalizes by the total sum of squares:
/// `Σ(xᵢ−μ)(xᵢ₊ₗ−μ) / Σ(xᵢ−μ)²` with the numerator over `i` in
/// `[0, n-lag)`. A constant series (zero denominator) and a lag at or
/// beyond the series length both yield 0.
pub fn autocorrelation(values: &[f64], lag: usize) -> f64 {
    if values.len() <= lag {
        return 0.0;
    }
    let m = mean(values);
    let n = values.len();

    let mut numerator = 0.0;
    let mut denominator = 0.0;

    for i in 0..n {
        denominator += (values[i] - m).powi(2);
        if i >= lag {
            numerator += (values[i] - m) * (values[i - lag] - m);
        }
    }

    if denominator == 0.0 {
        return 0.0;
    }
    numerator / denominator
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mean_calculates_correctly() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0, epsilon = 1e-10);
        assert_relative_eq!(mean(&[10.0]), 10.0, epsilon = 1e-10);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn variance_calculates_correctly() {
        // Sample variance of [1, 2, 3, 4, 5] = 2.5
        assert_relative_eq!(variance(&[1.0, 2.0, 3.0, 4.0, 5.0]), 2.5, epsilon = 1e-10);
        assert_eq!(variance(&[1.0]), 0.0);
        assert_eq!(variance(&[]), 0.0);
    }

    #[test]
    fn std_dev_calculates_correctly() {
        assert_relative_eq!(
            std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]),
            2.5_f64.sqrt(),
            epsilon = 1e-10
        );
        assert_eq!(std_dev(&[7.0]), 0.0);
    }

    #[test]
    fn autocorrelation_lag_0_is_1() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(autocorrelation(&values, 0), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn autocorrelation_known_pattern() {
        // For a linear trend of length n, ACF(1) ≈ (n-2)/(n+1) ≈ 0.86 for n=20
        let values: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let acf1 = autocorrelation(&values, 1);
        assert!(acf1 > 0.8);
    }

    #[test]
    fn autocorrelation_peaks_at_true_period() {
        let values: Vec<f64> = (0..240)
            .map(|i| (2.0 * std::f64::consts::PI * i as f64 / 24.0).sin())
            .collect();
        let at_period = autocorrelation(&values, 24);
        let off_period = autocorrelation(&values, 17);
        assert!(at_period > 0.8);
        assert!(at_period > off_period);
    }

    #[test]
    fn autocorrelation_constant_series_is_0() {
        let values = vec![5.0; 50];
        assert_eq!(autocorrelation(&values, 7), 0.0);
    }

    #[test]
    fn autocorrelation_lag_beyond_length_is_0() {
        let values = vec![1.0, 2.0, 3.0];
        assert_eq!(autocorrelation(&values, 3), 0.0);
        assert_eq!(autocorrelation(&values, 10), 0.0);
    }
}
