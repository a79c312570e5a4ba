// src/data_analysis/autocorrelation.rs

use ndarray::{s, ArrayView1};

use crate::data_analysis::distributions::normal_quantile;
use crate::data_analysis::errors::AnalysisError;

/// Autocovariance C(h) = (1/N) * sum_{t=1}^{N-h} (Y_t - Ybar)(Y_{t+h} - Ybar).
///
/// The 1/N normalization is used for every lag (including C(0), which is then
/// the population variance); the less biased 1/(N-h) form trades away the
/// statistical properties that make 1/N the standard choice in the
/// time-series literature.
pub fn autocovariance(series: &[f64], lag: usize) -> Result<f64, AnalysisError> {
    let n = series.len();
    if n <= 1 {
        return Err(AnalysisError::TooFewPoints { needed: 2, got: n });
    }
    if lag >= n {
        return Err(AnalysisError::LagOutOfRange { lag, len: n });
    }

    let y = ArrayView1::from(series);
    let mean = y.mean().ok_or(AnalysisError::EmptySeries)?;

    let head = y.slice(s![..n - lag]);
    let tail = y.slice(s![lag..]);
    let sum: f64 = head
        .iter()
        .zip(tail.iter())
        .map(|(&a, &b)| (a - mean) * (b - mean))
        .sum();

    Ok(sum / n as f64)
}

/// Autocorrelation coefficient R(h) = C(h) / C(0).
///
/// R(0) is 1 by convention and is never computed through the ratio.
pub fn autocorrelation_coefficient(series: &[f64], lag: usize) -> Result<f64, AnalysisError> {
    if lag == 0 {
        // Validate the inputs the same way the ratio path would.
        autocovariance(series, 0)?;
        return Ok(1.0);
    }

    let c0 = autocovariance(series, 0)?;
    if c0 == 0.0 {
        return Err(AnalysisError::ZeroVariance);
    }
    Ok(autocovariance(series, lag)? / c0)
}

/// R(h) for every lag in 0..=max_lag.
pub fn autocorrelation_coefficients(
    series: &[f64],
    max_lag: usize,
) -> Result<Vec<f64>, AnalysisError> {
    (0..=max_lag)
        .map(|lag| autocorrelation_coefficient(series, lag))
        .collect()
}

/// The largest meaningful lag for a series: lags of N-1 and N carry no
/// information, so the sweep stops at N-2.
pub fn default_max_lag(series: &[f64]) -> Result<usize, AnalysisError> {
    let n = series.len();
    if n < 3 {
        return Err(AnalysisError::TooFewPoints { needed: 3, got: n });
    }
    Ok(n - 2)
}

/// Fixed-width confidence band half-width for the randomness test:
/// z(1 - alpha/2) / sqrt(N).
pub fn randomness_band_half_width(n: usize, confidence: f64) -> Result<f64, AnalysisError> {
    if n == 0 {
        return Err(AnalysisError::EmptySeries);
    }
    let z = normal_quantile(1.0 - (1.0 - confidence) / 2.0)?;
    Ok(z / (n as f64).sqrt())
}

/// Lag-dependent Bartlett band half-widths for the moving-average model case:
/// z(1 - alpha/2) * sqrt((1 + 2 * sum_{i=1}^{h} R(i)^2) / N) at each lag h.
///
/// The returned vector has one entry per lag in 0..=max_lag; the lag-0 entry
/// reduces to the fixed-width band.
pub fn moving_average_band_half_widths(
    coefficients: &[f64],
    n: usize,
    confidence: f64,
) -> Result<Vec<f64>, AnalysisError> {
    if n == 0 {
        return Err(AnalysisError::EmptySeries);
    }
    if coefficients.is_empty() {
        return Err(AnalysisError::EmptySeries);
    }
    let z = normal_quantile(1.0 - (1.0 - confidence) / 2.0)?;

    let mut widths = Vec::with_capacity(coefficients.len());
    let mut sum_sq = 0.0;
    for (lag, &r) in coefficients.iter().enumerate() {
        if lag > 0 {
            sum_sq += r * r;
        }
        widths.push(z * ((1.0 + 2.0 * sum_sq) / n as f64).sqrt());
    }
    Ok(widths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autocovariance_matches_worked_example() {
        // Products at lag 1: [(-2)(-1), (-1)(0), (0)(1), (1)(2)] = [2, 0, 0, 2];
        // the 1/N normalization divides their sum by 5.
        let series = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((autocovariance(&series, 1).unwrap() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn autocovariance_at_lag_zero_is_population_variance() {
        let series = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((autocovariance(&series, 0).unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn coefficient_at_lag_zero_is_exactly_one() {
        let series = [0.3, -1.2, 4.5, 0.0, 2.2];
        assert_eq!(autocorrelation_coefficient(&series, 0).unwrap(), 1.0);
    }

    #[test]
    fn coefficients_stay_within_unit_interval() {
        let series: Vec<f64> = (0..50).map(|i| ((i * 7919) % 100) as f64).collect();
        let coefs = autocorrelation_coefficients(&series, 48).unwrap();
        for r in coefs {
            assert!(r.abs() <= 1.0 + 1e-9, "out of range coefficient {r}");
        }
    }

    #[test]
    fn short_or_degenerate_series_fail() {
        assert_eq!(
            autocovariance(&[1.0], 0),
            Err(AnalysisError::TooFewPoints { needed: 2, got: 1 })
        );
        assert_eq!(
            autocovariance(&[1.0, 2.0, 3.0], 3),
            Err(AnalysisError::LagOutOfRange { lag: 3, len: 3 })
        );
        assert_eq!(
            autocorrelation_coefficient(&[4.0, 4.0, 4.0], 1),
            Err(AnalysisError::ZeroVariance)
        );
    }

    #[test]
    fn randomness_band_uses_normal_quantile() {
        // z(0.975) / sqrt(100) = 1.959964 / 10
        let w = randomness_band_half_width(100, 0.95).unwrap();
        assert!((w - 0.1959964).abs() < 1e-4);
    }

    #[test]
    fn moving_average_band_grows_with_lag() {
        let series: Vec<f64> = (0..40).map(|i| (i as f64 * 0.7).sin()).collect();
        let coefs = autocorrelation_coefficients(&series, 10).unwrap();
        let widths = moving_average_band_half_widths(&coefs, series.len(), 0.95).unwrap();
        for pair in widths.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        let fixed = randomness_band_half_width(series.len(), 0.95).unwrap();
        assert!((widths[0] - fixed).abs() < 1e-12);
    }
}

// src/data_analysis/autocorrelation.rs
