// tests/autocorrelation_test.rs

use eda_plots::data_analysis::autocorrelation::{
    autocorrelation_coefficient, autocorrelation_coefficients, default_max_lag,
    moving_average_band_half_widths, randomness_band_half_width,
};

/// Deterministic pseudo-random ramp: a full-period linear congruential
/// sequence, rescaled to [0, 1).
fn scrambled_series(n: usize) -> Vec<f64> {
    let mut state: u64 = 12345;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 11) as f64 / (1u64 << 53) as f64
        })
        .collect()
}

#[test]
fn scrambled_data_stays_inside_the_band_at_small_lags() {
    let series = scrambled_series(500);
    let band = randomness_band_half_width(series.len(), 0.99).unwrap();
    for lag in 1..=20 {
        let r = autocorrelation_coefficient(&series, lag).unwrap();
        assert!(
            r.abs() < 2.0 * band,
            "lag {lag} coefficient {r} far outside the 99% band {band}"
        );
    }
}

#[test]
fn a_slow_sine_is_strongly_autocorrelated_at_lag_one() {
    let series: Vec<f64> = (0..200).map(|i| (i as f64 * 0.05).sin()).collect();
    let r = autocorrelation_coefficient(&series, 1).unwrap();
    assert!(r > 0.99, "lag-1 coefficient {r}");
}

#[test]
fn full_sweep_covers_every_lag_up_to_the_default_maximum() {
    let series = scrambled_series(64);
    let max_lag = default_max_lag(&series).unwrap();
    assert_eq!(max_lag, 62);
    let coefficients = autocorrelation_coefficients(&series, max_lag).unwrap();
    assert_eq!(coefficients.len(), max_lag + 1);
    assert_eq!(coefficients[0], 1.0);
}

#[test]
fn bartlett_bands_never_shrink_and_start_at_the_fixed_band() {
    let series: Vec<f64> = (0..120).map(|i| (i as f64 * 0.3).cos()).collect();
    let coefficients = autocorrelation_coefficients(&series, 30).unwrap();
    let widths =
        moving_average_band_half_widths(&coefficients, series.len(), 0.95).unwrap();
    let fixed = randomness_band_half_width(series.len(), 0.95).unwrap();
    assert!((widths[0] - fixed).abs() < 1e-12);
    for pair in widths.windows(2) {
        assert!(pair[1] >= pair[0]);
    }
}

// tests/autocorrelation_test.rs
