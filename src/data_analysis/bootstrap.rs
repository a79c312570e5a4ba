// src/data_analysis/bootstrap.rs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{BOOTSTRAP_SAMPLES, BOOTSTRAP_SUBSAMPLE_SIZE};
use crate::data_analysis::errors::AnalysisError;
use crate::data_analysis::quantile;

/// Statistic computed on each bootstrap subsample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapStatistic {
    Mean,
    Median,
    /// (min + max) / 2
    Midrange,
}

impl BootstrapStatistic {
    pub fn label(&self) -> &'static str {
        match self {
            BootstrapStatistic::Mean => "Mean",
            BootstrapStatistic::Median => "Median",
            BootstrapStatistic::Midrange => "Midrange",
        }
    }

    fn evaluate(&self, subsample: &[f64]) -> Result<f64, AnalysisError> {
        if subsample.is_empty() {
            return Err(AnalysisError::EmptySeries);
        }
        match self {
            BootstrapStatistic::Mean => {
                Ok(subsample.iter().sum::<f64>() / subsample.len() as f64)
            }
            BootstrapStatistic::Median => quantile::quantile(subsample, 0.5),
            BootstrapStatistic::Midrange => {
                let mut min = f64::INFINITY;
                let mut max = f64::NEG_INFINITY;
                for &v in subsample {
                    min = min.min(v);
                    max = max.max(v);
                }
                Ok((min + max) / 2.0)
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BootstrapOptions {
    /// Elements drawn (with replacement) per subsample.
    pub subsample_size: usize,
    /// Number of subsamples.
    pub samples: usize,
    /// Fixed seed for reproducible runs; None draws from entropy.
    pub seed: Option<u64>,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        BootstrapOptions {
            subsample_size: BOOTSTRAP_SUBSAMPLE_SIZE,
            samples: BOOTSTRAP_SAMPLES,
            seed: None,
        }
    }
}

/// Bootstrap estimate of the sampling distribution of a statistic: draws
/// `samples` subsamples of `subsample_size` with replacement and evaluates
/// the statistic on each. The returned values are in draw order (the
/// horizontal axis of a bootstrap plot).
pub fn bootstrap_statistic(
    series: &[f64],
    statistic: BootstrapStatistic,
    options: &BootstrapOptions,
) -> Result<Vec<f64>, AnalysisError> {
    if series.is_empty() {
        return Err(AnalysisError::EmptySeries);
    }
    if series.iter().any(|v| !v.is_finite()) {
        return Err(AnalysisError::NonFiniteValue);
    }
    if options.subsample_size == 0 {
        return Err(AnalysisError::InvalidParameter(
            "bootstrap subsample size is zero".to_string(),
        ));
    }
    if options.samples == 0 {
        return Err(AnalysisError::InvalidParameter(
            "bootstrap sample count is zero".to_string(),
        ));
    }

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut subsample = vec![0.0; options.subsample_size];
    let mut values = Vec::with_capacity(options.samples);
    for _ in 0..options.samples {
        for slot in subsample.iter_mut() {
            *slot = series[rng.gen_range(0..series.len())];
        }
        values.push(statistic.evaluate(&subsample)?);
    }
    Ok(values)
}

/// Percentile confidence interval from a bootstrap distribution, per the
/// handbook rule: for 500 samples at 90% the bounds are the 25th and 475th
/// order statistics.
pub fn percentile_interval(
    bootstrap_values: &[f64],
    confidence: f64,
) -> Result<(f64, f64), AnalysisError> {
    let n = bootstrap_values.len();
    if n < 2 {
        return Err(AnalysisError::TooFewPoints { needed: 2, got: n });
    }
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(AnalysisError::InvalidProbability { value: confidence });
    }

    let mut sorted = bootstrap_values.to_vec();
    if sorted.iter().any(|v| !v.is_finite()) {
        return Err(AnalysisError::NonFiniteValue);
    }
    sorted.sort_by(f64::total_cmp);

    let alpha = 1.0 - confidence;
    // 1-based order-statistic ranks k = ceil(tail * n), clamped into range.
    // Both tails use ceil so a product sitting on an integer boundary (25
    // exactly for 500 samples at 90%) selects that order statistic even when
    // 1 - confidence carries representation error.
    let lower_rank = (((alpha / 2.0) * n as f64).ceil() as usize).clamp(1, n) - 1;
    let upper_rank = ((((1.0 - alpha / 2.0) * n as f64).ceil()) as usize).clamp(1, n) - 1;
    Ok((sorted[lower_rank], sorted[upper_rank]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(samples: usize) -> BootstrapOptions {
        BootstrapOptions {
            subsample_size: 20,
            samples,
            seed: Some(42),
        }
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let series: Vec<f64> = (0..100).map(|i| (i % 17) as f64).collect();
        let first =
            bootstrap_statistic(&series, BootstrapStatistic::Mean, &seeded(50)).unwrap();
        let second =
            bootstrap_statistic(&series, BootstrapStatistic::Mean, &seeded(50)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn statistics_stay_inside_the_data_range() {
        let series: Vec<f64> = (0..60).map(|i| 5.0 + (i % 9) as f64).collect();
        for stat in [
            BootstrapStatistic::Mean,
            BootstrapStatistic::Median,
            BootstrapStatistic::Midrange,
        ] {
            let values = bootstrap_statistic(&series, stat, &seeded(200)).unwrap();
            assert_eq!(values.len(), 200);
            for v in values {
                assert!((5.0..=13.0).contains(&v), "{:?} produced {v}", stat);
            }
        }
    }

    #[test]
    fn handbook_interval_ranks_for_500_samples() {
        // Values 1..=500: the 90% interval takes the 25th and 475th order
        // statistics.
        let values: Vec<f64> = (1..=500).map(|i| i as f64).collect();
        let (lower, upper) = percentile_interval(&values, 0.90).unwrap();
        assert_eq!(lower, 25.0); // rank 25, index 24
        assert_eq!(upper, 475.0);
    }

    #[test]
    fn interval_bounds_are_ordered() {
        let series: Vec<f64> = (0..80).map(|i| ((i * 31) % 23) as f64).collect();
        let values =
            bootstrap_statistic(&series, BootstrapStatistic::Median, &seeded(300)).unwrap();
        let (lower, upper) = percentile_interval(&values, 0.95).unwrap();
        assert!(lower <= upper);
    }

    #[test]
    fn degenerate_options_fail() {
        let series = [1.0, 2.0, 3.0];
        let zero_size = BootstrapOptions {
            subsample_size: 0,
            ..seeded(10)
        };
        assert!(bootstrap_statistic(&series, BootstrapStatistic::Mean, &zero_size).is_err());
        let zero_samples = BootstrapOptions {
            samples: 0,
            ..seeded(10)
        };
        assert!(bootstrap_statistic(&series, BootstrapStatistic::Mean, &zero_samples).is_err());
        assert!(bootstrap_statistic(&[], BootstrapStatistic::Mean, &seeded(10)).is_err());
    }
}

// src/data_analysis/bootstrap.rs
