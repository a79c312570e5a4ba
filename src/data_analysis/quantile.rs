// src/data_analysis/quantile.rs

use crate::constants::BOX_WHISKER_IQR_FACTOR;
use crate::data_analysis::errors::AnalysisError;

fn sorted_copy(series: &[f64]) -> Result<Vec<f64>, AnalysisError> {
    if series.iter().any(|v| !v.is_finite()) {
        return Err(AnalysisError::NonFiniteValue);
    }
    let mut sorted = series.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted)
}

/// Pairs the quantiles of two samples for a q-q plot.
///
/// With equal lengths the sorted samples pair elementwise. Otherwise each
/// rank i of the smaller sample maps to rank
/// round((N_large - 1) / (N_small - 1) * i) of the larger one. Both samples
/// need at least two points; the rank mapping divides by N_small - 1.
pub fn quantile_pairs(a: &[f64], b: &[f64]) -> Result<Vec<(f64, f64)>, AnalysisError> {
    let (n1, n2) = (a.len(), b.len());
    if n1 < 2 {
        return Err(AnalysisError::TooFewPoints { needed: 2, got: n1 });
    }
    if n2 < 2 {
        return Err(AnalysisError::TooFewPoints { needed: 2, got: n2 });
    }

    let sorted_a = sorted_copy(a)?;
    let sorted_b = sorted_copy(b)?;

    let pairs = if n1 == n2 {
        sorted_a.into_iter().zip(sorted_b).collect()
    } else if n1 > n2 {
        let ratio = (n1 - 1) as f64 / (n2 - 1) as f64;
        (0..n2)
            .map(|i2| {
                let i1 = (ratio * i2 as f64).round() as usize;
                (sorted_a[i1], sorted_b[i2])
            })
            .collect()
    } else {
        let ratio = (n2 - 1) as f64 / (n1 - 1) as f64;
        (0..n1)
            .map(|i1| {
                let i2 = (ratio * i1 as f64).round() as usize;
                (sorted_a[i1], sorted_b[i2])
            })
            .collect()
    };

    Ok(pairs)
}

/// Quantile of a sample by linear interpolation between order statistics
/// (position q * (n - 1), the numpy default).
pub fn quantile(series: &[f64], q: f64) -> Result<f64, AnalysisError> {
    if series.is_empty() {
        return Err(AnalysisError::EmptySeries);
    }
    if !(0.0..=1.0).contains(&q) {
        return Err(AnalysisError::InvalidProbability { value: q });
    }
    let sorted = sorted_copy(series)?;
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    Ok(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

/// Five-number summary with whiskers and outliers for a box plot.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Smallest point within q1 - 1.5 IQR.
    pub whisker_low: f64,
    /// Largest point within q3 + 1.5 IQR.
    pub whisker_high: f64,
    pub outliers: Vec<f64>,
}

pub fn box_stats(series: &[f64]) -> Result<BoxStats, AnalysisError> {
    let n = series.len();
    if n < 2 {
        return Err(AnalysisError::TooFewPoints { needed: 2, got: n });
    }
    let sorted = sorted_copy(series)?;

    let q1 = quantile(&sorted, 0.25)?;
    let median = quantile(&sorted, 0.5)?;
    let q3 = quantile(&sorted, 0.75)?;

    let iqr = q3 - q1;
    let low_fence = q1 - BOX_WHISKER_IQR_FACTOR * iqr;
    let high_fence = q3 + BOX_WHISKER_IQR_FACTOR * iqr;

    let whisker_low = sorted
        .iter()
        .copied()
        .find(|&v| v >= low_fence)
        .unwrap_or(q1);
    let whisker_high = sorted
        .iter()
        .rev()
        .copied()
        .find(|&v| v <= high_fence)
        .unwrap_or(q3);
    let outliers = sorted
        .iter()
        .copied()
        .filter(|&v| v < low_fence || v > high_fence)
        .collect();

    Ok(BoxStats {
        q1,
        median,
        q3,
        whisker_low,
        whisker_high,
        outliers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_lengths_reduce_to_elementwise_pairing() {
        let a = [3.0, 1.0, 2.0];
        let b = [30.0, 10.0, 20.0];
        let pairs = quantile_pairs(&a, &b).unwrap();
        assert_eq!(pairs, vec![(1.0, 10.0), (2.0, 20.0), (3.0, 30.0)]);
    }

    #[test]
    fn unequal_lengths_map_ranks_by_rounding() {
        // N_large = 5, N_small = 3: ratio 2, small ranks 0, 1, 2 map to
        // large ranks 0, 2, 4.
        let large = [10.0, 20.0, 30.0, 40.0, 50.0];
        let small = [1.0, 2.0, 3.0];
        let pairs = quantile_pairs(&large, &small).unwrap();
        assert_eq!(pairs, vec![(10.0, 1.0), (30.0, 2.0), (50.0, 3.0)]);

        // N_large = 4, N_small = 3: ratio 1.5, ranks 0, 1, 2 round to
        // 0, 2, 3 (1.5 rounds away from zero).
        let large = [10.0, 20.0, 30.0, 40.0];
        let pairs = quantile_pairs(&small, &large).unwrap();
        assert_eq!(pairs, vec![(1.0, 10.0), (2.0, 30.0), (3.0, 40.0)]);
    }

    #[test]
    fn single_element_samples_are_degenerate() {
        assert_eq!(
            quantile_pairs(&[1.0], &[1.0, 2.0]),
            Err(AnalysisError::TooFewPoints { needed: 2, got: 1 })
        );
        assert_eq!(
            quantile_pairs(&[1.0, 2.0], &[1.0]),
            Err(AnalysisError::TooFewPoints { needed: 2, got: 1 })
        );
    }

    #[test]
    fn quantiles_interpolate_linearly() {
        let series = [1.0, 2.0, 3.0, 4.0];
        assert!((quantile(&series, 0.5).unwrap() - 2.5).abs() < 1e-12);
        assert!((quantile(&series, 0.25).unwrap() - 1.75).abs() < 1e-12);
        assert!((quantile(&series, 0.0).unwrap() - 1.0).abs() < 1e-12);
        assert!((quantile(&series, 1.0).unwrap() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn box_stats_flag_far_points_as_outliers() {
        let mut series: Vec<f64> = (1..=11).map(|i| i as f64).collect();
        series.push(100.0);
        let stats = box_stats(&series).unwrap();
        assert_eq!(stats.outliers, vec![100.0]);
        assert!(stats.whisker_high <= 11.0);
        assert!((stats.median - 6.5).abs() < 1e-12);
    }

    #[test]
    fn box_stats_without_outliers_use_the_extremes() {
        let series = [2.0, 4.0, 6.0, 8.0, 10.0];
        let stats = box_stats(&series).unwrap();
        assert_eq!(stats.whisker_low, 2.0);
        assert_eq!(stats.whisker_high, 10.0);
        assert!(stats.outliers.is_empty());
    }
}

// src/data_analysis/quantile.rs
