// src/data_analysis/descriptive.rs

use ndarray::ArrayView1;
use ndarray_stats::QuantileExt;

use crate::data_analysis::errors::AnalysisError;

pub fn mean(series: &[f64]) -> Result<f64, AnalysisError> {
    ArrayView1::from(series)
        .mean()
        .ok_or(AnalysisError::EmptySeries)
}

/// Sample standard deviation (ddof = 1).
pub fn sample_std(series: &[f64]) -> Result<f64, AnalysisError> {
    let n = series.len();
    if n < 2 {
        return Err(AnalysisError::TooFewPoints { needed: 2, got: n });
    }
    let m = mean(series)?;
    let ss: f64 = series.iter().map(|&v| (v - m) * (v - m)).sum();
    Ok((ss / (n - 1) as f64).sqrt())
}

/// (min, max) of a series.
pub fn value_range(series: &[f64]) -> Result<(f64, f64), AnalysisError> {
    if series.is_empty() {
        return Err(AnalysisError::EmptySeries);
    }
    let view = ArrayView1::from(series);
    let min = view.min().map_err(|_| AnalysisError::NonFiniteValue)?;
    let max = view.max().map_err(|_| AnalysisError::NonFiniteValue)?;
    Ok((*min, *max))
}

/// Probability density of the normal distribution with the given mean and
/// standard deviation.
pub fn normal_pdf(x: f64, mean: f64, std: f64) -> Result<f64, AnalysisError> {
    if std <= 0.0 {
        return Err(AnalysisError::InvalidParameter(format!(
            "standard deviation must be positive, got {std}"
        )));
    }
    let coefficient = 1.0 / (std * (2.0 * std::f64::consts::PI).sqrt());
    let exponent = -(x - mean) * (x - mean) / (2.0 * std * std);
    Ok(coefficient * exponent.exp())
}

/// Histogram over evenly spaced shared edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// bins + 1 edges, ascending.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn bin_width(&self) -> f64 {
        self.edges[1] - self.edges[0]
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Evenly spaced bin edges over [min, max]. A degenerate span is widened by
/// half a unit on each side so every value still lands in a bin.
pub fn bin_edges(min: f64, max: f64, bins: usize) -> Result<Vec<f64>, AnalysisError> {
    if bins == 0 {
        return Err(AnalysisError::InvalidParameter(
            "histogram needs at least one bin".to_string(),
        ));
    }
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(AnalysisError::InvalidParameter(format!(
            "invalid bin range [{min}, {max}]"
        )));
    }
    let (lo, hi) = if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    };
    let width = (hi - lo) / bins as f64;
    Ok((0..=bins).map(|i| lo + width * i as f64).collect())
}

/// Counts values into bins defined by ascending edges. Bins are left-closed;
/// the last bin also includes its right edge, so the sample maximum is
/// counted.
pub fn histogram_counts(series: &[f64], edges: &[f64]) -> Result<Histogram, AnalysisError> {
    if series.is_empty() {
        return Err(AnalysisError::EmptySeries);
    }
    if edges.len() < 2 {
        return Err(AnalysisError::InvalidParameter(
            "histogram needs at least two edges".to_string(),
        ));
    }
    let bins = edges.len() - 1;
    let lo = edges[0];
    let hi = edges[bins];
    let width = (hi - lo) / bins as f64;
    if width <= 0.0 {
        return Err(AnalysisError::InvalidParameter(
            "histogram edges are not ascending".to_string(),
        ));
    }

    let mut counts = vec![0usize; bins];
    for &v in series {
        if !v.is_finite() {
            return Err(AnalysisError::NonFiniteValue);
        }
        if v < lo || v > hi {
            continue;
        }
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    Ok(Histogram {
        edges: edges.to_vec(),
        counts,
    })
}

/// Histogram of a single series over its own range.
pub fn histogram(series: &[f64], bins: usize) -> Result<Histogram, AnalysisError> {
    let (min, max) = value_range(series)?;
    let edges = bin_edges(min, max, bins)?;
    histogram_counts(series, &edges)
}

/// Shared-edge histograms of two series over their combined range, for
/// charts that juxtapose the two distributions.
pub fn shared_histograms(
    a: &[f64],
    b: &[f64],
    bins: usize,
) -> Result<(Histogram, Histogram), AnalysisError> {
    let (min_a, max_a) = value_range(a)?;
    let (min_b, max_b) = value_range(b)?;
    let edges = bin_edges(min_a.min(min_b), max_a.max(max_b), bins)?;
    Ok((histogram_counts(a, &edges)?, histogram_counts(b, &edges)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_std_match_hand_values() {
        let series = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((mean(&series).unwrap() - 5.0).abs() < 1e-12);
        // Sum of squared deviations is 32; 32 / 7 under ddof = 1.
        assert!((sample_std(&series).unwrap() - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn normal_pdf_peaks_at_the_mean() {
        let peak = normal_pdf(3.0, 3.0, 2.0).unwrap();
        assert!((peak - 1.0 / (2.0 * (2.0 * std::f64::consts::PI).sqrt())).abs() < 1e-12);
        assert!(normal_pdf(0.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn histogram_counts_on_known_data() {
        let series = [0.0, 0.5, 1.0, 1.5, 2.0, 2.0];
        let hist = histogram(&series, 4).unwrap();
        assert_eq!(hist.edges.len(), 5);
        // Bins: [0, 0.5) [0.5, 1) [1, 1.5) [1.5, 2]; the maximum is counted
        // in the last bin.
        assert_eq!(hist.counts, vec![1, 1, 1, 3]);
        assert_eq!(hist.counts.iter().sum::<usize>(), series.len());
    }

    #[test]
    fn constant_data_still_bins() {
        let hist = histogram(&[7.0, 7.0, 7.0], 5).unwrap();
        assert_eq!(hist.counts.iter().sum::<usize>(), 3);
        assert!(hist.edges[0] < 7.0 && 7.0 < hist.edges[5]);
    }

    #[test]
    fn shared_histograms_use_one_set_of_edges() {
        let a = [1.0, 2.0, 3.0];
        let b = [4.0, 5.0, 6.0];
        let (ha, hb) = shared_histograms(&a, &b, 5).unwrap();
        assert_eq!(ha.edges, hb.edges);
        assert_eq!(ha.edges[0], 1.0);
        assert_eq!(ha.edges[5], 6.0);
        assert_eq!(ha.counts.iter().sum::<usize>(), 3);
        assert_eq!(hb.counts.iter().sum::<usize>(), 3);
    }
}

// src/data_analysis/descriptive.rs
