// src/data_analysis/distributions.rs

use statrs::distribution::{ContinuousCDF, Normal};

use crate::data_analysis::errors::AnalysisError;
use crate::data_analysis::linear_fit;

/// Quantile function of the standard normal distribution.
pub fn normal_quantile(p: f64) -> Result<f64, AnalysisError> {
    if !(p > 0.0 && p < 1.0) {
        return Err(AnalysisError::InvalidProbability { value: p });
    }
    let standard_normal = Normal::new(0.0, 1.0)
        .map_err(|e| AnalysisError::InvalidParameter(e.to_string()))?;
    Ok(standard_normal.inverse_cdf(p))
}

/// Quantile function of the Tukey-lambda distribution:
/// (p^lambda - (1-p)^lambda) / lambda, with the logistic quantile
/// ln(p / (1-p)) as the lambda = 0 limit.
pub fn tukey_lambda_quantile(p: f64, lambda: f64) -> Result<f64, AnalysisError> {
    if !(p > 0.0 && p < 1.0) {
        return Err(AnalysisError::InvalidProbability { value: p });
    }
    if lambda == 0.0 {
        Ok((p / (1.0 - p)).ln())
    } else {
        Ok((p.powf(lambda) - (1.0 - p).powf(lambda)) / lambda)
    }
}

/// Filliben estimates of the uniform order-statistic medians for a sample of
/// size n: m_1 = 1 - 0.5^(1/n), m_n = 0.5^(1/n), and
/// m_i = (i - 0.3175) / (n + 0.365) in between.
pub fn uniform_order_medians(n: usize) -> Result<Vec<f64>, AnalysisError> {
    if n < 2 {
        return Err(AnalysisError::TooFewPoints { needed: 2, got: n });
    }
    let tail = 0.5f64.powf(1.0 / n as f64);
    let mut medians = Vec::with_capacity(n);
    for i in 1..=n {
        let m = if i == 1 {
            1.0 - tail
        } else if i == n {
            tail
        } else {
            (i as f64 - 0.3175) / (n as f64 + 0.365)
        };
        medians.push(m);
    }
    Ok(medians)
}

/// Normal order-statistic medians: the normal quantiles of the Filliben
/// uniform order-statistic medians.
pub fn normal_order_medians(n: usize) -> Result<Vec<f64>, AnalysisError> {
    uniform_order_medians(n)?
        .into_iter()
        .map(normal_quantile)
        .collect()
}

/// Coordinates and fit for a normal probability plot.
#[derive(Debug, Clone)]
pub struct ProbabilityPlotData {
    /// Normal order-statistic medians (horizontal axis).
    pub theoretical: Vec<f64>,
    /// Input data sorted ascending (vertical axis).
    pub ordered: Vec<f64>,
    pub fit: linear_fit::LineFit,
}

/// Builds the normal probability plot of a series: ordered responses against
/// normal order-statistic medians, with the least-squares line through them.
/// The fit's r is the normal PPCC of the data.
pub fn normal_probability_plot_data(series: &[f64]) -> Result<ProbabilityPlotData, AnalysisError> {
    let n = series.len();
    if n < 2 {
        return Err(AnalysisError::TooFewPoints { needed: 2, got: n });
    }
    let mut ordered = series.to_vec();
    if ordered.iter().any(|v| !v.is_finite()) {
        return Err(AnalysisError::NonFiniteValue);
    }
    ordered.sort_by(f64::total_cmp);

    let theoretical = normal_order_medians(n)?;
    let fit = linear_fit::least_squares_line(&theoretical, &ordered)?;
    Ok(ProbabilityPlotData {
        theoretical,
        ordered,
        fit,
    })
}

/// Probability-plot correlation coefficient of a series against the normal
/// distribution.
pub fn normal_ppcc(series: &[f64]) -> Result<f64, AnalysisError> {
    Ok(normal_probability_plot_data(series)?.fit.r)
}

/// Result of a PPCC scan over a shape-parameter grid.
#[derive(Debug, Clone)]
pub struct PpccScan {
    pub shapes: Vec<f64>,
    pub correlations: Vec<f64>,
    pub optimal_shape: f64,
    pub optimal_correlation: f64,
}

/// Evenly spaced grid of shape or transform parameters.
#[derive(Debug, Clone, Copy)]
pub struct ParameterGrid {
    pub min: f64,
    pub max: f64,
    pub points: usize,
}

impl ParameterGrid {
    pub fn values(&self) -> Result<Vec<f64>, AnalysisError> {
        if self.points < 2 {
            return Err(AnalysisError::InvalidParameter(format!(
                "grid needs at least 2 points, got {}",
                self.points
            )));
        }
        if !(self.min < self.max) {
            return Err(AnalysisError::InvalidParameter(format!(
                "grid minimum {} is not below maximum {}",
                self.min, self.max
            )));
        }
        let step = (self.max - self.min) / (self.points - 1) as f64;
        Ok((0..self.points).map(|i| self.min + step * i as f64).collect())
    }
}

/// PPCC scan of a series against the Tukey-lambda family: for each shape on
/// the grid, the correlation of the ordered data with the Tukey-lambda
/// quantiles at the uniform order-statistic medians. The optimum is the first
/// grid point attaining the maximum correlation.
pub fn tukey_lambda_ppcc_scan(
    series: &[f64],
    grid: &ParameterGrid,
) -> Result<PpccScan, AnalysisError> {
    let n = series.len();
    if n < 2 {
        return Err(AnalysisError::TooFewPoints { needed: 2, got: n });
    }
    let mut ordered = series.to_vec();
    if ordered.iter().any(|v| !v.is_finite()) {
        return Err(AnalysisError::NonFiniteValue);
    }
    ordered.sort_by(f64::total_cmp);

    let medians = uniform_order_medians(n)?;
    let shapes = grid.values()?;
    let mut correlations = Vec::with_capacity(shapes.len());
    let mut best_index = 0;
    let mut best_r = f64::NEG_INFINITY;
    for (idx, &shape) in shapes.iter().enumerate() {
        let quantiles = medians
            .iter()
            .map(|&p| tukey_lambda_quantile(p, shape))
            .collect::<Result<Vec<f64>, _>>()?;
        let r = linear_fit::correlation(&quantiles, &ordered)?;
        // Strict comparison keeps the first occurrence on ties.
        if r > best_r {
            best_r = r;
            best_index = idx;
        }
        correlations.push(r);
    }

    Ok(PpccScan {
        optimal_shape: shapes[best_index],
        optimal_correlation: correlations[best_index],
        shapes,
        correlations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_quantile_is_symmetric_around_the_median() {
        assert!(normal_quantile(0.5).unwrap().abs() < 1e-12);
        let upper = normal_quantile(0.975).unwrap();
        let lower = normal_quantile(0.025).unwrap();
        assert!((upper + lower).abs() < 1e-9);
        assert!((upper - 1.959964).abs() < 1e-4);
    }

    #[test]
    fn probabilities_outside_the_open_interval_fail() {
        assert!(normal_quantile(0.0).is_err());
        assert!(normal_quantile(1.0).is_err());
        assert!(tukey_lambda_quantile(-0.1, 0.5).is_err());
    }

    #[test]
    fn tukey_lambda_limit_is_the_logistic_quantile() {
        let p = 0.73;
        let at_zero = tukey_lambda_quantile(p, 0.0).unwrap();
        let near_zero = tukey_lambda_quantile(p, 1e-9).unwrap();
        assert!((at_zero - (p / (1.0 - p)).ln()).abs() < 1e-12);
        assert!((at_zero - near_zero).abs() < 1e-6);
    }

    #[test]
    fn order_medians_are_increasing_and_symmetric() {
        let medians = uniform_order_medians(11).unwrap();
        for pair in medians.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for (lo, hi) in medians.iter().zip(medians.iter().rev()) {
            assert!((lo + hi - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn probability_plot_of_a_linear_ramp_correlates_strongly() {
        // An evenly spaced ramp is the quantile pattern of a uniform sample;
        // its normal PPCC is high but the fit is exact in neither tail.
        let series: Vec<f64> = (0..30).map(|i| i as f64).collect();
        let data = normal_probability_plot_data(&series).unwrap();
        assert_eq!(data.ordered.len(), data.theoretical.len());
        assert!(data.fit.r > 0.97);
    }

    #[test]
    fn tied_ppcc_scores_keep_the_first_shape() {
        // For n = 2 the order-statistic medians are p and 1 - p exactly, so
        // the two Tukey-lambda quantiles are exact negations of each other at
        // every positive shape. Against the symmetric sample [-1, 1] the
        // correlation is then exactly 1.0 on the whole grid, and the scan
        // must report the earliest grid point.
        let grid = ParameterGrid {
            min: 0.5,
            max: 1.5,
            points: 3,
        };
        let scan = tukey_lambda_ppcc_scan(&[-1.0, 1.0], &grid).unwrap();
        assert_eq!(scan.correlations, vec![1.0, 1.0, 1.0]);
        assert_eq!(scan.optimal_shape, 0.5);
        assert_eq!(scan.optimal_correlation, 1.0);
    }

    #[test]
    fn ppcc_scan_flags_the_normal_shape_region_for_normal_spacing() {
        // Data laid out at exact normal quantiles: the Tukey-lambda PPCC
        // should peak near lambda ~ 0.14, the classic normal approximation.
        let series: Vec<f64> = uniform_order_medians(40)
            .unwrap()
            .into_iter()
            .map(|p| normal_quantile(p).unwrap())
            .collect();
        let scan = tukey_lambda_ppcc_scan(
            &series,
            &ParameterGrid {
                min: -2.0,
                max: 2.0,
                points: 81,
            },
        )
        .unwrap();
        assert!(scan.optimal_correlation > 0.999);
        assert!(
            (scan.optimal_shape - 0.14).abs() < 0.3,
            "unexpected optimum {}",
            scan.optimal_shape
        );
    }
}

// src/data_analysis/distributions.rs
