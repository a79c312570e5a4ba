// src/data_analysis/weibull.rs

use std::f64::consts::LN_10;

use crate::data_analysis::errors::AnalysisError;
use crate::data_analysis::linear_fit;

/// Plotting positions p_i = (i - 0.3) / (N + 0.4) for the i-th order
/// statistic (1-indexed) of a sample of size n.
pub fn plotting_positions(n: usize) -> Result<Vec<f64>, AnalysisError> {
    if n < 2 {
        return Err(AnalysisError::TooFewPoints { needed: 2, got: n });
    }
    Ok((1..=n)
        .map(|i| (i as f64 - 0.3) / (n as f64 + 0.4))
        .collect())
}

/// Linearized coordinates of a Weibull plot: for the sorted sample,
/// x_i = log10(Y_i) and w_i = ln(-ln(1 - p_i)).
#[derive(Debug, Clone)]
pub struct WeibullCoordinates {
    /// log10 of the sorted sample.
    pub log_values: Vec<f64>,
    /// Transformed cumulative probabilities.
    pub transformed_probabilities: Vec<f64>,
}

/// Fitted line on the linearized coordinates, and the distribution
/// parameters it implies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeibullFit {
    pub slope: f64,
    pub intercept: f64,
    pub r: f64,
    /// slope / ln(10)
    pub shape: f64,
    /// 10^(-intercept / slope)
    pub scale: f64,
}

pub fn weibull_coordinates(series: &[f64]) -> Result<WeibullCoordinates, AnalysisError> {
    let n = series.len();
    if n < 2 {
        return Err(AnalysisError::TooFewPoints { needed: 2, got: n });
    }
    for &v in series {
        if !v.is_finite() {
            return Err(AnalysisError::NonFiniteValue);
        }
        if v <= 0.0 {
            return Err(AnalysisError::NonPositiveValue { value: v });
        }
    }

    let mut sorted = series.to_vec();
    sorted.sort_by(f64::total_cmp);

    let log_values: Vec<f64> = sorted.iter().map(|v| v.log10()).collect();
    let transformed_probabilities: Vec<f64> = plotting_positions(n)?
        .into_iter()
        .map(|p| (-(1.0 - p).ln()).ln())
        .collect();

    Ok(WeibullCoordinates {
        log_values,
        transformed_probabilities,
    })
}

/// Least-squares fit on the linearized Weibull plot, recovering the shape and
/// scale parameters of the distribution.
pub fn weibull_fit(series: &[f64]) -> Result<WeibullFit, AnalysisError> {
    let coords = weibull_coordinates(series)?;
    let fit = linear_fit::least_squares_line(
        &coords.log_values,
        &coords.transformed_probabilities,
    )?;

    if fit.slope == 0.0 {
        return Err(AnalysisError::ZeroSlope);
    }

    Ok(WeibullFit {
        slope: fit.slope,
        intercept: fit.intercept,
        r: fit.r,
        shape: fit.slope / LN_10,
        scale: 10f64.powf(-fit.intercept / fit.slope),
    })
}


// src/data_analysis/weibull.rs
