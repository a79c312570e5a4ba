// src/data_analysis/linear_fit.rs

use crate::data_analysis::errors::AnalysisError;

/// Least-squares line through (x, y) pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
    /// Pearson correlation coefficient of x and y.
    pub r: f64,
}

impl LineFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

fn validate_pairs(x: &[f64], y: &[f64]) -> Result<usize, AnalysisError> {
    if x.len() != y.len() {
        return Err(AnalysisError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    let n = x.len();
    if n < 2 {
        return Err(AnalysisError::TooFewPoints { needed: 2, got: n });
    }
    if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return Err(AnalysisError::NonFiniteValue);
    }
    Ok(n)
}

/// Fits y = slope * x + intercept by least squares.
pub fn least_squares_line(x: &[f64], y: &[f64]) -> Result<LineFit, AnalysisError> {
    let n = validate_pairs(x, y)? as f64;

    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut ss_xx = 0.0;
    let mut ss_yy = 0.0;
    let mut ss_xy = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        ss_xx += dx * dx;
        ss_yy += dy * dy;
        ss_xy += dx * dy;
    }

    if ss_xx == 0.0 {
        return Err(AnalysisError::ZeroVariance);
    }

    let slope = ss_xy / ss_xx;
    let intercept = mean_y - slope * mean_x;
    // A constant response correlates with nothing; r = 0 keeps the fit usable
    // for flat reference lines.
    let r = if ss_yy == 0.0 {
        0.0
    } else {
        ss_xy / (ss_xx * ss_yy).sqrt()
    };

    Ok(LineFit {
        slope,
        intercept,
        r,
    })
}

/// Pearson correlation coefficient. Unlike `least_squares_line`, a zero
/// variance on either side is an error here: the ratio is undefined.
pub fn correlation(x: &[f64], y: &[f64]) -> Result<f64, AnalysisError> {
    validate_pairs(x, y)?;

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut ss_xx = 0.0;
    let mut ss_yy = 0.0;
    let mut ss_xy = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        ss_xx += dx * dx;
        ss_yy += dy * dy;
        ss_xy += dx * dy;
    }

    if ss_xx == 0.0 || ss_yy == 0.0 {
        return Err(AnalysisError::ZeroVariance);
    }
    Ok(ss_xy / (ss_xx * ss_yy).sqrt())
}

/// Residual standard deviation of a fitted line: sqrt(SSE / (n - 2)).
pub fn residual_standard_deviation(
    x: &[f64],
    y: &[f64],
    fit: &LineFit,
) -> Result<f64, AnalysisError> {
    let n = validate_pairs(x, y)?;
    if n <= 2 {
        return Err(AnalysisError::TooFewPoints { needed: 3, got: n });
    }

    let sse: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| {
            let residual = yi - fit.predict(xi);
            residual * residual
        })
        .sum();
    Ok((sse / (n - 2) as f64).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_an_exact_line() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y: Vec<f64> = x.iter().map(|v| 2.5 * v - 1.0).collect();
        let fit = least_squares_line(&x, &y).unwrap();
        assert!((fit.slope - 2.5).abs() < 1e-12);
        assert!((fit.intercept + 1.0).abs() < 1e-12);
        assert!((fit.r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn descending_line_has_negative_unit_correlation() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [8.0, 6.0, 4.0, 2.0];
        assert!((correlation(&x, &y).unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_x_variance_is_rejected() {
        let x = [3.0, 3.0, 3.0];
        let y = [1.0, 2.0, 3.0];
        assert_eq!(least_squares_line(&x, &y), Err(AnalysisError::ZeroVariance));
        assert_eq!(correlation(&y, &x), Err(AnalysisError::ZeroVariance));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        assert_eq!(
            least_squares_line(&[1.0, 2.0], &[1.0]),
            Err(AnalysisError::LengthMismatch { left: 2, right: 1 })
        );
    }

    #[test]
    fn residual_std_is_zero_for_a_perfect_fit() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y: Vec<f64> = x.iter().map(|v| 0.5 * v + 4.0).collect();
        let fit = least_squares_line(&x, &y).unwrap();
        let rsd = residual_standard_deviation(&x, &y, &fit).unwrap();
        assert!(rsd.abs() < 1e-12);
    }

    #[test]
    fn residual_std_needs_more_than_two_points() {
        let x = [0.0, 1.0];
        let y = [0.0, 1.0];
        let fit = least_squares_line(&x, &y).unwrap();
        assert!(residual_standard_deviation(&x, &y, &fit).is_err());
    }
}

// src/data_analysis/linear_fit.rs
