// src/plot_functions/plot_lag.rs

use plotters::style::RGBColor;
use std::error::Error;

use crate::constants::{COLOR_DATA_MAIN, MARKER_SIZE_POINT};
use crate::data_analysis::autocorrelation;
use crate::data_analysis::errors::AnalysisError;
use crate::plot_framework::{calculate_range, draw_chart, PlotConfig, PlotSeries};

#[derive(Debug, Clone, Copy)]
pub struct LagOptions {
    pub lag: usize,
}

impl Default for LagOptions {
    fn default() -> Self {
        LagOptions { lag: 1 }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LagSummary {
    pub lag: usize,
    /// Autocorrelation coefficient at the plotted lag.
    pub correlation: f64,
}

/// Generates the lag plot: Y_t against Y_{t-lag}. Structure in the scatter
/// flags non-randomness.
pub fn plot_lag(
    series: &[f64],
    output_path: &str,
    options: &LagOptions,
) -> Result<LagSummary, Box<dyn Error>> {
    let n = series.len();
    if options.lag == 0 || options.lag >= n {
        return Err(Box::new(AnalysisError::LagOutOfRange {
            lag: options.lag,
            len: n,
        }));
    }
    let correlation = autocorrelation::autocorrelation_coefficient(series, options.lag)?;

    let points: Vec<(f64, f64)> = series[..n - options.lag]
        .iter()
        .zip(series[options.lag..].iter())
        .map(|(&x, &y)| (x, y))
        .collect();

    let lo = series.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = series.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let (min, max) = calculate_range(lo, hi);

    let color_data: RGBColor = *COLOR_DATA_MAIN;
    let config = PlotConfig {
        title: format!("Lag Plot (lag {})", options.lag),
        x_label: format!("Y(t - {})", options.lag),
        y_label: "Y(t)".to_string(),
        x_range: min..max,
        y_range: min..max,
        series: vec![PlotSeries::points(points, "", color_data, MARKER_SIZE_POINT)],
        ..Default::default()
    };
    draw_chart(output_path, &config)?;

    Ok(LagSummary {
        lag: options.lag,
        correlation,
    })
}

// src/plot_functions/plot_lag.rs
