// src/plot_functions/plot_scatter.rs

use plotters::style::RGBColor;
use std::error::Error;

use crate::constants::{COLOR_DATA_MAIN, COLOR_FIT_LINE, LINE_WIDTH_FIT, MARKER_SIZE_POINT};
use crate::data_analysis::errors::AnalysisError;
use crate::data_analysis::linear_fit::{self, LineFit};
use crate::plot_framework::{calculate_range, draw_chart, PlotConfig, PlotSeries};

#[derive(Debug, Clone)]
pub struct ScatterOptions {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Overlay the least-squares line through the points.
    pub fit_line: bool,
}

impl Default for ScatterOptions {
    fn default() -> Self {
        ScatterOptions {
            title: "Scatter Plot".to_string(),
            x_label: "X".to_string(),
            y_label: "Y".to_string(),
            fit_line: false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScatterSummary {
    /// Present when the fit line was requested.
    pub fit: Option<LineFit>,
    /// sqrt(SSE / (n - 2)) of the fitted line; needs more than two points.
    pub residual_std: Option<f64>,
}

/// Generates a scatter plot of paired observations, optionally with the
/// least-squares line and its residual standard deviation.
pub fn plot_scatter(
    x: &[f64],
    y: &[f64],
    output_path: &str,
    options: &ScatterOptions,
) -> Result<ScatterSummary, Box<dyn Error>> {
    if x.len() != y.len() {
        return Err(Box::new(AnalysisError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        }));
    }
    if x.is_empty() {
        return Err(Box::new(AnalysisError::EmptySeries));
    }

    let x_lo = x.iter().cloned().fold(f64::INFINITY, f64::min);
    let x_hi = x.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let y_lo = y.iter().cloned().fold(f64::INFINITY, f64::min);
    let y_hi = y.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let (x_min, x_max) = calculate_range(x_lo, x_hi);
    let (y_min, y_max) = calculate_range(y_lo, y_hi);

    let color_data: RGBColor = *COLOR_DATA_MAIN;
    let color_fit: RGBColor = *COLOR_FIT_LINE;

    let points: Vec<(f64, f64)> = x.iter().zip(y.iter()).map(|(&a, &b)| (a, b)).collect();
    let mut series = vec![PlotSeries::points(points, "", color_data, MARKER_SIZE_POINT)];

    let mut residual_std = None;
    let fit = if options.fit_line {
        let fit = linear_fit::least_squares_line(x, y)?;
        series.push(PlotSeries::line(
            vec![(x_min, fit.predict(x_min)), (x_max, fit.predict(x_max))],
            &format!("Fit (r = {:.3})", fit.r),
            color_fit,
            LINE_WIDTH_FIT,
        ));
        if x.len() > 2 {
            residual_std = Some(linear_fit::residual_standard_deviation(x, y, &fit)?);
        }
        Some(fit)
    } else {
        None
    };

    let config = PlotConfig {
        title: options.title.clone(),
        x_label: options.x_label.clone(),
        y_label: options.y_label.clone(),
        x_range: x_min..x_max,
        y_range: y_min..y_max,
        series,
        ..Default::default()
    };
    draw_chart(output_path, &config)?;

    Ok(ScatterSummary { fit, residual_std })
}

// src/plot_functions/plot_scatter.rs
