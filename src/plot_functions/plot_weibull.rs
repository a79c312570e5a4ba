// src/plot_functions/plot_weibull.rs

use plotters::style::RGBColor;
use std::error::Error;

use crate::constants::{
    COLOR_DATA_MAIN, COLOR_FIT_LINE, LINE_WIDTH_FIT, MARKER_SIZE_POINT, WEIBULL_FIT_LINE_P_MAX,
    WEIBULL_FIT_LINE_P_MIN,
};
use crate::data_analysis::weibull::{self, WeibullFit};
use crate::plot_framework::{
    calculate_range, draw_chart, AxisTickFormat, PlotConfig, PlotSeries, TextAnnotation,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct WeibullOptions {
    /// Annotate the chart with the fitted shape and scale.
    pub show_parameters: bool,
}

/// Generates the Weibull plot: sorted sample on a log10 horizontal axis
/// against ln(-ln(1 - p)) of the plotting positions, labelled as cumulative
/// percent. A Weibull sample linearizes; the fitted line recovers the shape
/// and scale parameters.
pub fn plot_weibull(
    series: &[f64],
    output_path: &str,
    options: &WeibullOptions,
) -> Result<WeibullFit, Box<dyn Error>> {
    let coords = weibull::weibull_coordinates(series)?;
    let fit = weibull::weibull_fit(series)?;

    let points: Vec<(f64, f64)> = coords
        .log_values
        .iter()
        .zip(coords.transformed_probabilities.iter())
        .map(|(&x, &w)| (x, w))
        .collect();

    // The fitted line spans a fixed probability window rather than the data,
    // so short samples still show the full trend.
    let w_low = (-(1.0 - WEIBULL_FIT_LINE_P_MIN).ln()).ln();
    let w_high = (-(1.0 - WEIBULL_FIT_LINE_P_MAX).ln()).ln();
    let fit_line = vec![
        ((w_low - fit.intercept) / fit.slope, w_low),
        ((w_high - fit.intercept) / fit.slope, w_high),
    ];

    let mut x_lo = f64::INFINITY;
    let mut x_hi = f64::NEG_INFINITY;
    for &(x, _) in points.iter().chain(fit_line.iter()) {
        x_lo = x_lo.min(x);
        x_hi = x_hi.max(x);
    }
    let (x_min, x_max) = calculate_range(x_lo, x_hi);
    let (y_min, y_max) = calculate_range(w_low, w_high);

    let color_points: RGBColor = *COLOR_DATA_MAIN;
    let color_fit: RGBColor = *COLOR_FIT_LINE;

    let mut annotations = Vec::new();
    if options.show_parameters {
        annotations.push(TextAnnotation {
            x: x_min + (x_max - x_min) * 0.05,
            y: y_max - (y_max - y_min) * 0.05,
            text: format!(
                "shape = {:.3}, scale = {:.3}, r = {:.4}",
                fit.shape, fit.scale, fit.r
            ),
        });
    }

    let config = PlotConfig {
        title: "Weibull Plot".to_string(),
        x_label: "log10(Response)".to_string(),
        y_label: "Cumulative Percent".to_string(),
        x_range: x_min..x_max,
        y_range: y_min..y_max,
        series: vec![
            PlotSeries::points(points, "", color_points, MARKER_SIZE_POINT),
            PlotSeries::line(fit_line, "Weibull fit", color_fit, LINE_WIDTH_FIT),
        ],
        annotations,
        y_tick_format: AxisTickFormat::WeibullPercent,
        ..Default::default()
    };
    draw_chart(output_path, &config)?;

    Ok(fit)
}

// src/plot_functions/plot_weibull.rs
