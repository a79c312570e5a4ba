// src/plot_functions/plot_box_cox_linearity.rs

use plotters::style::RGBColor;
use std::error::Error;

use crate::constants::{
    COLOR_DATA_MAIN, COLOR_FIT_LINE, COLOR_SCAN_MARKER, LINE_WIDTH_FIT, LINE_WIDTH_PLOT,
    MARKER_SIZE_POINT,
};
use crate::data_analysis::box_cox::{self, LambdaGrid, LambdaScan};
use crate::data_analysis::linear_fit;
use crate::plot_framework::{
    calculate_range, draw_chart, draw_panel_grid, PlotConfig, PlotSeries, SeriesStyle,
};

#[derive(Debug, Clone, Copy)]
pub struct BoxCoxLinearityOptions {
    pub grid: LambdaGrid,
}

impl Default for BoxCoxLinearityOptions {
    fn default() -> Self {
        BoxCoxLinearityOptions {
            grid: box_cox::default_lambda_grid(),
        }
    }
}

fn scan_panel(scan: &LambdaScan, grid: &LambdaGrid) -> PlotConfig {
    let color_curve: RGBColor = *COLOR_DATA_MAIN;
    let color_marker: RGBColor = *COLOR_SCAN_MARKER;

    let curve: Vec<(f64, f64)> = scan
        .lambdas
        .iter()
        .zip(scan.correlations.iter())
        .map(|(&l, &r)| (l, r))
        .collect();
    let r_lo = scan.correlations.iter().cloned().fold(f64::INFINITY, f64::min);
    let r_hi = scan
        .correlations
        .iter()
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max);
    let (y_min, y_max) = calculate_range(r_lo, r_hi);

    PlotConfig {
        title: "Correlation vs Lambda".to_string(),
        x_label: "Lambda".to_string(),
        y_label: "Correlation Coefficient".to_string(),
        x_range: grid.min..grid.max,
        y_range: y_min..y_max,
        series: vec![
            PlotSeries::line(curve, "", color_curve, LINE_WIDTH_PLOT),
            PlotSeries {
                data: vec![(scan.optimal_lambda, scan.optimal_correlation)],
                label: format!("Optimum (lambda = {:.3})", scan.optimal_lambda),
                color: color_marker,
                stroke_width: LINE_WIDTH_PLOT,
                style: SeriesStyle::Circles {
                    size: MARKER_SIZE_POINT + 1,
                },
            },
        ],
        ..Default::default()
    }
}

fn scatter_panel(
    x: &[f64],
    y: &[f64],
    title: &str,
    x_label: &str,
    with_fit: bool,
) -> Result<PlotConfig, Box<dyn Error>> {
    let color_points: RGBColor = *COLOR_DATA_MAIN;
    let color_fit: RGBColor = *COLOR_FIT_LINE;

    let x_lo = x.iter().cloned().fold(f64::INFINITY, f64::min);
    let x_hi = x.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let y_lo = y.iter().cloned().fold(f64::INFINITY, f64::min);
    let y_hi = y.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let (x_min, x_max) = calculate_range(x_lo, x_hi);
    let (y_min, y_max) = calculate_range(y_lo, y_hi);

    let points: Vec<(f64, f64)> = x.iter().zip(y.iter()).map(|(&a, &b)| (a, b)).collect();
    let mut series = vec![PlotSeries::points(points, "", color_points, MARKER_SIZE_POINT)];
    if with_fit {
        let fit = linear_fit::least_squares_line(x, y)?;
        series.push(PlotSeries::line(
            vec![(x_min, fit.predict(x_min)), (x_max, fit.predict(x_max))],
            &format!("Fit (r = {:.3})", fit.r),
            color_fit,
            LINE_WIDTH_FIT,
        ));
    }

    Ok(PlotConfig {
        title: title.to_string(),
        x_label: x_label.to_string(),
        y_label: "Response".to_string(),
        x_range: x_min..x_max,
        y_range: y_min..y_max,
        series,
        ..Default::default()
    })
}

/// Generates the Box-Cox linearity plot: the correlation of the transformed
/// predictor with the response at each lambda, with the optimum marked.
pub fn plot_box_cox_linearity(
    x: &[f64],
    y: &[f64],
    output_path: &str,
    options: &BoxCoxLinearityOptions,
) -> Result<LambdaScan, Box<dyn Error>> {
    let scan = box_cox::linearity_scan(x, y, &options.grid)?;
    let mut config = scan_panel(&scan, &options.grid);
    config.title = "Box-Cox Linearity Plot".to_string();
    draw_chart(output_path, &config)?;
    Ok(scan)
}

/// Generates the panel variant: the raw scatter, the lambda scan, and the
/// scatter of the optimally transformed predictor with its fitted line, on a
/// 2x2 page (the fourth cell stays blank).
pub fn plot_box_cox_linearity_set(
    x: &[f64],
    y: &[f64],
    output_path: &str,
    options: &BoxCoxLinearityOptions,
) -> Result<LambdaScan, Box<dyn Error>> {
    let scan = box_cox::linearity_scan(x, y, &options.grid)?;
    let transformed = box_cox::box_cox_series(x, scan.optimal_lambda)?;

    let panels = vec![
        Some(scatter_panel(x, y, "Original Data", "X", false)?),
        Some(scan_panel(&scan, &options.grid)),
        Some(scatter_panel(
            &transformed,
            y,
            &format!("Transformed Data (lambda = {:.3})", scan.optimal_lambda),
            "T(X)",
            true,
        )?),
        None,
    ];
    draw_panel_grid(output_path, "Box-Cox Linearity Plot", 2, 2, &panels)?;
    Ok(scan)
}

// src/plot_functions/plot_box_cox_linearity.rs
