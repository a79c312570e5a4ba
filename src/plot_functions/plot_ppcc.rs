// src/plot_functions/plot_ppcc.rs

use plotters::style::RGBColor;
use std::error::Error;

use crate::constants::{
    COLOR_DATA_MAIN, COLOR_SCAN_MARKER, LINE_WIDTH_PLOT, MARKER_SIZE_POINT, PPCC_GRID_POINTS,
    PPCC_SHAPE_MAX, PPCC_SHAPE_MIN,
};
use crate::data_analysis::distributions::{self, ParameterGrid, PpccScan};
use crate::plot_framework::{
    calculate_range, draw_chart, PlotConfig, PlotSeries, SeriesStyle, TextAnnotation,
};

#[derive(Debug, Clone, Copy)]
pub struct PpccOptions {
    pub grid: ParameterGrid,
}

impl Default for PpccOptions {
    fn default() -> Self {
        PpccOptions {
            grid: ParameterGrid {
                min: PPCC_SHAPE_MIN,
                max: PPCC_SHAPE_MAX,
                points: PPCC_GRID_POINTS,
            },
        }
    }
}

/// Generates the Tukey-lambda PPCC plot: the probability-plot correlation
/// coefficient at each shape parameter on the grid, with the optimum marked.
/// The optimal shape suggests a distributional family for the sample.
pub fn plot_ppcc(
    series: &[f64],
    output_path: &str,
    options: &PpccOptions,
) -> Result<PpccScan, Box<dyn Error>> {
    let scan = distributions::tukey_lambda_ppcc_scan(series, &options.grid)?;

    let color_curve: RGBColor = *COLOR_DATA_MAIN;
    let color_marker: RGBColor = *COLOR_SCAN_MARKER;

    let curve: Vec<(f64, f64)> = scan
        .shapes
        .iter()
        .zip(scan.correlations.iter())
        .map(|(&s, &r)| (s, r))
        .collect();

    let r_lo = scan.correlations.iter().cloned().fold(f64::INFINITY, f64::min);
    let r_hi = scan
        .correlations
        .iter()
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max);
    let (y_min, y_max) = calculate_range(r_lo, r_hi);

    let config = PlotConfig {
        title: "PPCC Plot (Tukey-Lambda)".to_string(),
        x_label: "Shape Parameter (lambda)".to_string(),
        y_label: "Correlation Coefficient".to_string(),
        x_range: options.grid.min..options.grid.max,
        y_range: y_min..y_max,
        series: vec![
            PlotSeries::line(curve, "", color_curve, LINE_WIDTH_PLOT),
            PlotSeries {
                data: vec![(scan.optimal_shape, scan.optimal_correlation)],
                label: format!("Optimum (lambda = {:.3})", scan.optimal_shape),
                color: color_marker,
                stroke_width: LINE_WIDTH_PLOT,
                style: SeriesStyle::Circles {
                    size: MARKER_SIZE_POINT + 1,
                },
            },
        ],
        annotations: vec![TextAnnotation {
            x: options.grid.min + (options.grid.max - options.grid.min) * 0.05,
            y: y_min + (y_max - y_min) * 0.08,
            text: format!("Max PPCC = {:.4}", scan.optimal_correlation),
        }],
        ..Default::default()
    };
    draw_chart(output_path, &config)?;

    Ok(scan)
}

// src/plot_functions/plot_ppcc.rs
