// src/plot_functions/plot_box_cox_normality.rs

use plotters::style::RGBColor;
use std::error::Error;

use crate::constants::{
    COLOR_DATA_MAIN, COLOR_FIT_LINE, COLOR_SCAN_MARKER, HISTOGRAM_BINS, LINE_WIDTH_FIT,
    LINE_WIDTH_PLOT, MARKER_SIZE_POINT,
};
use crate::data_analysis::box_cox::{self, LambdaGrid, LambdaScan};
use crate::data_analysis::descriptive;
use crate::data_analysis::distributions;
use crate::plot_framework::{
    calculate_range, draw_chart, draw_panel_grid, BarSeries, PlotConfig, PlotSeries, SeriesStyle,
};

#[derive(Debug, Clone, Copy)]
pub struct BoxCoxNormalityOptions {
    pub grid: LambdaGrid,
}

impl Default for BoxCoxNormalityOptions {
    fn default() -> Self {
        BoxCoxNormalityOptions {
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
        title: "Normal PPCC vs Lambda".to_string(),
        x_label: "Lambda".to_string(),
        y_label: "PPCC".to_string(),
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

fn probability_panel(series: &[f64], title: &str) -> Result<PlotConfig, Box<dyn Error>> {
    let data = distributions::normal_probability_plot_data(series)?;
    let (x_min, x_max) = calculate_range(
        data.theoretical[0],
        *data.theoretical.last().ok_or("no order medians")?,
    );
    let (y_min, y_max) = calculate_range(
        data.ordered[0],
        *data.ordered.last().ok_or("no ordered values")?,
    );

    let color_points: RGBColor = *COLOR_DATA_MAIN;
    let color_fit: RGBColor = *COLOR_FIT_LINE;

    let points: Vec<(f64, f64)> = data
        .theoretical
        .iter()
        .zip(data.ordered.iter())
        .map(|(&t, &o)| (t, o))
        .collect();

    Ok(PlotConfig {
        title: format!("{title} (PPCC = {:.4})", data.fit.r),
        x_label: "Theoretical Quantiles".to_string(),
        y_label: "Ordered Response".to_string(),
        x_range: x_min..x_max,
        y_range: y_min..y_max,
        series: vec![
            PlotSeries::points(points, "", color_points, MARKER_SIZE_POINT),
            PlotSeries::line(
                vec![
                    (x_min, data.fit.predict(x_min)),
                    (x_max, data.fit.predict(x_max)),
                ],
                "",
                color_fit,
                LINE_WIDTH_FIT,
            ),
        ],
        ..Default::default()
    })
}

fn histogram_panel(series: &[f64], title: &str) -> Result<PlotConfig, Box<dyn Error>> {
    let histogram = descriptive::histogram(series, HISTOGRAM_BINS)?;
    let color_bars: RGBColor = *COLOR_DATA_MAIN;
    let x_min = histogram.edges[0];
    let x_max = *histogram.edges.last().ok_or("histogram has no edges")?;
    let (_, y_max) = calculate_range(0.0, histogram.max_count() as f64);

    Ok(PlotConfig {
        title: title.to_string(),
        x_label: "Response".to_string(),
        y_label: "Count".to_string(),
        x_range: x_min..x_max,
        y_range: 0.0..y_max,
        bars: vec![BarSeries {
            counts: histogram.counts.iter().map(|&c| c as f64).collect(),
            edges: histogram.edges,
            color: color_bars,
            label: String::new(),
        }],
        ..Default::default()
    })
}

/// Generates the Box-Cox normality plot: the normal PPCC of the transformed
/// sample at each lambda, with the optimum marked.
pub fn plot_box_cox_normality(
    series: &[f64],
    output_path: &str,
    options: &BoxCoxNormalityOptions,
) -> Result<LambdaScan, Box<dyn Error>> {
    let scan = box_cox::normality_scan(series, &options.grid)?;
    let mut config = scan_panel(&scan, &options.grid);
    config.title = "Box-Cox Normality Plot".to_string();
    draw_chart(output_path, &config)?;
    Ok(scan)
}

/// Generates the four-panel variant: the normal probability plot of the raw
/// sample, the lambda scan, the probability plot at the optimal lambda, and
/// the histogram of the transformed sample.
pub fn plot_box_cox_normality_set(
    series: &[f64],
    output_path: &str,
    options: &BoxCoxNormalityOptions,
) -> Result<LambdaScan, Box<dyn Error>> {
    let scan = box_cox::normality_scan(series, &options.grid)?;
    let transformed = box_cox::box_cox_series(series, scan.optimal_lambda)?;

    let panels = vec![
        Some(probability_panel(series, "Original Data")?),
        Some(scan_panel(&scan, &options.grid)),
        Some(probability_panel(
            &transformed,
            &format!("Transformed Data (lambda = {:.3})", scan.optimal_lambda),
        )?),
        Some(histogram_panel(&transformed, "Transformed Histogram")?),
    ];
    draw_panel_grid(output_path, "Box-Cox Normality Plot", 2, 2, &panels)?;
    Ok(scan)
}

// src/plot_functions/plot_box_cox_normality.rs
