// src/plot_functions/plot_four.rs

use plotters::style::RGBColor;
use std::error::Error;

use crate::constants::{
    COLOR_DATA_MAIN, COLOR_FIT_LINE, HISTOGRAM_BINS, LINE_WIDTH_FIT, LINE_WIDTH_PLOT,
    MARKER_SIZE_POINT,
};
use crate::data_analysis::autocorrelation;
use crate::data_analysis::descriptive;
use crate::data_analysis::distributions;
use crate::plot_framework::{
    calculate_range, draw_panel_grid, BarSeries, PlotConfig, PlotSeries,
};

#[derive(Debug, Clone, Copy)]
pub struct FourPlotOptions {
    pub bins: usize,
}

impl Default for FourPlotOptions {
    fn default() -> Self {
        FourPlotOptions {
            bins: HISTOGRAM_BINS,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FourPlotSummary {
    pub mean: f64,
    pub std: f64,
    pub lag1_autocorrelation: f64,
    pub normal_ppcc: f64,
}

/// Generates the 4-plot: run sequence, lag plot, histogram, and normal
/// probability plot on one page. Together they check the fixed-location,
/// fixed-variation, random, and normal assumptions behind a univariate
/// analysis.
pub fn plot_four(
    series: &[f64],
    output_path: &str,
    options: &FourPlotOptions,
) -> Result<FourPlotSummary, Box<dyn Error>> {
    let mean = descriptive::mean(series)?;
    let std = descriptive::sample_std(series)?;
    let lag1 = autocorrelation::autocorrelation_coefficient(series, 1)?;
    let probability = distributions::normal_probability_plot_data(series)?;
    let histogram = descriptive::histogram(series, options.bins)?;

    let color_data: RGBColor = *COLOR_DATA_MAIN;
    let color_fit: RGBColor = *COLOR_FIT_LINE;

    let (value_lo, value_hi) = descriptive::value_range(series)?;
    let (value_min, value_max) = calculate_range(value_lo, value_hi);

    // Run sequence.
    let run_points: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(i, &v)| ((i + 1) as f64, v))
        .collect();
    let run_panel = PlotConfig {
        title: "Run Sequence".to_string(),
        x_label: "Run Order".to_string(),
        y_label: "Response".to_string(),
        x_range: 0.0..(series.len() + 1) as f64,
        y_range: value_min..value_max,
        series: vec![PlotSeries::line(run_points, "", color_data, LINE_WIDTH_PLOT)],
        ..Default::default()
    };

    // Lag 1.
    let lag_points: Vec<(f64, f64)> = series[..series.len() - 1]
        .iter()
        .zip(series[1..].iter())
        .map(|(&x, &y)| (x, y))
        .collect();
    let lag_panel = PlotConfig {
        title: "Lag Plot".to_string(),
        x_label: "Y(t - 1)".to_string(),
        y_label: "Y(t)".to_string(),
        x_range: value_min..value_max,
        y_range: value_min..value_max,
        series: vec![PlotSeries::points(
            lag_points,
            "",
            color_data,
            MARKER_SIZE_POINT,
        )],
        ..Default::default()
    };

    // Histogram.
    let hist_x_min = histogram.edges[0];
    let hist_x_max = *histogram.edges.last().ok_or("histogram has no edges")?;
    let (_, hist_y_max) = calculate_range(0.0, histogram.max_count() as f64);
    let hist_panel = PlotConfig {
        title: "Histogram".to_string(),
        x_label: "Response".to_string(),
        y_label: "Count".to_string(),
        x_range: hist_x_min..hist_x_max,
        y_range: 0.0..hist_y_max,
        bars: vec![BarSeries {
            counts: histogram.counts.iter().map(|&c| c as f64).collect(),
            edges: histogram.edges,
            color: color_data,
            label: String::new(),
        }],
        ..Default::default()
    };

    // Normal probability.
    let (prob_x_min, prob_x_max) = calculate_range(
        probability.theoretical[0],
        *probability.theoretical.last().ok_or("no order medians")?,
    );
    let prob_points: Vec<(f64, f64)> = probability
        .theoretical
        .iter()
        .zip(probability.ordered.iter())
        .map(|(&t, &o)| (t, o))
        .collect();
    let prob_panel = PlotConfig {
        title: format!("Normal Probability (PPCC = {:.4})", probability.fit.r),
        x_label: "Theoretical Quantiles".to_string(),
        y_label: "Ordered Response".to_string(),
        x_range: prob_x_min..prob_x_max,
        y_range: value_min..value_max,
        series: vec![
            PlotSeries::points(prob_points, "", color_data, MARKER_SIZE_POINT),
            PlotSeries::line(
                vec![
                    (prob_x_min, probability.fit.predict(prob_x_min)),
                    (prob_x_max, probability.fit.predict(prob_x_max)),
                ],
                "",
                color_fit,
                LINE_WIDTH_FIT,
            ),
        ],
        ..Default::default()
    };

    let panels = vec![
        Some(run_panel),
        Some(lag_panel),
        Some(hist_panel),
        Some(prob_panel),
    ];
    draw_panel_grid(output_path, "4-Plot", 2, 2, &panels)?;

    Ok(FourPlotSummary {
        mean,
        std,
        lag1_autocorrelation: lag1,
        normal_ppcc: probability.fit.r,
    })
}

// src/plot_functions/plot_four.rs
