// src/plot_functions/plot_bootstrap.rs

use plotters::style::RGBColor;
use std::error::Error;

use crate::constants::{
    BOOTSTRAP_CONFIDENCE_LEVEL, COLOR_CONFIDENCE_95, COLOR_DATA_MAIN, HISTOGRAM_BINS,
    LINE_WIDTH_FIT, LINE_WIDTH_PLOT, MARKER_SIZE_POINT,
};
use crate::data_analysis::bootstrap::{self, BootstrapOptions, BootstrapStatistic};
use crate::data_analysis::descriptive;
use crate::plot_framework::{
    calculate_range, draw_panel_grid, BarSeries, Orientation, PlotConfig, PlotSeries,
    ReferenceLine, SeriesStyle,
};

#[derive(Debug, Clone, Copy)]
pub struct BootstrapPlotOptions {
    pub bootstrap: BootstrapOptions,
    pub confidence: f64,
}

impl Default for BootstrapPlotOptions {
    fn default() -> Self {
        BootstrapPlotOptions {
            bootstrap: BootstrapOptions::default(),
            confidence: BOOTSTRAP_CONFIDENCE_LEVEL,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BootstrapSummary {
    /// Percentile confidence interval per statistic, in panel order
    /// (mean, median, midrange).
    pub intervals: Vec<(BootstrapStatistic, (f64, f64))>,
}

/// Generates the bootstrap plot: for the mean, median, and midrange, the
/// trace of the statistic across subsamples on top and its histogram with
/// percentile confidence bounds below.
pub fn plot_bootstrap(
    series: &[f64],
    output_path: &str,
    options: &BootstrapPlotOptions,
) -> Result<BootstrapSummary, Box<dyn Error>> {
    let statistics = [
        BootstrapStatistic::Mean,
        BootstrapStatistic::Median,
        BootstrapStatistic::Midrange,
    ];

    let color_data: RGBColor = *COLOR_DATA_MAIN;
    let color_bound: RGBColor = *COLOR_CONFIDENCE_95;

    let mut intervals = Vec::with_capacity(statistics.len());
    let mut trace_panels = Vec::with_capacity(statistics.len());
    let mut histogram_panels = Vec::with_capacity(statistics.len());

    for statistic in statistics {
        let values = bootstrap::bootstrap_statistic(series, statistic, &options.bootstrap)?;
        let interval = bootstrap::percentile_interval(&values, options.confidence)?;

        let (v_lo, v_hi) = descriptive::value_range(&values)?;
        let (v_min, v_max) = calculate_range(v_lo, v_hi);

        let trace: Vec<(f64, f64)> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| ((i + 1) as f64, v))
            .collect();
        trace_panels.push(Some(PlotConfig {
            title: format!("{} per Subsample", statistic.label()),
            x_label: "Subsample".to_string(),
            y_label: statistic.label().to_string(),
            x_range: 0.0..(values.len() + 1) as f64,
            y_range: v_min..v_max,
            series: vec![PlotSeries {
                data: trace,
                label: String::new(),
                color: color_data,
                stroke_width: LINE_WIDTH_PLOT,
                style: SeriesStyle::Circles {
                    size: MARKER_SIZE_POINT - 1,
                },
            }],
            ..Default::default()
        }));

        let histogram = descriptive::histogram(&values, HISTOGRAM_BINS)?;
        let hist_x_min = histogram.edges[0];
        let hist_x_max = *histogram.edges.last().ok_or("histogram has no edges")?;
        let (_, hist_y_max) = calculate_range(0.0, histogram.max_count() as f64);
        histogram_panels.push(Some(PlotConfig {
            title: format!(
                "{} ({}% CI: {:.3} to {:.3})",
                statistic.label(),
                (options.confidence * 100.0).round(),
                interval.0,
                interval.1
            ),
            x_label: statistic.label().to_string(),
            y_label: "Count".to_string(),
            x_range: hist_x_min..hist_x_max,
            y_range: 0.0..hist_y_max,
            bars: vec![BarSeries {
                counts: histogram.counts.iter().map(|&c| c as f64).collect(),
                edges: histogram.edges,
                color: color_data,
                label: String::new(),
            }],
            reference_lines: vec![
                ReferenceLine {
                    value: interval.0,
                    orientation: Orientation::Vertical,
                    color: color_bound,
                    stroke_width: LINE_WIDTH_FIT,
                    label: String::new(),
                },
                ReferenceLine {
                    value: interval.1,
                    orientation: Orientation::Vertical,
                    color: color_bound,
                    stroke_width: LINE_WIDTH_FIT,
                    label: String::new(),
                },
            ],
            ..Default::default()
        }));

        intervals.push((statistic, interval));
    }

    let mut panels = trace_panels;
    panels.append(&mut histogram_panels);
    draw_panel_grid(output_path, "Bootstrap Plot", 2, 3, &panels)?;

    Ok(BootstrapSummary { intervals })
}

// src/plot_functions/plot_bootstrap.rs
