// src/plot_functions/plot_histogram.rs

use plotters::style::RGBColor;
use std::error::Error;

use crate::constants::{COLOR_DATA_MAIN, COLOR_PDF_OVERLAY, HISTOGRAM_BINS, LINE_WIDTH_FIT};
use crate::data_analysis::descriptive::{self, Histogram};
use crate::plot_framework::{
    calculate_range, draw_chart, BarSeries, PlotConfig, PlotSeries, TextAnnotation,
};

#[derive(Debug, Clone, Copy)]
pub struct HistogramOptions {
    pub bins: usize,
    /// Overlay the normal density with the sample mean and standard
    /// deviation, scaled to the count axis.
    pub normal_overlay: bool,
    /// Annotate the chart with n, mean, and standard deviation.
    pub show_stats: bool,
}

impl Default for HistogramOptions {
    fn default() -> Self {
        HistogramOptions {
            bins: HISTOGRAM_BINS,
            normal_overlay: false,
            show_stats: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HistogramSummary {
    pub histogram: Histogram,
    pub mean: f64,
    pub std: f64,
}

/// Generates the histogram of a sample, optionally with a fitted normal
/// density overlay.
pub fn plot_histogram(
    series: &[f64],
    output_path: &str,
    options: &HistogramOptions,
) -> Result<HistogramSummary, Box<dyn Error>> {
    let histogram = descriptive::histogram(series, options.bins)?;
    let mean = descriptive::mean(series)?;
    let std = descriptive::sample_std(series)?;

    let color_bars: RGBColor = *COLOR_DATA_MAIN;
    let color_pdf: RGBColor = *COLOR_PDF_OVERLAY;

    let x_min = histogram.edges[0];
    let x_max = *histogram.edges.last().ok_or("histogram has no edges")?;
    let (_, y_max) = calculate_range(0.0, histogram.max_count() as f64);

    let mut series_list = Vec::new();
    if options.normal_overlay {
        // Density times n * bin width matches the count scale of the bars.
        let scale = series.len() as f64 * histogram.bin_width();
        let steps = 200;
        let overlay: Result<Vec<(f64, f64)>, _> = (0..=steps)
            .map(|i| {
                let x = x_min + (x_max - x_min) * i as f64 / steps as f64;
                descriptive::normal_pdf(x, mean, std).map(|d| (x, d * scale))
            })
            .collect();
        series_list.push(PlotSeries::line(
            overlay?,
            "Normal fit",
            color_pdf,
            LINE_WIDTH_FIT,
        ));
    }

    let mut annotations = Vec::new();
    if options.show_stats {
        annotations.push(TextAnnotation {
            x: x_min + (x_max - x_min) * 0.03,
            y: y_max * 0.95,
            text: format!("n = {}, mean = {mean:.3}, std = {std:.3}", series.len()),
        });
    }

    let config = PlotConfig {
        title: "Histogram".to_string(),
        x_label: "Response".to_string(),
        y_label: "Count".to_string(),
        x_range: x_min..x_max,
        y_range: 0.0..y_max,
        series: series_list,
        bars: vec![BarSeries {
            edges: histogram.edges.clone(),
            counts: histogram.counts.iter().map(|&c| c as f64).collect(),
            color: color_bars,
            label: String::new(),
        }],
        annotations,
        ..Default::default()
    };
    draw_chart(output_path, &config)?;

    Ok(HistogramSummary {
        histogram,
        mean,
        std,
    })
}

// src/plot_functions/plot_histogram.rs
