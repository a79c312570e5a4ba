// src/plot_functions/plot_bihistogram.rs

use plotters::style::RGBColor;
use std::error::Error;

use crate::constants::{
    COLOR_DATA_MAIN, COLOR_DATA_SECONDARY, COLOR_REFERENCE_LINE, HISTOGRAM_BINS, LINE_WIDTH_PLOT,
};
use crate::data_analysis::descriptive::{self, Histogram};
use crate::plot_framework::{
    calculate_range, draw_chart, AxisTickFormat, BarSeries, Orientation, PlotConfig,
    ReferenceLine,
};

#[derive(Debug, Clone, Copy)]
pub struct BihistogramOptions {
    pub bins: usize,
}

impl Default for BihistogramOptions {
    fn default() -> Self {
        BihistogramOptions {
            bins: HISTOGRAM_BINS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BihistogramSummary {
    pub above: Histogram,
    pub below: Histogram,
}

/// Generates the bihistogram: two samples binned over shared edges, the
/// first drawn upward and the second mirrored below the axis. Shifts in
/// location or spread between the two samples read directly off the chart.
pub fn plot_bihistogram(
    above: &[f64],
    below: &[f64],
    output_path: &str,
    options: &BihistogramOptions,
) -> Result<BihistogramSummary, Box<dyn Error>> {
    let (hist_above, hist_below) = descriptive::shared_histograms(above, below, options.bins)?;

    let color_above: RGBColor = *COLOR_DATA_MAIN;
    let color_below: RGBColor = *COLOR_DATA_SECONDARY;
    let color_axis: RGBColor = *COLOR_REFERENCE_LINE;

    let x_min = hist_above.edges[0];
    let x_max = *hist_above.edges.last().ok_or("histogram has no edges")?;
    let tallest = hist_above.max_count().max(hist_below.max_count()) as f64;
    let (_, y_max) = calculate_range(0.0, tallest);

    let config = PlotConfig {
        title: "Bihistogram".to_string(),
        x_label: "Response".to_string(),
        y_label: "Count".to_string(),
        x_range: x_min..x_max,
        y_range: -y_max..y_max,
        bars: vec![
            BarSeries {
                edges: hist_above.edges.clone(),
                counts: hist_above.counts.iter().map(|&c| c as f64).collect(),
                color: color_above,
                label: "Sample 1".to_string(),
            },
            BarSeries {
                edges: hist_below.edges.clone(),
                counts: hist_below.counts.iter().map(|&c| -(c as f64)).collect(),
                color: color_below,
                label: "Sample 2".to_string(),
            },
        ],
        reference_lines: vec![ReferenceLine {
            value: 0.0,
            orientation: Orientation::Horizontal,
            color: color_axis,
            stroke_width: LINE_WIDTH_PLOT,
            label: String::new(),
        }],
        y_tick_format: AxisTickFormat::Magnitude,
        ..Default::default()
    };
    draw_chart(output_path, &config)?;

    Ok(BihistogramSummary {
        above: hist_above,
        below: hist_below,
    })
}

// src/plot_functions/plot_bihistogram.rs
