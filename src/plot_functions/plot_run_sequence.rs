// src/plot_functions/plot_run_sequence.rs

use plotters::style::RGBColor;
use std::error::Error;

use crate::constants::{COLOR_DATA_MAIN, COLOR_REFERENCE_LINE, LINE_WIDTH_PLOT, MARKER_SIZE_POINT};
use crate::data_analysis::descriptive;
use crate::plot_framework::{
    calculate_range, draw_chart, Orientation, PlotConfig, PlotSeries, ReferenceLine, SeriesStyle,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct RunSequenceOptions {
    /// Draw a horizontal reference line at the sample mean.
    pub mean_line: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct RunSequenceSummary {
    pub mean: f64,
    pub std: f64,
}

/// Generates the run sequence plot: the series in observation order. Shifts
/// in location or spread show up as drifts in the trace.
pub fn plot_run_sequence(
    series: &[f64],
    output_path: &str,
    options: &RunSequenceOptions,
) -> Result<RunSequenceSummary, Box<dyn Error>> {
    let mean = descriptive::mean(series)?;
    let std = descriptive::sample_std(series)?;
    let (lo, hi) = descriptive::value_range(series)?;
    let (y_min, y_max) = calculate_range(lo, hi);

    let points: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(i, &v)| ((i + 1) as f64, v))
        .collect();

    let color_data: RGBColor = *COLOR_DATA_MAIN;
    let color_mean: RGBColor = *COLOR_REFERENCE_LINE;

    let mut reference_lines = Vec::new();
    if options.mean_line {
        reference_lines.push(ReferenceLine {
            value: mean,
            orientation: Orientation::Horizontal,
            color: color_mean,
            stroke_width: LINE_WIDTH_PLOT,
            label: "Mean".to_string(),
        });
    }

    let config = PlotConfig {
        title: "Run Sequence Plot".to_string(),
        x_label: "Run Order".to_string(),
        y_label: "Response".to_string(),
        x_range: 0.0..(series.len() + 1) as f64,
        y_range: y_min..y_max,
        series: vec![
            PlotSeries::line(points.clone(), "", color_data, LINE_WIDTH_PLOT),
            PlotSeries {
                data: points,
                label: String::new(),
                color: color_data,
                stroke_width: LINE_WIDTH_PLOT,
                style: SeriesStyle::Circles {
                    size: MARKER_SIZE_POINT,
                },
            },
        ],
        reference_lines,
        ..Default::default()
    };
    draw_chart(output_path, &config)?;

    Ok(RunSequenceSummary { mean, std })
}

// src/plot_functions/plot_run_sequence.rs
