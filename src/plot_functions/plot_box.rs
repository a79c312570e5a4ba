// src/plot_functions/plot_box.rs

use plotters::style::RGBColor;
use std::error::Error;

use crate::constants::{
    COLOR_DATA_MAIN, COLOR_OUTLIER, LINE_WIDTH_FIT, LINE_WIDTH_PLOT, MARKER_SIZE_OUTLIER,
};
use crate::data_analysis::errors::AnalysisError;
use crate::data_analysis::quantile::{self, BoxStats};
use crate::plot_framework::{
    calculate_range, draw_chart, AxisTickFormat, PlotConfig, PlotSeries, SeriesStyle, SpanBar,
};

const BOX_WIDTH: f64 = 0.5;
const CAP_WIDTH: f64 = 0.25;

#[derive(Debug, Clone, Default)]
pub struct BoxPlotOptions {
    pub title: String,
    pub y_label: String,
}

#[derive(Debug, Clone)]
pub struct BoxPlotSummary {
    /// Per-group five-number summaries, in input order.
    pub groups: Vec<(String, BoxStats)>,
}

/// Generates side-by-side box-and-whisker plots of the given groups.
/// Whiskers reach the furthest points within 1.5 IQR of the quartiles;
/// points beyond the fences are drawn individually.
pub fn plot_box(
    groups: &[(&str, &[f64])],
    output_path: &str,
    options: &BoxPlotOptions,
) -> Result<BoxPlotSummary, Box<dyn Error>> {
    if groups.is_empty() {
        return Err(Box::new(AnalysisError::EmptySeries));
    }

    let color_box: RGBColor = *COLOR_DATA_MAIN;
    let color_outlier: RGBColor = *COLOR_OUTLIER;

    let mut summaries = Vec::with_capacity(groups.len());
    let mut span_bars = Vec::new();
    let mut whisker_segments = Vec::new();
    let mut median_segments = Vec::new();
    let mut outlier_points = Vec::new();
    let mut y_lo = f64::INFINITY;
    let mut y_hi = f64::NEG_INFINITY;

    for (index, (name, values)) in groups.iter().enumerate() {
        let stats = quantile::box_stats(values)?;
        let x = index as f64;

        span_bars.push(SpanBar {
            position: x,
            low: stats.q1,
            high: stats.q3,
            width: BOX_WIDTH,
        });
        median_segments.push(vec![
            (x - BOX_WIDTH / 2.0, stats.median),
            (x + BOX_WIDTH / 2.0, stats.median),
        ]);
        // Whisker stems and caps.
        whisker_segments.push(vec![(x, stats.q1), (x, stats.whisker_low)]);
        whisker_segments.push(vec![(x, stats.q3), (x, stats.whisker_high)]);
        whisker_segments.push(vec![
            (x - CAP_WIDTH / 2.0, stats.whisker_low),
            (x + CAP_WIDTH / 2.0, stats.whisker_low),
        ]);
        whisker_segments.push(vec![
            (x - CAP_WIDTH / 2.0, stats.whisker_high),
            (x + CAP_WIDTH / 2.0, stats.whisker_high),
        ]);
        for &outlier in &stats.outliers {
            outlier_points.push((x, outlier));
            y_lo = y_lo.min(outlier);
            y_hi = y_hi.max(outlier);
        }
        y_lo = y_lo.min(stats.whisker_low);
        y_hi = y_hi.max(stats.whisker_high);

        summaries.push((name.to_string(), stats));
    }

    let (y_min, y_max) = calculate_range(y_lo, y_hi);

    let mut series = Vec::new();
    for segment in whisker_segments {
        series.push(PlotSeries::line(segment, "", color_box, LINE_WIDTH_PLOT));
    }
    for segment in median_segments {
        series.push(PlotSeries::line(segment, "", color_box, LINE_WIDTH_FIT));
    }
    if !outlier_points.is_empty() {
        series.push(PlotSeries {
            data: outlier_points,
            label: String::new(),
            color: color_outlier,
            stroke_width: LINE_WIDTH_PLOT,
            style: SeriesStyle::Crosses {
                size: MARKER_SIZE_OUTLIER,
            },
        });
    }

    let labels: Vec<String> = groups.iter().map(|(name, _)| name.to_string()).collect();
    let config = PlotConfig {
        title: if options.title.is_empty() {
            "Box Plot".to_string()
        } else {
            options.title.clone()
        },
        x_label: "Group".to_string(),
        y_label: if options.y_label.is_empty() {
            "Response".to_string()
        } else {
            options.y_label.clone()
        },
        x_range: -1.0..groups.len() as f64,
        y_range: y_min..y_max,
        series,
        span_bars,
        x_tick_format: AxisTickFormat::CategoryLabels(labels),
        ..Default::default()
    };
    draw_chart(output_path, &config)?;

    Ok(BoxPlotSummary { groups: summaries })
}

// src/plot_functions/plot_box.rs
