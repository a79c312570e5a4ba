// src/plot_functions/plot_qq.rs

use plotters::style::RGBColor;
use std::error::Error;

use crate::constants::{COLOR_DATA_MAIN, COLOR_REFERENCE_LINE, LINE_WIDTH_PLOT, MARKER_SIZE_POINT};
use crate::data_analysis::quantile;
use crate::plot_framework::{calculate_range, draw_chart, PlotConfig, PlotSeries};

#[derive(Debug, Clone, Default)]
pub struct QqOptions {
    pub x_label: String,
    pub y_label: String,
}

#[derive(Debug, Clone)]
pub struct QqSummary {
    /// Matched quantile pairs, ascending.
    pub pairs: Vec<(f64, f64)>,
}

/// Generates the quantile-quantile plot of two samples against the identity
/// line. Points off the diagonal flag a difference in distribution, not just
/// in a summary statistic.
pub fn plot_qq(
    a: &[f64],
    b: &[f64],
    output_path: &str,
    options: &QqOptions,
) -> Result<QqSummary, Box<dyn Error>> {
    let pairs = quantile::quantile_pairs(a, b)?;

    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &(x, y) in &pairs {
        lo = lo.min(x).min(y);
        hi = hi.max(x).max(y);
    }
    let (min, max) = calculate_range(lo, hi);

    let color_points: RGBColor = *COLOR_DATA_MAIN;
    let color_identity: RGBColor = *COLOR_REFERENCE_LINE;

    let config = PlotConfig {
        title: "Quantile-Quantile Plot".to_string(),
        x_label: if options.x_label.is_empty() {
            "Sample 1 Quantiles".to_string()
        } else {
            options.x_label.clone()
        },
        y_label: if options.y_label.is_empty() {
            "Sample 2 Quantiles".to_string()
        } else {
            options.y_label.clone()
        },
        x_range: min..max,
        y_range: min..max,
        series: vec![
            PlotSeries::line(
                vec![(min, min), (max, max)],
                "Identity",
                color_identity,
                LINE_WIDTH_PLOT,
            ),
            PlotSeries::points(pairs.clone(), "", color_points, MARKER_SIZE_POINT),
        ],
        ..Default::default()
    };
    draw_chart(output_path, &config)?;

    Ok(QqSummary { pairs })
}

// src/plot_functions/plot_qq.rs
