// src/plot_functions/plot_probability.rs

use plotters::style::RGBColor;
use std::error::Error;

use crate::constants::{COLOR_DATA_MAIN, COLOR_FIT_LINE, LINE_WIDTH_FIT, MARKER_SIZE_POINT};
use crate::data_analysis::distributions;
use crate::data_analysis::linear_fit::LineFit;
use crate::plot_framework::{
    calculate_range, draw_chart, PlotConfig, PlotSeries, TextAnnotation,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ProbabilityPlotOptions {
    /// Annotate the chart with the correlation of the fit.
    pub show_ppcc: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct ProbabilityPlotSummary {
    pub fit: LineFit,
    /// Normal probability-plot correlation coefficient (the fit's r).
    pub ppcc: f64,
}

/// Generates the normal probability plot: ordered responses against normal
/// order-statistic medians, with the least-squares line. The closer the
/// points hug the line, the more normal the sample.
pub fn plot_probability(
    series: &[f64],
    output_path: &str,
    options: &ProbabilityPlotOptions,
) -> Result<ProbabilityPlotSummary, Box<dyn Error>> {
    let data = distributions::normal_probability_plot_data(series)?;

    let x_lo = data.theoretical[0];
    let x_hi = *data.theoretical.last().ok_or("no order medians")?;
    let y_lo = data.ordered[0];
    let y_hi = *data.ordered.last().ok_or("no ordered values")?;
    let (x_min, x_max) = calculate_range(x_lo, x_hi);
    let (y_min, y_max) = calculate_range(y_lo, y_hi);

    let color_points: RGBColor = *COLOR_DATA_MAIN;
    let color_fit: RGBColor = *COLOR_FIT_LINE;

    let points: Vec<(f64, f64)> = data
        .theoretical
        .iter()
        .zip(data.ordered.iter())
        .map(|(&t, &o)| (t, o))
        .collect();

    let mut annotations = Vec::new();
    if options.show_ppcc {
        annotations.push(TextAnnotation {
            x: x_min + (x_max - x_min) * 0.05,
            y: y_max - (y_max - y_min) * 0.05,
            text: format!("PPCC = {:.4}", data.fit.r),
        });
    }

    let config = PlotConfig {
        title: "Normal Probability Plot".to_string(),
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
                "Fit",
                color_fit,
                LINE_WIDTH_FIT,
            ),
        ],
        annotations,
        ..Default::default()
    };
    draw_chart(output_path, &config)?;

    Ok(ProbabilityPlotSummary {
        ppcc: data.fit.r,
        fit: data.fit,
    })
}

// src/plot_functions/plot_probability.rs
