// src/plot_functions/plot_doe_scatter.rs

use plotters::style::RGBColor;
use std::error::Error;

use crate::constants::{COLOR_DATA_MAIN, COLOR_SCAN_MARKER, MARKER_SIZE_POINT};
use crate::data_analysis::errors::AnalysisError;
use crate::data_analysis::factor::{self, SummaryStatistic};
use crate::plot_framework::{
    calculate_range, draw_panel_grid, AxisTickFormat, PlotConfig, PlotSeries, SeriesStyle,
};

#[derive(Debug, Clone, Default)]
pub struct DoeScatterOptions {
    /// One name per factor column; missing names fall back to "Factor k".
    pub factor_names: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DoeScatterSummary {
    /// Per factor, the mean response at each level, sorted by level.
    pub level_means: Vec<Vec<(i64, f64)>>,
}

/// Generates the DOE scatter plot: one panel per factor, every response
/// plotted against that factor's level, with the level means marked. Levels
/// sit at evenly spaced encoded positions and all panels share the response
/// axis, so factor effects compare directly.
pub fn plot_doe_scatter(
    response: &[f64],
    factors: &[&[i64]],
    output_path: &str,
    options: &DoeScatterOptions,
) -> Result<DoeScatterSummary, Box<dyn Error>> {
    if factors.is_empty() {
        return Err(Box::new(AnalysisError::InvalidParameter(
            "at least one factor column is required".to_string(),
        )));
    }

    let color_points: RGBColor = *COLOR_DATA_MAIN;
    let color_means: RGBColor = *COLOR_SCAN_MARKER;

    let y_lo = response.iter().cloned().fold(f64::INFINITY, f64::min);
    let y_hi = response.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let (y_min, y_max) = calculate_range(y_lo, y_hi);

    let mut level_means = Vec::with_capacity(factors.len());
    let mut panels = Vec::with_capacity(factors.len());

    for (index, levels) in factors.iter().enumerate() {
        let means = factor::statistic_by_level(response, levels, SummaryStatistic::Mean)?;
        let positions = factor::encode_levels(levels);
        let distinct = factor::distinct_levels(levels);

        let points: Vec<(f64, f64)> = positions
            .iter()
            .zip(response.iter())
            .map(|(&p, &r)| (p as f64, r))
            .collect();
        let mean_points: Vec<(f64, f64)> = means
            .iter()
            .enumerate()
            .map(|(p, &(_, m))| (p as f64, m))
            .collect();

        let name = options
            .factor_names
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("Factor {}", index + 1));
        let labels: Vec<String> = distinct.iter().map(|l| l.to_string()).collect();

        panels.push(Some(PlotConfig {
            title: name.clone(),
            x_label: name,
            y_label: "Response".to_string(),
            x_range: -1.0..distinct.len() as f64,
            y_range: y_min..y_max,
            series: vec![
                PlotSeries::points(points, "", color_points, MARKER_SIZE_POINT),
                PlotSeries {
                    data: mean_points,
                    label: "Level mean".to_string(),
                    color: color_means,
                    stroke_width: 1,
                    style: SeriesStyle::Triangles {
                        size: MARKER_SIZE_POINT + 2,
                    },
                },
            ],
            x_tick_format: AxisTickFormat::CategoryLabels(labels),
            ..Default::default()
        }));

        level_means.push(means);
    }

    draw_panel_grid(output_path, "DOE Scatter Plot", 1, factors.len(), &panels)?;

    Ok(DoeScatterSummary { level_means })
}

// src/plot_functions/plot_doe_scatter.rs
