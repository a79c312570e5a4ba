// src/plot_functions/plot_doe_statistic.rs

use plotters::style::RGBColor;
use std::error::Error;

use crate::constants::{
    COLOR_DATA_MAIN, COLOR_REFERENCE_LINE, LINE_WIDTH_PLOT, MARKER_SIZE_POINT,
};
use crate::data_analysis::errors::AnalysisError;
use crate::data_analysis::factor::{self, SummaryStatistic};
use crate::plot_framework::{
    calculate_range, draw_panel_grid, AxisTickFormat, Orientation, PlotConfig, PlotSeries,
    ReferenceLine, SeriesStyle,
};

#[derive(Debug, Clone)]
pub struct DoeStatisticOptions {
    pub statistic: SummaryStatistic,
    /// One name per factor column; missing names fall back to "Factor k".
    pub factor_names: Vec<String>,
}

impl Default for DoeStatisticOptions {
    fn default() -> Self {
        DoeStatisticOptions {
            statistic: SummaryStatistic::Mean,
            factor_names: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DoeStatisticSummary {
    /// Per factor, the statistic at each level, sorted by level.
    pub level_statistics: Vec<Vec<(i64, f64)>>,
    /// The statistic over the whole response (the grand reference line).
    pub grand_statistic: f64,
}

/// Generates the DOE mean (or median, or standard deviation) plot: one panel
/// per factor, the chosen statistic at each level connected by a line, with
/// the grand statistic as a reference. Steep segments flag important factors.
pub fn plot_doe_statistic(
    response: &[f64],
    factors: &[&[i64]],
    output_path: &str,
    options: &DoeStatisticOptions,
) -> Result<DoeStatisticSummary, Box<dyn Error>> {
    if factors.is_empty() {
        return Err(Box::new(AnalysisError::InvalidParameter(
            "at least one factor column is required".to_string(),
        )));
    }

    let grand = options.statistic.evaluate(response)?;

    let color_line: RGBColor = *COLOR_DATA_MAIN;
    let color_grand: RGBColor = *COLOR_REFERENCE_LINE;

    let mut level_statistics = Vec::with_capacity(factors.len());
    for levels in factors {
        level_statistics.push(factor::statistic_by_level(
            response,
            levels,
            options.statistic,
        )?);
    }

    // Shared statistic axis across panels.
    let mut y_lo = grand;
    let mut y_hi = grand;
    for stats in &level_statistics {
        for &(_, v) in stats {
            y_lo = y_lo.min(v);
            y_hi = y_hi.max(v);
        }
    }
    let (y_min, y_max) = calculate_range(y_lo, y_hi);

    let mut panels = Vec::with_capacity(factors.len());
    for (index, stats) in level_statistics.iter().enumerate() {
        // Levels at evenly spaced encoded positions, labelled by code.
        let points: Vec<(f64, f64)> = stats
            .iter()
            .enumerate()
            .map(|(p, &(_, v))| (p as f64, v))
            .collect();
        let labels: Vec<String> = stats.iter().map(|&(l, _)| l.to_string()).collect();

        let name = options
            .factor_names
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("Factor {}", index + 1));

        panels.push(Some(PlotConfig {
            title: name.clone(),
            x_label: name,
            y_label: options.statistic.label().to_string(),
            x_range: -1.0..stats.len() as f64,
            y_range: y_min..y_max,
            series: vec![
                PlotSeries::line(points.clone(), "", color_line, LINE_WIDTH_PLOT),
                PlotSeries {
                    data: points,
                    label: String::new(),
                    color: color_line,
                    stroke_width: LINE_WIDTH_PLOT,
                    style: SeriesStyle::Circles {
                        size: MARKER_SIZE_POINT,
                    },
                },
            ],
            reference_lines: vec![ReferenceLine {
                value: grand,
                orientation: Orientation::Horizontal,
                color: color_grand,
                stroke_width: LINE_WIDTH_PLOT,
                label: String::new(),
            }],
            x_tick_format: AxisTickFormat::CategoryLabels(labels),
            ..Default::default()
        }));
    }

    draw_panel_grid(
        output_path,
        &format!("DOE {} Plot", options.statistic.label()),
        1,
        factors.len(),
        &panels,
    )?;

    Ok(DoeStatisticSummary {
        level_statistics,
        grand_statistic: grand,
    })
}

// src/plot_functions/plot_doe_statistic.rs
