// src/plot_functions/plot_block.rs

use plotters::style::RGBColor;
use std::collections::BTreeMap;
use std::error::Error;

use crate::constants::{COLOR_DATA_MAIN, COLOR_DATA_SECONDARY, COLOR_SCAN_MARKER, MARKER_SIZE_POINT};
use crate::data_analysis::factor::{self, BlockSummary};
use crate::plot_framework::{
    calculate_range, draw_chart, AxisTickFormat, PlotConfig, PlotSeries, SpanBar,
};

const BAR_WIDTH: f64 = 0.3;

#[derive(Debug, Clone, Default)]
pub struct BlockPlotOptions {
    pub title: String,
    pub y_label: String,
}

/// Generates the block plot: one bar per combination of nuisance-factor
/// levels, spanning the mean responses of the primary-factor levels within
/// that block. A primary effect shows as one level sitting consistently at
/// the same end of every bar.
pub fn plot_block(
    response: &[f64],
    primary: &[i64],
    nuisance: &[&[i64]],
    output_path: &str,
    options: &BlockPlotOptions,
) -> Result<Vec<BlockSummary>, Box<dyn Error>> {
    let summaries = factor::block_summaries(response, primary, nuisance)?;
    if summaries.is_empty() {
        return Err("no nuisance combination has two primary levels".into());
    }

    let level_colors: [RGBColor; 3] = [*COLOR_DATA_MAIN, *COLOR_DATA_SECONDARY, *COLOR_SCAN_MARKER];

    let mut span_bars = Vec::with_capacity(summaries.len());
    let mut labels = Vec::with_capacity(summaries.len());
    let mut points_by_level: BTreeMap<i64, Vec<(f64, f64)>> = BTreeMap::new();
    let mut y_lo = f64::INFINITY;
    let mut y_hi = f64::NEG_INFINITY;

    for (index, summary) in summaries.iter().enumerate() {
        let x = index as f64;
        span_bars.push(SpanBar {
            position: x,
            low: summary.low(),
            high: summary.high(),
            width: BAR_WIDTH,
        });
        labels.push(
            summary
                .combination
                .iter()
                .map(|l| l.to_string())
                .collect::<Vec<_>>()
                .join("/"),
        );
        for &(level, mean) in &summary.level_means {
            points_by_level.entry(level).or_default().push((x, mean));
            y_lo = y_lo.min(mean);
            y_hi = y_hi.max(mean);
        }
    }

    let (y_min, y_max) = calculate_range(y_lo, y_hi);

    let series: Vec<PlotSeries> = points_by_level
        .into_iter()
        .enumerate()
        .map(|(idx, (level, points))| {
            PlotSeries::points(
                points,
                &format!("Level {level}"),
                level_colors[idx % level_colors.len()],
                MARKER_SIZE_POINT,
            )
        })
        .collect();

    let config = PlotConfig {
        title: if options.title.is_empty() {
            "Block Plot".to_string()
        } else {
            options.title.clone()
        },
        x_label: "Nuisance Combination".to_string(),
        y_label: if options.y_label.is_empty() {
            "Mean Response".to_string()
        } else {
            options.y_label.clone()
        },
        x_range: -1.0..summaries.len() as f64,
        y_range: y_min..y_max,
        series,
        span_bars,
        x_tick_format: AxisTickFormat::CategoryLabels(labels),
        ..Default::default()
    };
    draw_chart(output_path, &config)?;

    Ok(summaries)
}

// src/plot_functions/plot_block.rs
