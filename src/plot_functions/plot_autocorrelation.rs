// src/plot_functions/plot_autocorrelation.rs

use plotters::style::RGBColor;
use std::error::Error;

use crate::constants::{
    COLOR_CONFIDENCE_95, COLOR_CONFIDENCE_99, COLOR_DATA_MAIN, COLOR_REFERENCE_LINE,
    CONFIDENCE_LEVEL_95, CONFIDENCE_LEVEL_99, LINE_WIDTH_PLOT,
};
use crate::data_analysis::autocorrelation;
use crate::plot_framework::{
    calculate_range, draw_chart, Orientation, PlotConfig, PlotSeries, ReferenceLine,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct AutocorrelationOptions {
    /// Largest lag to sweep; None uses N - 2.
    pub max_lag: Option<usize>,
    /// Draw lag-dependent Bartlett bands instead of the fixed-width
    /// randomness bands.
    pub moving_average_bands: bool,
}

#[derive(Debug, Clone)]
pub struct AutocorrelationSummary {
    /// R(h) for h in 0..=max_lag.
    pub coefficients: Vec<f64>,
    /// Half-width of the 95% band at each lag (constant for the randomness
    /// bands, growing for the Bartlett bands).
    pub band_95: Vec<f64>,
    pub band_99: Vec<f64>,
}

/// Generates the autocorrelation plot: R(h) against lag with 95% and 99%
/// confidence bands for the randomness (or moving-average) hypothesis.
pub fn plot_autocorrelation(
    series: &[f64],
    output_path: &str,
    options: &AutocorrelationOptions,
) -> Result<AutocorrelationSummary, Box<dyn Error>> {
    let n = series.len();
    let max_lag = match options.max_lag {
        Some(lag) => lag,
        None => autocorrelation::default_max_lag(series)?,
    };
    let coefficients = autocorrelation::autocorrelation_coefficients(series, max_lag)?;

    let (band_95, band_99) = if options.moving_average_bands {
        (
            autocorrelation::moving_average_band_half_widths(
                &coefficients,
                n,
                CONFIDENCE_LEVEL_95,
            )?,
            autocorrelation::moving_average_band_half_widths(
                &coefficients,
                n,
                CONFIDENCE_LEVEL_99,
            )?,
        )
    } else {
        let w95 = autocorrelation::randomness_band_half_width(n, CONFIDENCE_LEVEL_95)?;
        let w99 = autocorrelation::randomness_band_half_width(n, CONFIDENCE_LEVEL_99)?;
        (
            vec![w95; coefficients.len()],
            vec![w99; coefficients.len()],
        )
    };

    let color_data: RGBColor = *COLOR_DATA_MAIN;
    let color_95: RGBColor = *COLOR_CONFIDENCE_95;
    let color_99: RGBColor = *COLOR_CONFIDENCE_99;
    let color_zero: RGBColor = *COLOR_REFERENCE_LINE;

    let coefficient_points: Vec<(f64, f64)> = coefficients
        .iter()
        .enumerate()
        .map(|(lag, &r)| (lag as f64, r))
        .collect();

    let band_series = |half_widths: &[f64], sign: f64| -> Vec<(f64, f64)> {
        half_widths
            .iter()
            .enumerate()
            .map(|(lag, &w)| (lag as f64, sign * w))
            .collect()
    };

    let widest = band_99.last().copied().unwrap_or(0.0);
    let y_low = coefficients.iter().cloned().fold(-widest, f64::min);
    let y_high = coefficients.iter().cloned().fold(widest, f64::max);
    let (y_min, y_max) = calculate_range(y_low, y_high);

    let mut series_list = vec![PlotSeries::line(
        coefficient_points,
        "Autocorrelation",
        color_data,
        LINE_WIDTH_PLOT,
    )];
    series_list.push(PlotSeries::line(
        band_series(&band_95, 1.0),
        "95% band",
        color_95,
        LINE_WIDTH_PLOT,
    ));
    series_list.push(PlotSeries::line(
        band_series(&band_95, -1.0),
        "",
        color_95,
        LINE_WIDTH_PLOT,
    ));
    series_list.push(PlotSeries::line(
        band_series(&band_99, 1.0),
        "99% band",
        color_99,
        LINE_WIDTH_PLOT,
    ));
    series_list.push(PlotSeries::line(
        band_series(&band_99, -1.0),
        "",
        color_99,
        LINE_WIDTH_PLOT,
    ));

    let config = PlotConfig {
        title: "Autocorrelation Plot".to_string(),
        x_label: "Lag".to_string(),
        y_label: "Autocorrelation".to_string(),
        x_range: 0.0..max_lag as f64,
        y_range: y_min..y_max,
        series: series_list,
        reference_lines: vec![ReferenceLine {
            value: 0.0,
            orientation: Orientation::Horizontal,
            color: color_zero,
            stroke_width: LINE_WIDTH_PLOT,
            label: String::new(),
        }],
        ..Default::default()
    };
    draw_chart(output_path, &config)?;

    Ok(AutocorrelationSummary {
        coefficients,
        band_95,
        band_99,
    })
}

// src/plot_functions/plot_autocorrelation.rs
