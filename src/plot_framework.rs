// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, Cross, PathElement, Rectangle, Text, TriangleMarker};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;

use crate::constants::{
    FONT_SIZE_ANNOTATION, FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND,
    FONT_SIZE_MAIN_TITLE, LINE_WIDTH_LEGEND, PANEL_GRID_HEIGHT, PANEL_GRID_WIDTH, PLOT_HEIGHT,
    PLOT_WIDTH,
};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// How a series is rendered.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum SeriesStyle {
    Line,
    Circles { size: u32 },
    Crosses { size: u32 },
    Triangles { size: u32 },
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
    pub style: SeriesStyle,
}

impl PlotSeries {
    pub fn line(data: Vec<(f64, f64)>, label: &str, color: RGBColor, stroke_width: u32) -> Self {
        PlotSeries {
            data,
            label: label.to_string(),
            color,
            stroke_width,
            style: SeriesStyle::Line,
        }
    }

    pub fn points(data: Vec<(f64, f64)>, label: &str, color: RGBColor, size: u32) -> Self {
        PlotSeries {
            data,
            label: label.to_string(),
            color,
            stroke_width: 1,
            style: SeriesStyle::Circles { size },
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A straight reference line spanning the plot area.
#[derive(Clone)]
pub struct ReferenceLine {
    pub value: f64,
    pub orientation: Orientation,
    pub color: RGBColor,
    pub stroke_width: u32,
    pub label: String,
}

/// Histogram bars over shared edges. Counts may be negative for charts that
/// mirror a second distribution below the axis.
#[derive(Clone)]
pub struct BarSeries {
    pub edges: Vec<f64>,
    pub counts: Vec<f64>,
    pub color: RGBColor,
    pub label: String,
}

/// A floating vertical bar from `low` to `high` (block plots).
#[derive(Clone)]
pub struct SpanBar {
    pub position: f64,
    pub low: f64,
    pub high: f64,
    pub width: f64,
}

/// Text placed at data coordinates.
#[derive(Clone)]
pub struct TextAnnotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Tick label rendering for an axis.
#[derive(Clone)]
pub enum AxisTickFormat {
    /// Adaptive decimal / k / M formatting.
    Decimal,
    /// Absolute value with decimal formatting (mirrored histograms).
    Magnitude,
    /// Ticks are ln(-ln(1-p)) values; labels show the cumulative percent.
    WeibullPercent,
    /// Ticks are 0-based category indices; labels looked up from the list.
    CategoryLabels(Vec<String>),
}

fn format_tick(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if magnitude >= 1000.0 {
        format!("{:.0}k", value / 1000.0)
    } else if magnitude >= 100.0 {
        format!("{value:.0}")
    } else if magnitude >= 1.0 {
        format!("{value:.1}")
    } else if magnitude >= 0.01 {
        format!("{value:.3}")
    } else if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value:.1e}")
    }
}

impl AxisTickFormat {
    fn label_for(&self, value: f64) -> String {
        match self {
            AxisTickFormat::Decimal => format_tick(value),
            AxisTickFormat::Magnitude => format_tick(value.abs()),
            AxisTickFormat::WeibullPercent => {
                let percent = 100.0 * (1.0 - (-value.exp()).exp());
                if percent < 1.0 {
                    format!("{percent:.2}")
                } else if percent < 10.0 {
                    format!("{percent:.1}")
                } else {
                    format!("{percent:.0}")
                }
            }
            AxisTickFormat::CategoryLabels(labels) => {
                let index = value.round();
                if (value - index).abs() > 1e-6 || index < 0.0 {
                    return String::new();
                }
                labels
                    .get(index as usize)
                    .cloned()
                    .unwrap_or_default()
            }
        }
    }
}

/// Explicit, enumerated chart description: everything a routine wants drawn,
/// with no pass-through styling arguments.
#[derive(Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub bars: Vec<BarSeries>,
    pub span_bars: Vec<SpanBar>,
    pub reference_lines: Vec<ReferenceLine>,
    pub annotations: Vec<TextAnnotation>,
    pub x_tick_format: AxisTickFormat,
    pub y_tick_format: AxisTickFormat,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            x_range: 0.0..1.0,
            y_range: 0.0..1.0,
            series: Vec::new(),
            bars: Vec::new(),
            span_bars: Vec::new(),
            reference_lines: Vec::new(),
            annotations: Vec::new(),
            x_tick_format: AxisTickFormat::Decimal,
            y_tick_format: AxisTickFormat::Decimal,
        }
    }
}

/// Draws one chart onto an existing drawing area.
pub fn draw_chart_on(
    area: &DrawingArea<BitMapBackend, Shift>,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(&config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(10)
        .x_label_area_size(55)
        .y_label_area_size(60)
        .build_cartesian_2d(config.x_range.clone(), config.y_range.clone())?;

    let x_format = config.x_tick_format.clone();
    let y_format = config.y_tick_format.clone();
    chart
        .configure_mesh()
        .x_desc(&config.x_label)
        .y_desc(&config.y_label)
        .x_labels(12)
        .y_labels(10)
        .x_label_formatter(&move |x| x_format.label_for(*x))
        .y_label_formatter(&move |y| y_format.label_for(*y))
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    // Bars first, so points and lines stay visible on top of them.
    for bar_series in &config.bars {
        let style = bar_series.color.mix(0.6).filled();
        for (idx, &count) in bar_series.counts.iter().enumerate() {
            if count == 0.0 {
                continue;
            }
            chart.draw_series(std::iter::once(Rectangle::new(
                [
                    (bar_series.edges[idx], 0.0),
                    (bar_series.edges[idx + 1], count),
                ],
                style,
            )))?;
            chart.draw_series(std::iter::once(Rectangle::new(
                [
                    (bar_series.edges[idx], 0.0),
                    (bar_series.edges[idx + 1], count),
                ],
                BLACK.stroke_width(1),
            )))?;
        }
    }

    for bar in &config.span_bars {
        let half = bar.width / 2.0;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(bar.position - half, bar.low), (bar.position + half, bar.high)],
            BLACK.stroke_width(1),
        )))?;
    }

    for line in &config.reference_lines {
        let points = match line.orientation {
            Orientation::Horizontal => vec![
                (config.x_range.start, line.value),
                (config.x_range.end, line.value),
            ],
            Orientation::Vertical => vec![
                (line.value, config.y_range.start),
                (line.value, config.y_range.end),
            ],
        };
        let color = line.color;
        let drawn = chart.draw_series(std::iter::once(PathElement::new(
            points,
            color.stroke_width(line.stroke_width),
        )))?;
        if !line.label.is_empty() {
            drawn.label(&line.label).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH_LEGEND))
            });
        }
    }

    let mut legend_entries = config
        .reference_lines
        .iter()
        .filter(|l| !l.label.is_empty())
        .count();

    for s in &config.series {
        if s.data.is_empty() {
            continue;
        }
        let color = s.color;
        let annotated = match s.style {
            SeriesStyle::Line => chart.draw_series(LineSeries::new(
                s.data.iter().cloned(),
                color.stroke_width(s.stroke_width),
            ))?,
            SeriesStyle::Circles { size } => chart.draw_series(
                s.data
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), size, color.filled())),
            )?,
            SeriesStyle::Crosses { size } => chart.draw_series(
                s.data
                    .iter()
                    .map(|&(x, y)| Cross::new((x, y), size, color.stroke_width(s.stroke_width))),
            )?,
            SeriesStyle::Triangles { size } => chart.draw_series(
                s.data
                    .iter()
                    .map(|&(x, y)| TriangleMarker::new((x, y), size, color.filled())),
            )?,
        };
        if !s.label.is_empty() {
            annotated.label(&s.label).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH_LEGEND))
            });
            legend_entries += 1;
        }
    }

    for annotation in &config.annotations {
        chart.draw_series(std::iter::once(Text::new(
            annotation.text.clone(),
            (annotation.x, annotation.y),
            ("sans-serif", FONT_SIZE_ANNOTATION)
                .into_font()
                .color(&BLACK),
        )))?;
    }

    if legend_entries > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", FONT_SIZE_LEGEND))
            .draw()?;
    }

    Ok(())
}

/// Renders a single chart to a PNG file.
pub fn draw_chart(output_path: &str, config: &PlotConfig) -> Result<(), Box<dyn Error>> {
    let root_area =
        BitMapBackend::new(output_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    draw_chart_on(&root_area, config)?;
    root_area.present()?;
    println!("  Plot saved as '{output_path}'.");
    Ok(())
}

/// Renders a grid of charts under a main title. Empty cells stay blank.
pub fn draw_panel_grid(
    output_path: &str,
    main_title: &str,
    rows: usize,
    cols: usize,
    panels: &[Option<PlotConfig>],
) -> Result<(), Box<dyn Error>> {
    if panels.len() != rows * cols {
        return Err(format!(
            "panel grid expects {} cells, got {}",
            rows * cols,
            panels.len()
        )
        .into());
    }

    let root_area =
        BitMapBackend::new(output_path, (PANEL_GRID_WIDTH, PANEL_GRID_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        main_title.to_string(),
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE)
            .into_font()
            .color(&BLACK),
    ))?;

    let margined_root_area = root_area.margin(50, 5, 5, 5);
    let sub_areas = margined_root_area.split_evenly((rows, cols));
    for (area, panel) in sub_areas.iter().zip(panels.iter()) {
        if let Some(config) = panel {
            draw_chart_on(area, config)?;
        }
    }

    root_area.present()?;
    println!("  Panel grid saved as '{output_path}'.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_padding_is_fifteen_percent() {
        let (lo, hi) = calculate_range(0.0, 10.0);
        assert!((lo + 1.5).abs() < 1e-12);
        assert!((hi - 11.5).abs() < 1e-12);
    }

    #[test]
    fn degenerate_ranges_get_fixed_padding() {
        let (lo, hi) = calculate_range(3.0, 3.0);
        assert!((lo - 2.5).abs() < 1e-12);
        assert!((hi - 3.5).abs() < 1e-12);
    }

    #[test]
    fn reversed_arguments_are_reordered() {
        let (lo, hi) = calculate_range(8.0, 2.0);
        assert!(lo < 2.0 && hi > 8.0);
    }

    #[test]
    fn tick_formats_cover_their_ranges() {
        assert_eq!(format_tick(2_500_000.0), "2.5M");
        assert_eq!(format_tick(2500.0), "2k");
        assert_eq!(format_tick(250.0), "250");
        assert_eq!(format_tick(2.5), "2.5");
        assert_eq!(format_tick(0.025), "0.025");
        assert_eq!(format_tick(0.0), "0");
    }

    #[test]
    fn weibull_ticks_report_cumulative_percent() {
        // ln(-ln(1 - 0.632...)) = 0 corresponds to the scale parameter.
        let format = AxisTickFormat::WeibullPercent;
        let label = format.label_for(0.0);
        assert_eq!(label, "63");
    }

    #[test]
    fn category_ticks_skip_non_integer_positions() {
        let format =
            AxisTickFormat::CategoryLabels(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(format.label_for(1.0), "b");
        assert_eq!(format.label_for(0.5), "");
        assert_eq!(format.label_for(5.0), "");
    }
}

// src/plot_framework.rs
