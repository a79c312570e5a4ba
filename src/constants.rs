// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{
    AMBER, BLUE, GREEN, GREY, LIGHTBLUE, ORANGE, PURPLE, RED,
};
use plotters::style::RGBColor;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1024;
pub const PLOT_HEIGHT: u32 = 768;
pub const PANEL_GRID_WIDTH: u32 = 1280;
pub const PANEL_GRID_HEIGHT: u32 = 960;

// Font sizes.
pub const FONT_SIZE_MAIN_TITLE: i32 = 30;
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 15;
pub const FONT_SIZE_LEGEND: i32 = 15;
pub const FONT_SIZE_ANNOTATION: i32 = 14;

// Default grid for Box-Cox lambda scans.
pub const BOX_COX_LAMBDA_MIN: f64 = -2.0;
pub const BOX_COX_LAMBDA_MAX: f64 = 2.0;
pub const BOX_COX_GRID_POINTS: usize = 100;

// Default grid for the Tukey-lambda PPCC scan.
pub const PPCC_SHAPE_MIN: f64 = -5.0;
pub const PPCC_SHAPE_MAX: f64 = 5.0;
pub const PPCC_GRID_POINTS: usize = 100;

// Bootstrap defaults (handbook: 500 subsamples is usually sufficient).
pub const BOOTSTRAP_SUBSAMPLE_SIZE: usize = 50;
pub const BOOTSTRAP_SAMPLES: usize = 500;
pub const BOOTSTRAP_CONFIDENCE_LEVEL: f64 = 0.90;

// Default histogram bin count.
pub const HISTOGRAM_BINS: usize = 10;

// Significance levels for autocorrelation confidence bands.
pub const CONFIDENCE_LEVEL_95: f64 = 0.95;
pub const CONFIDENCE_LEVEL_99: f64 = 0.99;

// Cumulative probability bounds for the fitted line on a Weibull plot
// (the line is drawn between the 0.1% and 99.9% probability levels).
pub const WEIBULL_FIT_LINE_P_MIN: f64 = 0.001;
pub const WEIBULL_FIT_LINE_P_MAX: f64 = 0.999;

// Whisker reach as a multiple of the interquartile range.
pub const BOX_WHISKER_IQR_FACTOR: f64 = 1.5;

// --- Plot Color Assignments ---
pub const COLOR_DATA_MAIN: &RGBColor = &GREEN;
pub const COLOR_DATA_SECONDARY: &RGBColor = &ORANGE;
pub const COLOR_FIT_LINE: &RGBColor = &BLUE;
pub const COLOR_REFERENCE_LINE: &RGBColor = &GREY;
pub const COLOR_CONFIDENCE_95: &RGBColor = &LIGHTBLUE;
pub const COLOR_CONFIDENCE_99: &RGBColor = &PURPLE;
pub const COLOR_SCAN_MARKER: &RGBColor = &RED;
pub const COLOR_PDF_OVERLAY: &RGBColor = &AMBER;
pub const COLOR_OUTLIER: &RGBColor = &RED;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_FIT: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Marker sizes in pixels.
pub const MARKER_SIZE_POINT: u32 = 3;
pub const MARKER_SIZE_OUTLIER: u32 = 3;

// src/constants.rs
