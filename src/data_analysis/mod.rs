// src/data_analysis/mod.rs

pub mod autocorrelation;
pub mod bootstrap;
pub mod box_cox;
pub mod descriptive;
pub mod distributions;
pub mod errors;
pub mod factor;
pub mod linear_fit;
pub mod quantile;
pub mod weibull;

// src/data_analysis/mod.rs
