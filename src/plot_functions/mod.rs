// src/plot_functions/mod.rs

pub mod plot_autocorrelation;
pub mod plot_bihistogram;
pub mod plot_block;
pub mod plot_bootstrap;
pub mod plot_box;
pub mod plot_box_cox_linearity;
pub mod plot_box_cox_normality;
pub mod plot_doe_scatter;
pub mod plot_doe_statistic;
pub mod plot_four;
pub mod plot_histogram;
pub mod plot_lag;
pub mod plot_ppcc;
pub mod plot_probability;
pub mod plot_qq;
pub mod plot_run_sequence;
pub mod plot_scatter;
pub mod plot_weibull;

// src/plot_functions/mod.rs
