// src/lib.rs - Library interface for the EDA plot gallery

//! Exploratory-data-analysis plotting routines, one per classical graphical
//! technique from the NIST/SEMATECH handbook: compute a closed-form statistic
//! from one or two numeric sequences, render a PNG chart, and hand the
//! computed values back to the caller.

pub mod constants;
pub mod data_analysis;
pub mod plot_framework;
pub mod plot_functions;
