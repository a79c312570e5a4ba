// src/data_analysis/errors.rs

use thiserror::Error;

/// Domain errors for the numeric core. Every formula fails loudly instead of
/// returning NaN or garbage.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("series is empty")]
    EmptySeries,

    #[error("series has {got} points but at least {needed} are required")]
    TooFewPoints { needed: usize, got: usize },

    #[error("lag {lag} is out of range for a series of length {len}")]
    LagOutOfRange { lag: usize, len: usize },

    #[error("non-positive value {value} is outside the log-transform domain")]
    NonPositiveValue { value: f64 },

    #[error("series has zero variance")]
    ZeroVariance,

    #[error("fitted slope is zero, the scale parameter is undefined")]
    ZeroSlope,

    #[error("input lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("probability {value} is outside the open interval (0, 1)")]
    InvalidProbability { value: f64 },

    #[error("non-finite value encountered")]
    NonFiniteValue,

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

// src/data_analysis/errors.rs
