//! # Trend Math
//!
//! Numerical routines behind the trend forecaster.
//! This crate provides an ordinary least-squares fit for a single feature
//! and the diagnostics that go with it.

use thiserror::Error;

pub mod regression;

pub use crate::regression::{LeastSquares, LinearFit};

/// Errors that can occur in trend calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for trend math operations
pub type Result<T> = std::result::Result<T, MathError>;
