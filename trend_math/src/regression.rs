//! Ordinary least-squares regression over a single feature
//!
//! Fits `y ≈ slope * x + intercept` in closed form using mean-centred sums:
//!
//! ```text
//! slope     = Σ(x - x̄)(y - ȳ) / Σ(x - x̄)²
//! intercept = ȳ - slope * x̄
//! ```
//!
//! A fit over a feature with no spread (a single sample, or every `x` equal)
//! has no defined slope. Those fits are flat: slope `0` and intercept `ȳ`.

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// Closed-form least-squares solver
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastSquares;

/// Parameters and diagnostics of a fitted line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    slope: f64,
    intercept: f64,
    samples: usize,
    ss_total: f64,
    ss_residual: f64,
    flat: bool,
}

impl LeastSquares {
    /// Fit a line through the aligned `x` and `y` samples
    pub fn fit(x: &[f64], y: &[f64]) -> Result<LinearFit> {
        if x.len() != y.len() {
            return Err(MathError::InvalidInput(format!(
                "Feature length ({}) doesn't match target length ({})",
                x.len(),
                y.len()
            )));
        }
        if x.is_empty() {
            return Err(MathError::InsufficientData(
                "Cannot fit a line through zero samples".to_string(),
            ));
        }
        if let Some(i) = x.iter().position(|v| !v.is_finite()) {
            return Err(MathError::InvalidInput(format!(
                "Feature value at index {} is not finite ({})",
                i, x[i]
            )));
        }
        if let Some(i) = y.iter().position(|v| !v.is_finite()) {
            return Err(MathError::InvalidInput(format!(
                "Target value at index {} is not finite ({})",
                i, y[i]
            )));
        }

        let n = x.len() as f64;
        let x_mean = x.iter().sum::<f64>() / n;
        let y_mean = y.iter().sum::<f64>() / n;

        let mut sxy = 0.0;
        let mut sxx = 0.0;
        for (&xi, &yi) in x.iter().zip(y) {
            sxy += (xi - x_mean) * (yi - y_mean);
            sxx += (xi - x_mean) * (xi - x_mean);
        }

        // sxx is exactly zero only when every x equals the mean
        let flat = sxx == 0.0;
        let slope = if flat { 0.0 } else { sxy / sxx };
        let intercept = y_mean - slope * x_mean;

        if !slope.is_finite() || !intercept.is_finite() {
            return Err(MathError::CalculationError(format!(
                "Fit produced non-finite parameters (slope={}, intercept={})",
                slope, intercept
            )));
        }

        let mut ss_total = 0.0;
        let mut ss_residual = 0.0;
        for (&xi, &yi) in x.iter().zip(y) {
            ss_total += (yi - y_mean).powi(2);
            ss_residual += (yi - (slope * xi + intercept)).powi(2);
        }

        Ok(LinearFit {
            slope,
            intercept,
            samples: x.len(),
            ss_total,
            ss_residual,
            flat,
        })
    }
}

impl LinearFit {
    /// Slope of the fitted line (change in `y` per unit of `x`)
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Value of the fitted line at `x = 0`
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Number of samples the line was fitted on
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Whether the feature had no spread and the slope was pinned to zero
    pub fn is_flat(&self) -> bool {
        self.flat
    }

    /// Evaluate the fitted line at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Sum of squared residuals over the training samples
    pub fn residual_sum_of_squares(&self) -> f64 {
        self.ss_residual
    }

    /// Get the R-squared value (coefficient of determination)
    pub fn r_squared(&self) -> Result<f64> {
        if self.ss_total.abs() < 1e-10 {
            return Err(MathError::CalculationError(
                "Cannot calculate R-squared: total sum of squares is too small".to_string(),
            ));
        }

        Ok(1.0 - (self.ss_residual / self.ss_total))
    }
}
