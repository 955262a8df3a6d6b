//! # CPU Trend
//!
//! `cpu_trend_workspace` bundles the crates behind the `trend_predict` tool.
//!
//! - [`trend_math`]: closed-form least-squares fitting
//! - [`trend_forecast`]: CSV loading, timestamp normalization and forecasting
//!
//! ## Example
//!
//! ```
//! use cpu_trend_workspace::{forecast_reader, ForecastConfig};
//!
//! let csv = "_time,_value\n2024-01-01T00:00:00Z,0\n2024-01-01T00:00:10Z,10\n";
//! let forecast = forecast_reader(csv.as_bytes(), &ForecastConfig::default()).unwrap();
//! assert_eq!(format!("{:.2}", forecast.value()), "20.00");
//! ```

pub use trend_forecast;
pub use trend_math;

pub use trend_forecast::{forecast_file, forecast_reader, Forecast, ForecastConfig, ForecastError};
pub use trend_math::{LeastSquares, LinearFit};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_through_facade() {
        let fit = LeastSquares::fit(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0]).unwrap();
        assert!((fit.slope() - 2.0).abs() < 1e-12);
        assert!((fit.intercept() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_forecast_through_facade() {
        let csv = "#datatype,dateTime:RFC3339,double\n_time,_value\n2024-01-01T00:00:00Z,5\n2024-01-01T00:00:30Z,5\n";
        let forecast = forecast_reader(csv.as_bytes(), &ForecastConfig::default()).unwrap();
        assert_eq!(forecast.elapsed_secs(), 40.0);
        assert!((forecast.value() - 5.0).abs() < 1e-12);
    }
}
