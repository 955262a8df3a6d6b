//! Linear trend model over elapsed seconds

use crate::data::TimeSeriesData;
use crate::error::{ForecastError, Result};
use crate::models::{Forecast, ForecastModel, TrainedForecastModel};
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};
use trend_math::{LeastSquares, LinearFit};

/// Least-squares linear trend model
#[derive(Debug, Clone)]
pub struct LinearTrend {
    /// Name of the model
    name: String,
}

/// Trained linear trend model
#[derive(Debug, Clone)]
pub struct TrainedLinearTrend {
    /// Name of the model
    name: String,
    /// Fitted line over (elapsed seconds, value)
    fit: LinearFit,
    /// Earliest training timestamp
    origin: DateTime<Utc>,
    /// Elapsed seconds of the latest training timestamp
    latest_elapsed: f64,
}

impl LinearTrend {
    /// Create a new linear trend model
    pub fn new() -> Self {
        Self {
            name: "Linear Trend (OLS)".to_string(),
        }
    }
}

impl Default for LinearTrend {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastModel for LinearTrend {
    type Trained = TrainedLinearTrend;

    fn train(&self, data: &TimeSeriesData) -> Result<Self::Trained> {
        if data.is_empty() {
            return Err(ForecastError::Processing("no data rows to fit".to_string()));
        }

        let fit = LeastSquares::fit(data.elapsed_seconds(), &data.values())?;
        if fit.is_flat() && data.len() > 1 {
            warn!(
                samples = data.len(),
                "all timestamps are identical; forecasting the mean value"
            );
        }
        debug!(
            slope = fit.slope(),
            intercept = fit.intercept(),
            samples = fit.samples(),
            r_squared = fit.r_squared().ok(),
            rss = fit.residual_sum_of_squares(),
            "fitted linear trend"
        );

        Ok(TrainedLinearTrend {
            name: self.name.clone(),
            fit,
            origin: data.origin(),
            latest_elapsed: data.latest_elapsed(),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedLinearTrend {
    /// Get the fitted line
    pub fn fit(&self) -> &LinearFit {
        &self.fit
    }
}

impl TrainedForecastModel for TrainedLinearTrend {
    fn forecast(&self, horizon_secs: f64) -> Result<Forecast> {
        if !horizon_secs.is_finite() || horizon_secs < 0.0 {
            return Err(ForecastError::Processing(format!(
                "forecast horizon must be a non-negative number of seconds, got {}",
                horizon_secs
            )));
        }

        let elapsed_secs = self.latest_elapsed + horizon_secs;
        let value = self.fit.predict(elapsed_secs);
        if !value.is_finite() {
            return Err(ForecastError::Processing(format!(
                "prediction at {} elapsed seconds is not finite",
                elapsed_secs
            )));
        }

        let timestamp = offset(self.origin, elapsed_secs);
        debug!(
            elapsed_secs,
            value,
            timestamp = ?timestamp,
            "evaluated forecast"
        );

        Ok(Forecast {
            value,
            elapsed_secs,
            timestamp,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn offset(origin: DateTime<Utc>, secs: f64) -> Option<DateTime<Utc>> {
    let nanos = (secs * 1e9).round();
    if nanos.abs() >= i64::MAX as f64 {
        return None;
    }
    origin.checked_add_signed(Duration::nanoseconds(nanos as i64))
}
