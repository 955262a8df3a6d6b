//! Forecasting models for time series data

use crate::data::TimeSeriesData;
use crate::error::Result;
use chrono::{DateTime, Utc};
use std::fmt::Debug;

/// A single forecast point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forecast {
    /// Predicted value
    pub(crate) value: f64,
    /// Elapsed seconds at which the model was evaluated
    pub(crate) elapsed_secs: f64,
    /// Calendar time of the forecast point, when representable
    pub(crate) timestamp: Option<DateTime<Utc>>,
}

impl Forecast {
    /// Get the predicted value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Get the elapsed seconds the prediction was made for
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    /// Get the calendar time of the forecast point, if available
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }
}

/// Trained forecast model
pub trait TrainedForecastModel: Debug {
    /// Forecast `horizon_secs` past the latest training sample
    fn forecast(&self, horizon_secs: f64) -> Result<Forecast>;

    /// Name of the model
    fn name(&self) -> &str;
}

/// Forecast model that can be trained on time series data
pub trait ForecastModel: Debug + Clone {
    /// The type of trained model produced
    type Trained: TrainedForecastModel;

    /// Train the model on time series data
    fn train(&self, data: &TimeSeriesData) -> Result<Self::Trained>;

    /// Get the name of the model
    fn name(&self) -> &str;
}

pub mod linear_trend;
