//! # Trend Forecast
//!
//! Linear trend forecasting over time-series CSV exports such as the output of
//! `influx query --raw`.
//!
//! ## Pipeline
//!
//! - Load the delimited file, skipping `#` comment lines
//! - Check for the `_time` and `_value` columns
//! - Parse ISO-8601 timestamps into seconds elapsed since the earliest sample
//! - Fit an ordinary least-squares line through (elapsed seconds, value)
//! - Evaluate the line 10 seconds past the latest sample
//!
//! ## Quick Start
//!
//! ```no_run
//! use trend_forecast::{forecast_file, ForecastConfig};
//!
//! let forecast = forecast_file("cpu.csv", &ForecastConfig::default())?;
//! println!("{:.2}", forecast.value());
//! # Ok::<(), trend_forecast::ForecastError>(())
//! ```

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod report;
pub mod schema;
pub mod time;

use crate::models::linear_trend::LinearTrend;
use std::io::Read;
use std::path::Path;
use tracing::info;

// Re-export commonly used types
pub use crate::config::{ForecastConfig, FORECAST_HORIZON_SECS};
pub use crate::data::{CsvTable, DataLoader, Sample, TimeSeriesData};
pub use crate::error::{ForecastError, Result};
pub use crate::models::{Forecast, ForecastModel, TrainedForecastModel};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Load a CSV file and forecast from it
pub fn forecast_file<P: AsRef<Path>>(path: P, config: &ForecastConfig) -> Result<Forecast> {
    let table = DataLoader::from_csv(path, config)?;
    forecast_table(&table, config)
}

/// Load CSV text from a reader and forecast from it
pub fn forecast_reader<R: Read>(reader: R, config: &ForecastConfig) -> Result<Forecast> {
    let table = DataLoader::from_reader(reader, config)?;
    forecast_table(&table, config)
}

/// Forecast from an already loaded table
pub fn forecast_table(table: &CsvTable, config: &ForecastConfig) -> Result<Forecast> {
    let columns = schema::validate(table, config)?;
    let data = TimeSeriesData::from_table(table, &columns)?;

    let model = LinearTrend::new();
    let trained = model.train(&data)?;
    let forecast = trained.forecast(config.horizon_secs)?;

    info!(
        model = trained.name(),
        samples = data.len(),
        value = forecast.value(),
        "forecast complete"
    );
    Ok(forecast)
}
