//! Forecast settings

use serde::{Deserialize, Serialize};

/// Name of the timestamp column in InfluxDB CSV exports
pub const TIME_COLUMN: &str = "_time";

/// Name of the measured value column in InfluxDB CSV exports
pub const VALUE_COLUMN: &str = "_value";

/// Lines starting with this byte are skipped before header detection
pub const COMMENT_MARKER: u8 = b'#';

/// Seconds past the latest sample at which the forecast is evaluated
pub const FORECAST_HORIZON_SECS: f64 = 10.0;

/// Settings for loading a CSV export and forecasting from it
///
/// The command-line tool always runs with [`ForecastConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Column holding ISO-8601 timestamps
    pub time_column: String,
    /// Column holding the numeric values to fit
    pub value_column: String,
    /// Comment marker byte
    pub comment_marker: u8,
    /// Field delimiter byte
    pub delimiter: u8,
    /// Forecast offset beyond the latest elapsed second
    pub horizon_secs: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            time_column: TIME_COLUMN.to_string(),
            value_column: VALUE_COLUMN.to_string(),
            comment_marker: COMMENT_MARKER,
            delimiter: b',',
            horizon_secs: FORECAST_HORIZON_SECS,
        }
    }
}

impl ForecastConfig {
    /// Columns that must be present in the header
    pub fn required_columns(&self) -> [&str; 2] {
        [&self.time_column, &self.value_column]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ForecastConfig::default();
        assert_eq!(config.required_columns(), ["_time", "_value"]);
        assert_eq!(config.comment_marker, b'#');
        assert_eq!(config.horizon_secs, 10.0);
    }
}
