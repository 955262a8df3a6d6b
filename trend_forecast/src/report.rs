//! Output formatting for forecasts and failures

use crate::error::ForecastError;
use crate::models::Forecast;
use std::io::{self, Write};

/// Render a prediction as fixed-point with two fractional digits
pub fn format_prediction(value: f64) -> String {
    format!("{:.2}", value)
}

/// Write the forecast as a single line
pub fn write_forecast<W: Write>(out: &mut W, forecast: &Forecast) -> io::Result<()> {
    writeln!(out, "{}", format_prediction(forecast.value()))?;
    out.flush()
}

/// Write the error as a single line
pub fn write_error<W: Write>(err: &mut W, error: &ForecastError) -> io::Result<()> {
    writeln!(err, "{}", error)?;
    err.flush()
}
