//! Required column checks

use crate::config::ForecastConfig;
use crate::data::CsvTable;
use crate::error::{ForecastError, Result};

/// Positions of the timestamp and value columns in a validated table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredColumns {
    pub time: usize,
    pub value: usize,
}

/// Confirm the table carries both required columns, matched case-sensitively
pub fn validate(table: &CsvTable, config: &ForecastConfig) -> Result<RequiredColumns> {
    let time = table.column_index(&config.time_column);
    let value = table.column_index(&config.value_column);

    match (time, value) {
        (Some(time), Some(value)) => Ok(RequiredColumns { time, value }),
        _ => {
            let missing = config
                .required_columns()
                .into_iter()
                .filter(|name| table.column_index(name).is_none())
                .map(str::to_string)
                .collect();
            Err(ForecastError::Schema(missing))
        }
    }
}
