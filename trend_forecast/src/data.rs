//! Time series data handling for forecasting

use crate::config::ForecastConfig;
use crate::error::{ForecastError, Result};
use crate::schema::RequiredColumns;
use crate::time;
use chrono::{DateTime, Utc};
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// A delimited table held in memory, rows in file order
#[derive(Debug, Clone)]
pub struct CsvTable {
    headers: StringRecord,
    rows: Vec<CsvRow>,
    /// Header blocks seen; InfluxDB writes one per result table
    tables: usize,
}

/// One data row and the line it was read from
#[derive(Debug, Clone)]
pub struct CsvRow {
    line: u64,
    record: StringRecord,
}

/// Data loader for CSV exports
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load a delimited table from a CSV file
    pub fn from_csv<P: AsRef<Path>>(path: P, config: &ForecastConfig) -> Result<CsvTable> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            ForecastError::DataLoad(format!("cannot open '{}': {}", path.display(), e))
        })?;
        debug!(path = %path.display(), "loading CSV");

        Self::from_reader(file, config)
    }

    /// Load a delimited table from any reader
    ///
    /// Comment lines and blank lines are skipped, the first remaining line is
    /// the header. Rows repeating the header (one per result table in
    /// InfluxDB exports) are dropped. Short rows are kept and read as nulls
    /// in their missing cells; rows longer than the header are rejected.
    pub fn from_reader<R: Read>(reader: R, config: &ForecastConfig) -> Result<CsvTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(config.delimiter)
            .comment(Some(config.comment_marker))
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Err(ForecastError::DataLoad("no header row found".to_string()));
        }

        let mut rows = Vec::new();
        let mut repeated_headers = 0usize;
        for record in reader.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            if record.len() > headers.len() {
                return Err(ForecastError::DataLoad(format!(
                    "expected {} fields on line {}, saw {}",
                    headers.len(),
                    line,
                    record.len()
                )));
            }
            if record.iter().eq(headers.iter()) {
                repeated_headers += 1;
                continue;
            }

            rows.push(CsvRow { line, record });
        }

        let tables = repeated_headers + 1;
        if tables > 1 {
            debug!(tables, "merged result tables into a single series");
        }
        debug!(
            columns = headers.len(),
            rows = rows.len(),
            tables,
            "parsed CSV table"
        );

        Ok(CsvTable {
            headers,
            rows,
            tables,
        })
    }
}

impl CsvTable {
    /// Column names from the header row
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.headers.iter()
    }

    /// Position of the first column with exactly this name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Data rows in file order
    pub fn rows(&self) -> &[CsvRow] {
        &self.rows
    }

    /// Check if the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Number of result tables merged into this one
    pub fn tables(&self) -> usize {
        self.tables
    }
}

impl CsvRow {
    /// Line number in the source file
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Cell at `index`; empty and missing cells are nulls
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.record.get(index).filter(|s| !s.trim().is_empty())
    }
}

/// A single observation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// Time series data structure for forecasting
#[derive(Debug, Clone)]
pub struct TimeSeriesData {
    samples: Vec<Sample>,
    /// Seconds since `origin`, aligned with `samples`
    elapsed: Vec<f64>,
    /// Earliest timestamp in the series
    origin: DateTime<Utc>,
}

impl TimeSeriesData {
    /// Build a series from samples in file order
    pub fn new(samples: Vec<Sample>) -> Result<Self> {
        let timestamps: Vec<DateTime<Utc>> = samples.iter().map(|s| s.timestamp).collect();
        let (origin, elapsed) = time::elapsed_seconds(&timestamps)
            .ok_or_else(|| ForecastError::Processing("no data rows to fit".to_string()))?;

        if elapsed.windows(2).any(|w| w[1] < w[0]) {
            debug!("timestamps are not in ascending order");
        }

        Ok(Self {
            samples,
            elapsed,
            origin,
        })
    }

    /// Build a series from the required columns of a loaded table
    ///
    /// The whole time column is parsed before any value is looked at, so a
    /// bad timestamp is reported ahead of bad values.
    pub fn from_table(table: &CsvTable, columns: &RequiredColumns) -> Result<Self> {
        let rows = table.rows();

        let mut parsed = Vec::with_capacity(rows.len());
        for row in rows {
            let stamp = match row.cell(columns.time) {
                Some(raw) => Some(time::parse_timestamp(raw).map_err(|e| match e {
                    ForecastError::TimestampParse(detail) => {
                        ForecastError::TimestampParse(format!("{} (line {})", detail, row.line()))
                    }
                    other => other,
                })?),
                None => None,
            };
            parsed.push(stamp);
        }
        time::check_consistent_zones(parsed.iter().flatten())?;

        let mut samples = Vec::with_capacity(rows.len());
        for (row, stamp) in rows.iter().zip(parsed) {
            let timestamp = stamp
                .ok_or_else(|| {
                    ForecastError::Processing(format!(
                        "input contains null timestamp on line {}",
                        row.line()
                    ))
                })?
                .instant;
            let value = parse_value(row, columns.value)?;
            samples.push(Sample { timestamp, value });
        }

        let data = Self::new(samples)?;
        if data.len() == 1 {
            warn!("only one sample available; forecasting a flat line");
        }
        Ok(data)
    }

    /// Samples in file order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Get the values as a vector
    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.value).collect()
    }

    /// Get the timestamps as a vector
    pub fn timestamps(&self) -> Vec<DateTime<Utc>> {
        self.samples.iter().map(|s| s.timestamp).collect()
    }

    /// Seconds since the earliest timestamp, aligned with the samples
    pub fn elapsed_seconds(&self) -> &[f64] {
        &self.elapsed
    }

    /// Earliest timestamp in the series
    pub fn origin(&self) -> DateTime<Utc> {
        self.origin
    }

    /// Elapsed seconds of the latest timestamp
    pub fn latest_elapsed(&self) -> f64 {
        self.elapsed.iter().copied().fold(0.0, f64::max)
    }

    /// Check if the time series is empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Get the length of the time series
    pub fn len(&self) -> usize {
        self.samples.len()
    }
}

fn parse_value(row: &CsvRow, index: usize) -> Result<f64> {
    let raw = row.cell(index).ok_or_else(|| {
        ForecastError::Processing(format!("input contains null value on line {}", row.line()))
    })?;

    let value: f64 = raw.trim().parse().map_err(|_| {
        ForecastError::Processing(format!(
            "could not convert value '{}' on line {} to float",
            raw,
            row.line()
        ))
    })?;

    if !value.is_finite() {
        return Err(ForecastError::Processing(format!(
            "input contains non-finite value '{}' on line {}",
            raw,
            row.line()
        )));
    }

    Ok(value)
}
