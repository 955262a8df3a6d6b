//! Timestamp parsing and elapsed-time normalization
//!
//! Accepts the ISO-8601 extended profile written by time-series databases:
//! a `YYYY-MM-DD` date, optionally followed by a `T`, `t` or space and a
//! `HH[:MM[:SS[.fraction]]]` time with up to nanosecond precision, optionally
//! followed by `Z` or a `±HH:MM` / `±HHMM` / `±HH` offset. Values without a
//! zone are read as UTC.

use crate::error::{ForecastError, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

const ZONED_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
];

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// A parsed timestamp and whether its text carried a zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedTimestamp {
    pub instant: DateTime<Utc>,
    pub zoned: bool,
}

/// Parse one timestamp cell
pub fn parse_timestamp(raw: &str) -> Result<ParsedTimestamp> {
    let (text, zoned) = canonicalize(raw.trim());
    let invalid = || {
        ForecastError::TimestampParse(format!(
            "time data '{}' does not match ISO-8601 format",
            raw
        ))
    };

    if zoned {
        let zoned = ZONED_FORMATS
            .iter()
            .find_map(|fmt| DateTime::<FixedOffset>::parse_from_str(&text, fmt).ok())
            .ok_or_else(invalid)?;
        return Ok(ParsedTimestamp {
            instant: zoned.with_timezone(&Utc),
            zoned: true,
        });
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&text, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(&text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(invalid)?;

    Ok(ParsedTimestamp {
        instant: naive.and_utc(),
        zoned: false,
    })
}

/// Reject a column that mixes zoned and zone-less timestamps
pub fn check_consistent_zones<'a, I>(stamps: I) -> Result<()>
where
    I: IntoIterator<Item = &'a ParsedTimestamp>,
{
    let mut zoned = false;
    let mut naive = false;
    for stamp in stamps {
        zoned |= stamp.zoned;
        naive |= !stamp.zoned;
        if zoned && naive {
            return Err(ForecastError::TimestampParse(
                "cannot mix timezone-aware and naive timestamps".to_string(),
            ));
        }
    }
    Ok(())
}

/// Seconds between each timestamp and the earliest one
///
/// Returns the earliest timestamp together with the offsets, or `None` for an
/// empty slice. The earliest timestamp need not be the first.
pub fn elapsed_seconds(timestamps: &[DateTime<Utc>]) -> Option<(DateTime<Utc>, Vec<f64>)> {
    let origin = *timestamps.iter().min()?;
    let elapsed = timestamps
        .iter()
        .map(|t| {
            let delta = *t - origin;
            delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1e9
        })
        .collect();
    Some((origin, elapsed))
}

// Rewrites the shorter ISO-8601 forms into `YYYY-MM-DDTHH:MM...` with a
// `±HH:MM`/`±HHMM` offset so the format tables stay small. Also reports
// whether the text carried a zone.
fn canonicalize(text: &str) -> (String, bool) {
    let text: String = text
        .char_indices()
        .map(|(i, c)| match c {
            't' | ' ' if i == 10 => 'T',
            _ => c,
        })
        .collect();

    let (mut body, zone) = if let Some(body) = text.strip_suffix(['Z', 'z']) {
        (body.to_string(), Some("+00:00".to_string()))
    } else {
        // Date separators end at byte 7, so a sign from byte 10 on is an offset
        match text.rfind(['+', '-']).filter(|&pos| pos >= 10) {
            Some(pos) => {
                let mut zone = text[pos..].to_string();
                if zone.len() == 3 {
                    zone.push_str(":00");
                }
                (text[..pos].to_string(), Some(zone))
            }
            None => (text, None),
        }
    };

    match body.len() {
        10 if zone.is_some() => body.push_str("T00:00"),
        13 => body.push_str(":00"),
        _ => {}
    }

    let zoned = zone.is_some();
    if let Some(zone) = zone {
        body.push_str(&zone);
    }
    (body, zoned)
}
