//! Input loading and record conversion
//!
//! The loader reads a JSON array of raw usage records and converts each
//! one into a typed [`UsageRecord`] for the analyzer. Conversion never
//! rejects a record: an unrecognized elevator or period code, or a floor
//! outside the building's range, falls back to the first member of its
//! closed set. The original system defaulted silently; here every
//! defaulted value is logged at WARN so corrupted input is visible.
//!
//! A read or parse failure is a hard error. A file that parses to an
//! empty array is not: zero records is a valid, analyzable dataset.

use crate::error::AnalyticsResult;
use crate::types::{Elevator, Floor, Period, RawUsageRecord, UsageRecord};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Load usage records from a JSON file
pub fn load_usage_data<P: AsRef<Path>>(path: P) -> AnalyticsResult<Vec<UsageRecord>> {
    let path = path.as_ref();
    debug!("Loading usage records from {}", path.display());
    let content = fs::read_to_string(path)?;
    parse_usage_data(&content)
}

/// Parse usage records from a JSON string
pub fn parse_usage_data(content: &str) -> AnalyticsResult<Vec<UsageRecord>> {
    let raw_records: Vec<RawUsageRecord> = serde_json::from_str(content)?;
    let records = raw_records
        .iter()
        .enumerate()
        .map(|(index, raw)| convert_record(raw, index))
        .collect();
    Ok(records)
}

/// Convert a raw wire record into a typed usage record
///
/// Unparseable enumerated codes default to the first member of their
/// set (elevator A, morning); out-of-range floors default to floor 0.
fn convert_record(raw: &RawUsageRecord, index: usize) -> UsageRecord {
    let elevator = raw.elevator.parse::<Elevator>().unwrap_or_else(|_| {
        warn!(
            record_index = index,
            value = %raw.elevator,
            "Unrecognized elevator code, defaulting to elevator A"
        );
        Elevator::A
    });

    let period = raw.period.parse::<Period>().unwrap_or_else(|_| {
        warn!(
            record_index = index,
            value = %raw.period,
            "Unrecognized period code, defaulting to morning"
        );
        Period::Morning
    });

    let floor = u8::try_from(raw.floor)
        .ok()
        .and_then(|value| Floor::new(value).ok())
        .unwrap_or_else(|| {
            warn!(
                record_index = index,
                value = raw.floor,
                "Floor outside building range, defaulting to floor 0"
            );
            Floor::MIN
        });

    UsageRecord::new(floor, elevator, period)
}
