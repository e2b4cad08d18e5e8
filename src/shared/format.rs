//! Display formatting helpers

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Format an optional ISO 8601 timestamp for display in local time
///
/// Returns `"N/A"` when no timestamp is known and `"Invalid Date"` when the
/// string cannot be parsed. A date-time without an offset is read as local
/// time; a bare date is read as midnight UTC.
pub fn format_date(iso: Option<&str>) -> String {
    let Some(iso) = iso.filter(|s| !s.is_empty()) else {
        return "N/A".to_string();
    };

    match parse_timestamp(iso) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => "Invalid Date".to_string(),
    }
}

fn parse_timestamp(iso: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return Some(dt.with_timezone(&Local));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f") {
        return Local.from_local_datetime(&naive).earliest();
    }
    if let Ok(date) = NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&midnight).with_timezone(&Local));
    }
    None
}
