//! Conversions between the date input (`YYYY-MM-DD`) and server timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const INPUT_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid date: {0}")]
pub struct DueDateError(pub String);

/// Convert a date input value into the timestamp sent to the server.
///
/// An empty input means "no due date".
pub fn to_wire(input: &str) -> Result<Option<String>, DueDateError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    let date = NaiveDate::parse_from_str(input, INPUT_FORMAT)
        .map_err(|_| DueDateError(input.to_string()))?;
    Ok(Some(format!("{}T00:00:00Z", date.format(INPUT_FORMAT))))
}

/// Parse any of the timestamp shapes the server returns.
pub fn parse(wire: &str) -> Option<NaiveDate> {
    let wire = wire.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(wire) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(wire, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(wire, INPUT_FORMAT).ok()
}

/// Format a server timestamp for a date input (`YYYY-MM-DD`).
pub fn to_input(wire: &str) -> Option<String> {
    parse(wire).map(|d| d.format(INPUT_FORMAT).to_string())
}

/// Format a server timestamp for display, e.g. "January 1, 2024".
pub fn to_display(wire: &str) -> Option<String> {
    parse(wire).map(|d| d.format("%B %-d, %Y").to_string())
}
