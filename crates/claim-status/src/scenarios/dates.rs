//! Date validation for upstream claim fields.
//!
//! The gateway sends dates as loosely formatted text and uses far-past
//! placeholders (`0001-01-01T00:00:00`) for "no date". Everything here returns
//! `Option`/`bool`; an unusable date is an ordinary outcome, not an error.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

const LOCAL_TIMESTAMP_FORMATS: [&str; 3] =
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parse the calendar day out of a gateway date string.
///
/// Offset-carrying timestamps are converted to the server's local day;
/// timestamps without an offset are already local.
pub fn parse_claim_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Local).date_naive());
    }

    for format in LOCAL_TIMESTAMP_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt.date());
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// Parse `text` and keep it only when it is on or after `minimum`.
pub fn parse_valid_date(text: &str, minimum: NaiveDate) -> Option<NaiveDate> {
    parse_claim_date(text).filter(|date| *date >= minimum)
}

pub fn is_valid_date(text: &str, minimum: NaiveDate) -> bool {
    parse_valid_date(text, minimum).is_some()
}

/// Strictly before `today`; today itself is never past.
pub fn is_date_past(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}
