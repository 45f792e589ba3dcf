//! Short Spanish (Colombia) date labels for FAQ metadata.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const MONTHS_ES: [&str; 12] = ["ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic"];

/// Parse an ISO-8601-ish timestamp into its calendar date.
///
/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM:SS[.fff]`, and bare `YYYY-MM-DD`.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Render `05 ene 2024`; unparsable input renders as an empty string.
#[must_use]
pub fn format_short_es(raw: &str) -> String {
    use chrono::Datelike as _;

    let Some(date) = parse_date(raw) else {
        return String::new();
    };
    let month = MONTHS_ES[date.month0() as usize];
    format!("{:02} {month} {}", date.day(), date.year())
}
