//! Time and date utilities

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Current instant in UTC
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Today's calendar date in UTC
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parse a form date: `YYYY-MM-DD`, or an RFC 3339 timestamp truncated to its date
pub fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.with_timezone(&Utc).date_naive())
        })
}

/// Next date on or after `from` that falls on `month`/`day`
///
/// Feb 29 resolves to the next leap year.
pub fn next_annual_occurrence(month: u32, day: u32, from: NaiveDate) -> Option<NaiveDate> {
    (from.year()..=from.year() + 8)
        .filter_map(|year| NaiveDate::from_ymd_opt(year, month, day))
        .find(|date| *date >= from)
}
