//! Visit date and time parsing.
//!
//! Dates are read day-first: `01/02/2024` is 1 February. ISO `YYYY-MM-DD`
//! stays year-first. A trailing time part on a date is accepted and dropped.
//! Times are strictly hour:minute.

use chrono::{NaiveDate, NaiveTime};

/// Day-first date shapes, tried in order.
///
/// Two-digit-year shapes come first: `%y` consumes exactly two digits, so a
/// four-digit year falls through to the `%Y` shape instead of being read as
/// year 20.
const DATE_FORMATS: &[&str] = &[
    "%d/%m/%y",
    "%d-%m-%y",
    "%d.%m.%y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d %b %Y",  // 31 Jan 2024
    "%d %B %Y",  // 31 January 2024
    "%d-%b-%Y",  // 31-Jan-2024
    "%b %d, %Y", // Jan 31, 2024
    "%B %d, %Y", // January 31, 2024
    "%m/%d/%Y",  // 01/31/2024, only reached when day-first is impossible
];

const TIME_OF_DAY_FORMATS: &[&str] = &[
    "%H:%M:%S%.f",
    "%H:%M:%S",
    "%H:%M",
    "%I:%M:%S %p",
    "%I:%M %p",
    "%I:%M%p",
];

/// Parse a visit date, day-first. `None` for empty or unparseable input.
pub fn parse_visit_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(date) = try_parse_date(trimmed) {
        return Some(date);
    }
    // Date followed by a time of day: "31/01/2024 10:30", "31/01/2024 10:30 AM",
    // "2024-01-31T10:30:00Z". The time may itself contain spaces, so every
    // separator is a candidate split point.
    trimmed.match_indices([' ', 'T']).find_map(|(idx, _)| {
        let (date_part, time_part) = (&trimmed[..idx], &trimmed[idx + 1..]);
        if is_time_of_day(time_part.trim()) {
            try_parse_date(date_part.trim())
        } else {
            None
        }
    })
}

/// Parse a visit time as `H:MM` or `HH:MM`. Seconds are not accepted.
pub fn parse_visit_time(value: &str) -> Option<NaiveTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveTime::parse_from_str(trimmed, "%H:%M").ok()
}

/// Full English month name, e.g. `January`.
pub fn month_name(date: NaiveDate) -> String {
    date.format("%B").to_string()
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a time as `HH:MM:SS`.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

fn try_parse_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

/// A trailing UTC designator (`Z`) is accepted and ignored.
fn is_time_of_day(value: &str) -> bool {
    let value = value.strip_suffix(['Z', 'z']).unwrap_or(value);
    TIME_OF_DAY_FORMATS
        .iter()
        .any(|fmt| NaiveTime::parse_from_str(value, fmt).is_ok())
}
