//! Visit date/time normalization and month derivation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use rmap_model::{DerivedField, InputTable, VISIT_DATE_COLUMN, VISIT_TIME_COLUMN};

use crate::datetime::{format_date, format_time, month_name, parse_visit_date, parse_visit_time};

/// Per-run counts of what date/time normalization did.
///
/// `*_failures` counts non-empty values that did not parse; empty values
/// are counted separately and are not failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationReport {
    pub dates_parsed: usize,
    pub date_failures: usize,
    pub dates_empty: usize,
    pub times_parsed: usize,
    pub time_failures: usize,
    pub times_empty: usize,
}

impl NormalizationReport {
    pub fn has_failures(&self) -> bool {
        self.date_failures > 0 || self.time_failures > 0
    }
}

/// Rewrite visit dates as `YYYY-MM-DD`, visit times as `HH:MM:SS`, and set
/// the derived month on every record.
///
/// A value that does not parse becomes the empty string, and so does the
/// month for a record whose date did not parse. The month is derived from
/// the parsed date before the date field is rewritten.
pub fn normalize_date_time(table: &mut InputTable) -> NormalizationReport {
    let mut report = NormalizationReport::default();
    let month_key = DerivedField::Month.key();

    for (idx, row) in table.rows.iter_mut().enumerate() {
        let raw_date = row.value(VISIT_DATE_COLUMN).to_string();
        let date = parse_visit_date(&raw_date);
        match date {
            Some(_) => report.dates_parsed += 1,
            None if raw_date.trim().is_empty() => report.dates_empty += 1,
            None => {
                report.date_failures += 1;
                debug!(row = idx + 1, column = VISIT_DATE_COLUMN, "unparseable date");
            }
        }

        let raw_time = row.value(VISIT_TIME_COLUMN).to_string();
        let time = parse_visit_time(&raw_time);
        match time {
            Some(_) => report.times_parsed += 1,
            None if raw_time.trim().is_empty() => report.times_empty += 1,
            None => {
                report.time_failures += 1;
                debug!(row = idx + 1, column = VISIT_TIME_COLUMN, "unparseable time");
            }
        }

        row.set(month_key, date.map(month_name).unwrap_or_default());
        row.set(VISIT_DATE_COLUMN, date.map(format_date).unwrap_or_default());
        row.set(VISIT_TIME_COLUMN, time.map(format_time).unwrap_or_default());
    }

    report
}
