//! Row-level operations: exclusion filter and result ordering.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use rmap_model::{EXCLUDED_SITE_ID, InputTable, RESULT_COLUMN, SITE_ID_COLUMN};

/// Drops records whose key column holds one of the excluded values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowFilter {
    pub column: String,
    pub excluded: BTreeSet<String>,
}

impl Default for RowFilter {
    /// Excludes the internal test site.
    fn default() -> Self {
        Self {
            column: SITE_ID_COLUMN.to_string(),
            excluded: BTreeSet::from([EXCLUDED_SITE_ID.to_string()]),
        }
    }
}

impl RowFilter {
    /// Filter on `column` with nothing excluded yet.
    pub fn on(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            excluded: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn exclude(mut self, value: impl Into<String>) -> Self {
        self.excluded.insert(value.into());
        self
    }

    /// Exact, case-sensitive match on the raw cell value.
    pub fn is_excluded(&self, value: &str) -> bool {
        self.excluded.contains(value)
    }
}

/// Remove excluded records in place, keeping the survivors' order.
///
/// Returns how many records were removed. A table without the filter
/// column loses nothing.
pub fn filter_rows(table: &mut InputTable, filter: &RowFilter) -> usize {
    let before = table.rows.len();
    table
        .rows
        .retain(|row| !row.get(&filter.column).is_some_and(|v| filter.is_excluded(v)));
    let removed = before - table.rows.len();
    debug!(
        column = %filter.column,
        removed,
        remaining = table.rows.len(),
        "rows filtered"
    );
    removed
}

/// Order records by the result column, descending, keeping ties in input order.
pub fn sort_by_result(table: &mut InputTable) {
    // `sort_by` is stable.
    table
        .rows
        .sort_by(|a, b| b.value(RESULT_COLUMN).cmp(a.value(RESULT_COLUMN)));
}
