use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Determination statuses that no longer represent an open interview.
pub const DEFAULT_IGNORED_STATUSES: [&str; 8] = [
    "Canceled", "Complete", "TRAN", "INVL", "IDNC", "1277", "OTHR", "ClmCX",
];

/// Classifier inputs that would otherwise come from process-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Exact, case-sensitive status codes treated as closed.
    pub ignored_statuses: BTreeSet<String>,
    /// Dates earlier than this are placeholders (e.g. `0001-01-01`).
    pub minimum_valid_date: NaiveDate,
}

impl ClassifierConfig {
    pub fn default_minimum_valid_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2013, 1, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn is_ignored_status(&self, status: &str) -> bool {
        self.ignored_statuses.contains(status)
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            ignored_statuses: DEFAULT_IGNORED_STATUSES
                .iter()
                .map(|status| status.to_string())
                .collect(),
            minimum_valid_date: Self::default_minimum_valid_date(),
        }
    }
}
