use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The welcome card keeps no state of its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WelcomeData {}

impl WelcomeData {
    /// Long-form date shown under the greeting, e.g. `Saturday, October 18, 2026`.
    pub fn formatted_date(date: NaiveDate) -> String {
        date.format("%A, %B %-d, %Y").to_string()
    }
}
