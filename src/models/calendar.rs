use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RamadanCalendarDay {
    pub ordinal_day: u32,
    pub date: NaiveDate,
    pub is_today: bool,
}

impl RamadanCalendarDay {
    /// Short label such as "Feb 19".
    pub fn label(&self) -> String {
        self.date.format("%b %-d").to_string()
    }
}
