//! Date-keyed prayer log and the folds over it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{MarkKind, PrayerType};

/// Flags for one prayer on one day. Congregation implies performed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerMark {
    #[serde(default)]
    pub performed: bool,
    #[serde(default, rename = "jamah")]
    pub congregation: bool,
}

impl PrayerMark {
    fn toggle(&mut self, kind: MarkKind) {
        match kind {
            MarkKind::Performed => {
                self.performed = !self.performed;
                if !self.performed {
                    self.congregation = false;
                }
            }
            MarkKind::Congregation => {
                self.congregation = !self.congregation;
                if self.congregation {
                    self.performed = true;
                }
            }
        }
    }
}

/// One day of marks. Prayers without an entry count as not performed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayRecord {
    marks: BTreeMap<PrayerType, PrayerMark>,
}

impl DayRecord {
    pub fn mark(&self, prayer: PrayerType) -> PrayerMark {
        self.marks.get(&prayer).copied().unwrap_or_default()
    }

    pub fn performed_count(&self) -> usize {
        self.marks.values().filter(|m| m.performed).count()
    }

    pub fn congregation_count(&self) -> usize {
        self.marks.values().filter(|m| m.congregation).count()
    }

    fn toggle(&mut self, prayer: PrayerType, kind: MarkKind) {
        self.marks.entry(prayer).or_default().toggle(kind);
    }

    /// Clears congregation flags that have no matching performed flag.
    /// Returns how many were cleared.
    fn normalize(&mut self) -> usize {
        let mut cleared = 0;
        for mark in self.marks.values_mut() {
            if mark.congregation && !mark.performed {
                mark.congregation = false;
                cleared += 1;
            }
        }
        cleared
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrayerLog {
    days: BTreeMap<NaiveDate, DayRecord>,
}

impl PrayerLog {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// The record for `date`, or an empty one if nothing was logged.
    pub fn day(&self, date: NaiveDate) -> DayRecord {
        self.days.get(&date).cloned().unwrap_or_default()
    }

    pub fn days_recorded(&self) -> usize {
        self.days.len()
    }

    /// Flips one flag, creating the day lazily. Other days are left as they were.
    pub fn toggle(&mut self, date: NaiveDate, prayer: PrayerType, kind: MarkKind) -> PrayerMark {
        let record = self.days.entry(date).or_default();
        record.toggle(prayer, kind);
        let mark = record.mark(prayer);
        log::debug!(
            "Toggled {:?} for {} on {}: performed={} jamah={}",
            kind,
            prayer,
            date,
            mark.performed,
            mark.congregation
        );
        mark
    }

    pub fn total_performed(&self) -> usize {
        self.days.values().map(DayRecord::performed_count).sum()
    }

    pub fn total_congregation(&self) -> usize {
        self.days.values().map(DayRecord::congregation_count).sum()
    }

    /// `(performed, congregation)` for one date, each in `0..=5`.
    pub fn day_counts(&self, date: NaiveDate) -> (usize, usize) {
        self.days
            .get(&date)
            .map(|d| (d.performed_count(), d.congregation_count()))
            .unwrap_or((0, 0))
    }

    /// Performed prayers as a whole percentage of the days that have a record.
    pub fn prayer_percent(&self) -> u32 {
        let possible = self.days_recorded() * PrayerType::ALL.len();
        if possible == 0 {
            return 0;
        }
        (self.total_performed() as f64 / possible as f64 * 100.0).round() as u32
    }

    /// Repairs records loaded from storage that break congregation ⇒ performed.
    pub fn normalize(&mut self) -> usize {
        self.days.values_mut().map(DayRecord::normalize).sum()
    }
}
