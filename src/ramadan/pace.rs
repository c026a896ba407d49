use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::PrayerType;
use crate::quran::tables::TOTAL_PAGES;

/// Target days a reader can aim to finish by.
pub const TARGET_DAYS: [u32; 3] = [27, 29, 30];

/// Recommended reading pace toward a target day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pace {
    pub daily_goal: f64,
    pub per_prayer_goal: f64,
    pub days_left: u32,
    pub current_day: i64,
    pub pages_left: u32,
}

pub struct PaceCalculator {
    pub ramadan_start: NaiveDate,
    pub target_day: u32,
}

impl PaceCalculator {
    pub fn new(ramadan_start: NaiveDate, target_day: u32) -> Self {
        Self {
            ramadan_start,
            target_day,
        }
    }

    /// 1-based day of Ramadan for `today`. Zero or negative before it starts.
    pub fn current_day(&self, today: NaiveDate) -> i64 {
        (today - self.ramadan_start).num_days() + 1
    }

    pub fn calculate(&self, current_page: u32, today: NaiveDate) -> Pace {
        let current_day = self.current_day(today);
        let days_left = i64::from(self.target_day) - (current_day - 1).max(0);
        // The current page counts as still being read.
        let pages_left = (TOTAL_PAGES + 1).saturating_sub(current_page);
        let prayers = PrayerType::ALL.len() as f64;

        let (daily_goal, per_prayer_goal) = if days_left <= 1 {
            (f64::from(pages_left), round1(f64::from(pages_left) / prayers))
        } else {
            let days = days_left as f64;
            (
                round1(f64::from(pages_left) / days),
                round1(f64::from(pages_left) / (days * prayers)),
            )
        };

        Pace {
            daily_goal,
            per_prayer_goal,
            days_left: days_left.max(0) as u32,
            current_day,
            pages_left,
        }
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 19).unwrap()
    }

    fn day(n: i64) -> NaiveDate {
        start() + chrono::Duration::days(n - 1)
    }

    #[test]
    fn last_page_on_target_day_is_due_today() {
        let pace = PaceCalculator::new(start(), 29).calculate(604, day(29));
        assert_eq!(pace.current_day, 29);
        assert_eq!(pace.days_left, 1);
        assert_eq!(pace.daily_goal, 1.0);
        assert_eq!(pace.per_prayer_goal, 0.2);
    }

    #[test]
    fn first_day_spreads_the_whole_book() {
        let pace = PaceCalculator::new(start(), 30).calculate(1, day(1));
        assert_eq!(pace.days_left, 30);
        assert_eq!(pace.pages_left, 604);
        assert_eq!(pace.daily_goal, 20.1);
        assert_eq!(pace.per_prayer_goal, 4.0);
    }

    #[test]
    fn before_ramadan_counts_from_day_one() {
        let before = start() - chrono::Duration::days(5);
        let calc = PaceCalculator::new(start(), 27);
        assert_eq!(calc.current_day(before), -4);
        assert_eq!(calc.calculate(1, before).days_left, 27);
    }

    #[test]
    fn past_target_clamps_days_left_to_zero() {
        let pace = PaceCalculator::new(start(), 27).calculate(500, day(30));
        assert_eq!(pace.days_left, 0);
        assert_eq!(pace.daily_goal, 105.0);
        assert_eq!(pace.per_prayer_goal, 21.0);
    }

    proptest! {
        #[test]
        fn more_pages_read_never_raises_the_goal(
            page in 1u32..604,
            d in -10i64..40,
            target_idx in 0usize..TARGET_DAYS.len(),
        ) {
            let calc = PaceCalculator::new(start(), TARGET_DAYS[target_idx]);
            let today = day(d);
            let here = calc.calculate(page, today);
            let ahead = calc.calculate(page + 1, today);
            prop_assert!(ahead.daily_goal <= here.daily_goal);
        }
    }
}
