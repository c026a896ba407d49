use chrono::{Duration, NaiveDate};

use crate::models::RamadanCalendarDay;

pub const RAMADAN_DAYS: u32 = 30;

/// The 30 days of Ramadan starting at `start`, with `today` flagged.
pub fn ramadan_days(start: NaiveDate, today: NaiveDate) -> Vec<RamadanCalendarDay> {
    (0..RAMADAN_DAYS)
        .map(|offset| {
            let date = start + Duration::days(i64::from(offset));
            RamadanCalendarDay {
                ordinal_day: offset + 1,
                date,
                is_today: date == today,
            }
        })
        .collect()
}

/// Ordinal day for `today`, or `None` outside the month.
pub fn ramadan_day_for(start: NaiveDate, today: NaiveDate) -> Option<u32> {
    let offset = (today - start).num_days();
    if (0..i64::from(RAMADAN_DAYS)).contains(&offset) {
        Some(offset as u32 + 1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 19).unwrap()
    }

    #[test]
    fn generates_thirty_consecutive_days() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let days = ramadan_days(start(), today);
        assert_eq!(days.len(), 30);
        assert_eq!(days[0].date, start());
        assert_eq!(days[0].label(), "Feb 19");
        assert_eq!(days[29].ordinal_day, 30);
        assert_eq!(days[29].date, NaiveDate::from_ymd_opt(2026, 3, 20).unwrap());

        let flagged: Vec<u32> = days.iter().filter(|d| d.is_today).map(|d| d.ordinal_day).collect();
        assert_eq!(flagged, vec![11]);
    }

    #[test]
    fn day_lookup_is_bounded_to_the_month() {
        assert_eq!(ramadan_day_for(start(), start()), Some(1));
        assert_eq!(
            ramadan_day_for(start(), start() + Duration::days(29)),
            Some(30)
        );
        assert_eq!(ramadan_day_for(start(), start() + Duration::days(30)), None);
        assert_eq!(ramadan_day_for(start(), start() - Duration::days(1)), None);
    }
}
