pub mod calendar;
pub mod pace;
pub mod prayer_log;

pub use pace::{Pace, PaceCalculator};
pub use prayer_log::{PrayerLog, PrayerMark};
