use serde::{Deserialize, Serialize};

use crate::models::ReadingPosition;
use crate::quran::tables::TOTAL_PAGES;
use crate::ramadan::pace::Pace;

/// Everything the status view shows, computed from one position and log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub position: ReadingPosition,
    pub quran_percent: u32,
    pub ramadan_day: Option<u32>,
    pub pace: Pace,
    pub today_performed: usize,
    pub today_congregation: usize,
    pub total_performed: usize,
    pub total_congregation: usize,
    pub prayer_percent: u32,
}

/// Share of the book behind the current page, as a whole percentage.
pub fn quran_percent(position: &ReadingPosition) -> u32 {
    let read = position.page.saturating_sub(1) as f64;
    (read / TOTAL_PAGES as f64 * 100.0).round() as u32
}
