pub mod calendar;
pub mod position;
pub mod prayer;
pub mod stats;

pub use calendar::RamadanCalendarDay;
pub use position::{FieldKind, PositionForm, ReadingPosition};
pub use prayer::{MarkKind, PrayerType};
pub use stats::Dashboard;
