//! The single in-memory owner of the reading position and prayer log.
//!
//! Both records are read once when the session opens and written back in
//! full after every committed change. Writes are fire-and-forget: a failed
//! save is logged and counted, never surfaced as an error.

use chrono::NaiveDate;

use crate::db::repository::{RecordRepo, POSITION_KEY, PRAYER_LOG_KEY};
use crate::db::KeyValueStore;
use crate::models::stats::quran_percent;
use crate::models::{Dashboard, FieldKind, MarkKind, PositionForm, PrayerType, ReadingPosition};
use crate::quran::resolver;
use crate::quran::Resolution;
use crate::ramadan::calendar::ramadan_day_for;
use crate::ramadan::{PaceCalculator, PrayerLog, PrayerMark};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Committed(ReadingPosition),
    Pending(FieldKind),
}

pub struct Session<S: KeyValueStore> {
    store: S,
    form: PositionForm,
    log: PrayerLog,
    save_failures: usize,
}

impl<S: KeyValueStore> Session<S> {
    pub fn open(store: S) -> Self {
        let stored: ReadingPosition = RecordRepo::load_or_default(&store, POSITION_KEY);
        let position = resolver::reconcile(&stored);
        if position != stored {
            log::warn!("Stored position {:?} was inconsistent, using {:?}", stored, position);
        }

        let mut log: PrayerLog = RecordRepo::load_or_default(&store, PRAYER_LOG_KEY);
        let cleared = log.normalize();
        if cleared > 0 {
            log::warn!("Cleared {} congregation marks without a performed prayer", cleared);
        }

        Self {
            store,
            form: PositionForm::new(position),
            log,
            save_failures: 0,
        }
    }

    pub fn position(&self) -> ReadingPosition {
        self.form.position()
    }

    pub fn form(&self) -> &PositionForm {
        &self.form
    }

    pub fn log(&self) -> &PrayerLog {
        &self.log
    }

    pub fn save_failures(&self) -> usize {
        self.save_failures
    }

    /// Applies one raw field edit. Only a parsed value recomputes the other
    /// fields and gets persisted.
    pub fn edit(&mut self, kind: FieldKind, raw: &str) -> EditOutcome {
        match resolver::set_field(&self.form.position(), kind, raw) {
            Resolution::Committed(position) => {
                log::debug!("{} <- {:?} resolved to {:?}", kind, raw, position);
                self.commit(position);
                EditOutcome::Committed(position)
            }
            Resolution::Pending => {
                log::debug!("{} <- {:?} left pending", kind, raw);
                self.form.mark_pending(kind);
                EditOutcome::Pending(kind)
            }
        }
    }

    pub fn next_page(&mut self) -> ReadingPosition {
        let position = resolver::advance_page(&self.form.position());
        self.commit(position);
        position
    }

    pub fn toggle(&mut self, date: NaiveDate, prayer: PrayerType, kind: MarkKind) -> PrayerMark {
        let mark = self.log.toggle(date, prayer, kind);
        if let Err(e) = RecordRepo::save(&mut self.store, PRAYER_LOG_KEY, &self.log) {
            self.save_failed(PRAYER_LOG_KEY, &e);
        }
        mark
    }

    pub fn dashboard(&self, calc: &PaceCalculator, today: NaiveDate) -> Dashboard {
        let position = self.form.position();
        let (today_performed, today_congregation) = self.log.day_counts(today);
        Dashboard {
            position,
            quran_percent: quran_percent(&position),
            ramadan_day: ramadan_day_for(calc.ramadan_start, today),
            pace: calc.calculate(position.page, today),
            today_performed,
            today_congregation,
            total_performed: self.log.total_performed(),
            total_congregation: self.log.total_congregation(),
            prayer_percent: self.log.prayer_percent(),
        }
    }

    fn commit(&mut self, position: ReadingPosition) {
        self.form.commit(position);
        if let Err(e) = RecordRepo::save(&mut self.store, POSITION_KEY, &position) {
            self.save_failed(POSITION_KEY, &e);
        }
    }

    fn save_failed(&mut self, key: &str, err: &crate::db::StorageError) {
        self.save_failures += 1;
        log::warn!("Saving {} failed: {}", key, err);
    }

    #[cfg(test)]
    fn store(&self) -> &S {
        &self.store
    }
}
