use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use std::str::FromStr;

use crate::config::settings::check_target_day;
use crate::config::AppConfig;
use crate::db::KeyValueStore;
use crate::models::{FieldKind, MarkKind, PrayerType, ReadingPosition};
use crate::quran::resolver::ayat_exceeds_hint;
use crate::quran::tables::{self, TOTAL_PAGES};
use crate::ramadan::calendar::ramadan_days;
use crate::ramadan::{Pace, PaceCalculator};
use crate::session::{EditOutcome, Session};
use crate::utils::format::{format_countdown, format_pages, progress_bar};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

fn calculator(config: &AppConfig) -> PaceCalculator {
    PaceCalculator::new(config.ramadan.start_date, config.ramadan.target_day)
}

fn surah_name(number: u32) -> &'static str {
    tables::surah_info(number).map(|s| s.name).unwrap_or("?")
}

fn print_position(pos: &ReadingPosition) {
    println_colored!(
        BOLD,
        "  Page {}/{}  ·  Juz {}  ·  {} ({})  ·  Ayat {}",
        pos.page,
        TOTAL_PAGES,
        pos.juz,
        surah_name(pos.surah),
        pos.surah,
        pos.ayat
    );
    if ayat_exceeds_hint(pos) {
        if let Some(max) = tables::max_ayat(pos.surah) {
            println_colored!(AMBER, "  Ayat {} is outside 1-{} for this surah", pos.ayat, max);
        }
    }
}

fn print_pace(pace: &Pace, target_day: u32) {
    println!(
        "  Pace (day {}):  {} pages/day  ·  {} per prayer  ·  {}",
        target_day,
        format_pages(pace.daily_goal),
        format_pages(pace.per_prayer_goal),
        format_countdown(pace.days_left)
    );
}

// ─── Status ──────────────────────────────────────────────────────────────────

pub fn handle_status<S: KeyValueStore>(
    session: &Session<S>,
    config: &AppConfig,
    today: NaiveDate,
) -> Result<()> {
    let dash = session.dashboard(&calculator(config), today);
    let day = dash
        .ramadan_day
        .map(|d| d.to_string())
        .unwrap_or_else(|| "--".to_string());

    println!();
    println_colored!(GOLD, "  Ramadan Hub — day {} ({})", day, today);
    println!();
    print_position(&dash.position);
    println!(
        "  Quran:  {}  {}%",
        progress_bar(dash.quran_percent, 100, 24),
        dash.quran_percent
    );
    print_pace(&dash.pace, config.ramadan.target_day);
    println!();

    let record = session.log().day(today);
    print!("  Today:  ");
    for prayer in PrayerType::ALL {
        let mark = record.mark(prayer);
        let (color, icon) = if mark.congregation {
            (GREEN, "●")
        } else if mark.performed {
            (GREEN, "◑")
        } else {
            (DIM, "○")
        };
        print!("{}{} {}\x1b[0m  ", color, icon, prayer.display_name());
    }
    println!();
    println!(
        "  {}/5 performed, {} in jamah today  ·  {} performed, {} in jamah overall ({}%)",
        dash.today_performed,
        dash.today_congregation,
        dash.total_performed,
        dash.total_congregation,
        dash.prayer_percent
    );
    println!();
    Ok(())
}

// ─── Position edits ──────────────────────────────────────────────────────────

pub fn handle_edit<S: KeyValueStore>(
    session: &mut Session<S>,
    kind: FieldKind,
    raw: &str,
) -> Result<()> {
    match session.edit(kind, raw) {
        EditOutcome::Committed(pos) => {
            println_colored!(GREEN, "  ✓ {} updated", kind);
            print_position(&pos);
        }
        EditOutcome::Pending(kind) => {
            println_colored!(
                DIM,
                "  {} left pending: {:?} is not a whole number, nothing saved",
                kind,
                raw
            );
            let form = session.form();
            let fields: Vec<String> = FieldKind::ALL
                .iter()
                .map(|k| format!("{} [{}]", k, form.field(*k)))
                .collect();
            println_colored!(DIM, "  {}", fields.join("  "));
        }
    }
    Ok(())
}

pub fn handle_next<S: KeyValueStore>(session: &mut Session<S>) -> Result<()> {
    let before = session.position().page;
    let pos = session.next_page();
    if pos.page == before {
        println_colored!(AMBER, "  Already on the last page");
    } else {
        println_colored!(GREEN, "  ✓ Moved to page {}", pos.page);
    }
    print_position(&pos);
    Ok(())
}

// ─── Prayers ─────────────────────────────────────────────────────────────────

pub fn handle_pray<S: KeyValueStore>(
    session: &mut Session<S>,
    prayer_str: &str,
    jamah: bool,
    date: NaiveDate,
) -> Result<()> {
    let prayer = PrayerType::from_str(prayer_str).map_err(|_| {
        anyhow!(
            "Unknown prayer '{}'. Use: fajr, dhuhr, asr, maghrib, isha",
            prayer_str
        )
    })?;
    let kind = if jamah {
        MarkKind::Congregation
    } else {
        MarkKind::Performed
    };

    let mark = session.toggle(date, prayer, kind);
    match (mark.performed, mark.congregation) {
        (true, true) => println_colored!(GREEN, "  ✓ {} prayed in jamah ({})", prayer, date),
        (true, false) => println_colored!(GREEN, "  ✓ {} performed ({})", prayer, date),
        _ => println_colored!(DIM, "  ○ {} unmarked ({})", prayer, date),
    }
    let (performed, congregation) = session.log().day_counts(date);
    println_colored!(DIM, "  {}/5 performed, {} in jamah", performed, congregation);
    Ok(())
}

// ─── Calendar ────────────────────────────────────────────────────────────────

pub fn handle_calendar<S: KeyValueStore>(
    session: &Session<S>,
    config: &AppConfig,
    today: NaiveDate,
) -> Result<()> {
    println!();
    println_colored!(GOLD, "  Ramadan Calendar");
    println!();
    for day in ramadan_days(config.ramadan.start_date, today) {
        let (performed, congregation) = session.log().day_counts(day.date);
        let line = format!(
            "  #{:<3} {:<7} {}  {}/5  jamah {}",
            day.ordinal_day,
            day.label(),
            progress_bar(performed as u32, 5, 5),
            performed,
            congregation
        );
        if day.is_today {
            println_colored!(GOLD, "{}  ← today", line);
        } else if performed == 5 {
            println_colored!(GREEN, "{}", line);
        } else {
            println!("{}", line);
        }
    }
    println!();
    Ok(())
}

// ─── Pace ────────────────────────────────────────────────────────────────────

pub fn handle_pace<S: KeyValueStore>(
    session: &Session<S>,
    config: &AppConfig,
    target: Option<u32>,
    today: NaiveDate,
) -> Result<()> {
    let target_day = target.unwrap_or(config.ramadan.target_day);
    check_target_day(target_day)?;

    let calc = PaceCalculator::new(config.ramadan.start_date, target_day);
    let pace = calc.calculate(session.position().page, today);

    println!();
    println_colored!(GOLD, "  Finish by day {}", target_day);
    println!();
    println!("  Pages left:  {}", pace.pages_left);
    print_pace(&pace, target_day);
    println!();
    Ok(())
}

// ─── Find ────────────────────────────────────────────────────────────────────

pub fn handle_find(query: &str) -> Result<()> {
    let hits = tables::search(query);
    println!();
    if hits.is_empty() {
        println_colored!(DIM, "  No surah matches {:?}", query);
    }
    for s in hits {
        println!(
            "  {:>3}  {:<16} {:<28} page {:<4} {} ayat",
            s.number, s.name, s.english_name, s.start_page, s.ayat_count
        );
    }
    println!();
    Ok(())
}

// ─── Export ──────────────────────────────────────────────────────────────────

pub fn handle_export<S: KeyValueStore>(session: &Session<S>) -> Result<()> {
    let export = serde_json::json!({
        "reading_position": session.position(),
        "prayer_log": session.log(),
    });
    println!("{}", serde_json::to_string_pretty(&export)?);
    Ok(())
}
