//! Keeps page, Juz and Surah consistent when any one of them is edited.
//!
//! Every operation takes the current position and the raw text the user
//! typed. Text that does not parse as an integer yields
//! [`Resolution::Pending`] and nothing else changes. Parsed values are
//! clamped into range (except ayat) before the dependent fields are derived.

use crate::models::{FieldKind, ReadingPosition};
use crate::quran::tables::{JUZ_START, SURAHS, TOTAL_JUZ, TOTAL_PAGES, TOTAL_SURAHS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Committed(ReadingPosition),
    Pending,
}

/// Parses an optionally signed run of decimal digits, surrounding whitespace
/// allowed. Values beyond `i64` saturate rather than fail.
pub fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (negative, digits) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

fn clamp(value: i64, max: u32) -> u32 {
    value.clamp(1, i64::from(max)) as u32
}

/// 1-based index of the last boundary that is `<= page`. Falls back to 1
/// when no boundary qualifies.
fn containing(page: u32, starts: impl Iterator<Item = u32>) -> u32 {
    let mut found = 0usize;
    for (idx, start) in starts.enumerate() {
        if start <= page {
            found = idx;
        }
    }
    found as u32 + 1
}

pub fn juz_for_page(page: u32) -> u32 {
    containing(page, JUZ_START.iter().copied())
}

pub fn surah_for_page(page: u32) -> u32 {
    containing(page, SURAHS.iter().map(|s| s.start_page))
}

fn juz_start(juz: u32) -> u32 {
    JUZ_START
        .get(juz.saturating_sub(1) as usize)
        .copied()
        .unwrap_or(JUZ_START[0])
}

fn surah_start(surah: u32) -> u32 {
    SURAHS
        .get(surah.saturating_sub(1) as usize)
        .unwrap_or(&SURAHS[0])
        .start_page
}

fn at_page(page: u32) -> ReadingPosition {
    ReadingPosition {
        page,
        juz: juz_for_page(page),
        surah: surah_for_page(page),
        ayat: 1,
    }
}

pub fn set_page(_pos: &ReadingPosition, raw: &str) -> Resolution {
    match parse_int(raw) {
        Some(v) => Resolution::Committed(at_page(clamp(v, TOTAL_PAGES))),
        None => Resolution::Pending,
    }
}

pub fn set_juz(_pos: &ReadingPosition, raw: &str) -> Resolution {
    let Some(v) = parse_int(raw) else {
        return Resolution::Pending;
    };
    let juz = clamp(v, TOTAL_JUZ);
    let page = juz_start(juz);
    Resolution::Committed(ReadingPosition {
        page,
        juz,
        surah: surah_for_page(page),
        ayat: 1,
    })
}

/// Jumps to the first page of the surah. The chosen number is kept even when
/// several surahs begin on that page.
pub fn set_surah(_pos: &ReadingPosition, raw: &str) -> Resolution {
    let Some(v) = parse_int(raw) else {
        return Resolution::Pending;
    };
    let surah = clamp(v, TOTAL_SURAHS);
    let page = surah_start(surah);
    Resolution::Committed(ReadingPosition {
        page,
        juz: juz_for_page(page),
        surah,
        ayat: 1,
    })
}

/// Ayat is stored exactly as parsed. No bound against the surah's length.
pub fn set_ayat(pos: &ReadingPosition, raw: &str) -> Resolution {
    match parse_int(raw) {
        Some(ayat) => Resolution::Committed(ReadingPosition { ayat, ..*pos }),
        None => Resolution::Pending,
    }
}

pub fn set_field(pos: &ReadingPosition, kind: FieldKind, raw: &str) -> Resolution {
    match kind {
        FieldKind::Page => set_page(pos, raw),
        FieldKind::Juz => set_juz(pos, raw),
        FieldKind::Surah => set_surah(pos, raw),
        FieldKind::Ayat => set_ayat(pos, raw),
    }
}

/// "Next page": saturates at the last page.
pub fn advance_page(pos: &ReadingPosition) -> ReadingPosition {
    at_page(pos.page.saturating_add(1).min(TOTAL_PAGES))
}

/// Restores page/Juz/Surah agreement on a position read from storage. Ayat is
/// kept. A stored surah that shares its first page with the derived one is
/// kept as well.
pub fn reconcile(pos: &ReadingPosition) -> ReadingPosition {
    let page = pos.page.clamp(1, TOTAL_PAGES);
    let derived = surah_for_page(page);
    let surah = match crate::quran::tables::surah_info(pos.surah) {
        Some(info) if info.start_page == surah_start(derived) => pos.surah,
        _ => derived,
    };
    ReadingPosition {
        page,
        juz: juz_for_page(page),
        surah,
        ayat: pos.ayat,
    }
}

/// True when the ayat counter is outside the surah's known range.
pub fn ayat_exceeds_hint(pos: &ReadingPosition) -> bool {
    match crate::quran::tables::max_ayat(pos.surah) {
        Some(max) => pos.ayat < 1 || pos.ayat > i64::from(max),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn start() -> ReadingPosition {
        ReadingPosition::default()
    }

    fn commit(res: Resolution) -> ReadingPosition {
        match res {
            Resolution::Committed(pos) => pos,
            Resolution::Pending => panic!("expected a committed position"),
        }
    }

    #[test]
    fn first_page_maps_to_opening() {
        let pos = commit(set_page(&start(), "1"));
        assert_eq!(pos, ReadingPosition::default());
    }

    #[test]
    fn second_juz_round_trips_through_page_22() {
        let pos = commit(set_juz(&start(), "2"));
        assert_eq!(pos.page, 22);
        assert_eq!(pos.surah, 2);

        let pos = commit(set_page(&start(), "22"));
        assert_eq!(pos.juz, 2);
    }

    #[test]
    fn out_of_range_values_clamp() {
        assert_eq!(commit(set_page(&start(), "9999")).page, 604);
        assert_eq!(commit(set_page(&start(), "-5")).page, 1);
        assert_eq!(commit(set_page(&start(), "0")).page, 1);
        assert_eq!(commit(set_juz(&start(), "31")).juz, 30);
        assert_eq!(commit(set_surah(&start(), "500")).surah, 114);
        assert_eq!(
            commit(set_page(&start(), "99999999999999999999999")).page,
            604
        );
    }

    #[test]
    fn unparseable_text_stays_pending() {
        for raw in ["", "  ", "abc", "12abc", "-", "1.5"] {
            assert_eq!(set_page(&start(), raw), Resolution::Pending, "{raw:?}");
            assert_eq!(set_ayat(&start(), raw), Resolution::Pending, "{raw:?}");
        }
    }

    #[test]
    fn whitespace_and_sign_are_accepted() {
        assert_eq!(parse_int(" 42 "), Some(42));
        assert_eq!(parse_int("+7"), Some(7));
        assert_eq!(parse_int("-3"), Some(-3));
    }

    #[test]
    fn edits_reset_ayat() {
        let pos = ReadingPosition {
            ayat: 40,
            ..start()
        };
        assert_eq!(commit(set_page(&pos, "100")).ayat, 1);
        assert_eq!(commit(set_juz(&pos, "3")).ayat, 1);
        assert_eq!(commit(set_surah(&pos, "18")).ayat, 1);
    }

    #[test]
    fn ayat_edit_leaves_page_alone_and_is_unclamped() {
        let pos = commit(set_surah(&start(), "1"));
        let edited = commit(set_ayat(&pos, "300"));
        assert_eq!(edited.ayat, 300);
        assert_eq!((edited.page, edited.juz, edited.surah), (1, 1, 1));
        // Al-Fatihah has 7 ayat; the value is kept and only flagged.
        assert!(ayat_exceeds_hint(&edited));
        assert!(!ayat_exceeds_hint(&commit(set_ayat(&pos, "7"))));
    }

    #[test]
    fn surah_boundary_page_belongs_to_the_new_surah() {
        // Ali 'Imran starts on page 50.
        assert_eq!(commit(set_page(&start(), "49")).surah, 2);
        assert_eq!(commit(set_page(&start(), "50")).surah, 3);
    }

    #[test]
    fn shared_start_page_keeps_chosen_surah() {
        let pos = commit(set_surah(&start(), "112"));
        assert_eq!(pos.page, 604);
        assert_eq!(pos.surah, 112);
        assert_eq!(pos.juz, 30);
        // Deriving from the page alone lands on the last surah of the page.
        assert_eq!(surah_for_page(604), 114);

        let pos = commit(set_surah(&start(), "113"));
        assert_eq!((pos.page, pos.juz, pos.surah), (604, 30, 113));
        assert_eq!(
            crate::quran::tables::surah_info(pos.surah).map(|s| s.start_page),
            Some(pos.page)
        );
    }

    #[test]
    fn next_page_saturates() {
        let last = commit(set_page(&start(), "604"));
        assert_eq!(advance_page(&last).page, 604);

        let pos = commit(set_page(&start(), "21"));
        let next = advance_page(&pos);
        assert_eq!((next.page, next.juz), (22, 2));
    }

    #[test]
    fn reconcile_repairs_stored_positions() {
        let broken = ReadingPosition {
            page: 700,
            juz: 1,
            surah: 1,
            ayat: 3,
        };
        let fixed = reconcile(&broken);
        assert_eq!((fixed.page, fixed.juz, fixed.surah, fixed.ayat), (604, 30, 114, 3));

        let shared = commit(set_surah(&start(), "113"));
        assert_eq!(reconcile(&shared), shared);
    }

    #[test]
    fn set_field_dispatches_by_kind() {
        let pos = commit(set_field(&start(), FieldKind::Juz, "30"));
        assert_eq!(pos.page, 582);
        assert_eq!(set_field(&start(), FieldKind::Surah, "x"), Resolution::Pending);
    }

    #[test]
    fn every_juz_boundary_belongs_to_its_juz() {
        for (k, &page) in JUZ_START.iter().enumerate() {
            let pos = commit(set_page(&start(), &page.to_string()));
            assert_eq!(pos.juz, k as u32 + 1);
        }
    }

    #[test]
    fn every_juz_and_surah_jumps_to_its_start() {
        for j in 1..=TOTAL_JUZ {
            let pos = commit(set_juz(&start(), &j.to_string()));
            assert_eq!(pos.page, JUZ_START[j as usize - 1]);
            assert_eq!(pos.juz, j);
        }
        for s in 1..=TOTAL_SURAHS {
            let pos = commit(set_surah(&start(), &s.to_string()));
            assert_eq!(pos.page, SURAHS[s as usize - 1].start_page);
            assert_eq!(pos.juz, juz_for_page(pos.page));
        }
    }

    proptest! {
        #[test]
        fn page_edits_rederive_identically(p in 1u32..=TOTAL_PAGES) {
            let pos = commit(set_page(&start(), &p.to_string()));
            prop_assert_eq!(pos.page, p);
            prop_assert_eq!(pos.juz, juz_for_page(pos.page));
            prop_assert_eq!(pos.surah, surah_for_page(pos.page));
            let start_of_juz = JUZ_START[pos.juz as usize - 1];
            prop_assert!(start_of_juz <= p);
        }

        #[test]
        fn any_integer_commits_a_valid_page(v in any::<i64>()) {
            let pos = commit(set_page(&start(), &v.to_string()));
            prop_assert!((1..=TOTAL_PAGES).contains(&pos.page));
            prop_assert!((1..=TOTAL_JUZ).contains(&pos.juz));
            prop_assert!((1..=TOTAL_SURAHS).contains(&pos.surah));
        }
    }
}
