//! Static reference data for the 604-page Madani mushaf.
//!
//! Juz and Surah numbers are 1-based everywhere outside this module; the
//! arrays below are indexed 0-based.

use thiserror::Error;

pub const TOTAL_PAGES: u32 = 604;
pub const TOTAL_JUZ: u32 = 30;
pub const TOTAL_SURAHS: u32 = 114;

/// Page on which each Juz begins.
pub const JUZ_START: [u32; TOTAL_JUZ as usize] = [
    1, 22, 42, 62, 82, 102, 121, 142, 162, 182, 201, 222, 242, 262, 282, 302, 322, 342, 362, 382,
    402, 422, 442, 462, 482, 502, 522, 542, 562, 582,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurahInfo {
    pub number: u32,
    pub name: &'static str,
    pub english_name: &'static str,
    pub start_page: u32,
    pub ayat_count: u32,
}

const fn surah(
    number: u32,
    name: &'static str,
    english_name: &'static str,
    start_page: u32,
    ayat_count: u32,
) -> SurahInfo {
    SurahInfo {
        number,
        name,
        english_name,
        start_page,
        ayat_count,
    }
}

pub const SURAHS: [SurahInfo; TOTAL_SURAHS as usize] = [
    surah(1, "Al-Fatihah", "The Opening", 1, 7),
    surah(2, "Al-Baqarah", "The Cow", 2, 286),
    surah(3, "Ali 'Imran", "Family of Imran", 50, 200),
    surah(4, "An-Nisa", "The Women", 77, 176),
    surah(5, "Al-Ma'idah", "The Table Spread", 106, 120),
    surah(6, "Al-An'am", "The Cattle", 128, 165),
    surah(7, "Al-A'raf", "The Heights", 151, 206),
    surah(8, "Al-Anfal", "The Spoils of War", 177, 75),
    surah(9, "At-Tawbah", "The Repentance", 187, 129),
    surah(10, "Yunus", "Jonah", 208, 109),
    surah(11, "Hud", "Hud", 221, 123),
    surah(12, "Yusuf", "Joseph", 235, 111),
    surah(13, "Ar-Ra'd", "The Thunder", 249, 43),
    surah(14, "Ibrahim", "Abraham", 255, 52),
    surah(15, "Al-Hijr", "The Rocky Tract", 262, 99),
    surah(16, "An-Nahl", "The Bee", 267, 128),
    surah(17, "Al-Isra", "The Night Journey", 282, 111),
    surah(18, "Al-Kahf", "The Cave", 293, 110),
    surah(19, "Maryam", "Mary", 305, 98),
    surah(20, "Taha", "Ta-Ha", 312, 135),
    surah(21, "Al-Anbiya", "The Prophets", 322, 112),
    surah(22, "Al-Hajj", "The Pilgrimage", 332, 78),
    surah(23, "Al-Mu'minun", "The Believers", 342, 118),
    surah(24, "An-Nur", "The Light", 350, 64),
    surah(25, "Al-Furqan", "The Criterion", 359, 77),
    surah(26, "Ash-Shu'ara", "The Poets", 367, 227),
    surah(27, "An-Naml", "The Ant", 377, 93),
    surah(28, "Al-Qasas", "The Stories", 385, 88),
    surah(29, "Al-'Ankabut", "The Spider", 396, 69),
    surah(30, "Ar-Rum", "The Romans", 404, 60),
    surah(31, "Luqman", "Luqman", 411, 34),
    surah(32, "As-Sajdah", "The Prostration", 415, 30),
    surah(33, "Al-Ahzab", "The Combined Forces", 418, 73),
    surah(34, "Saba", "Sheba", 428, 54),
    surah(35, "Fatir", "Originator", 434, 45),
    surah(36, "Ya-Sin", "Ya Sin", 440, 83),
    surah(37, "As-Saffat", "Those Who Set the Ranks", 446, 182),
    surah(38, "Sad", "The Letter Sad", 453, 88),
    surah(39, "Az-Zumar", "The Troops", 458, 75),
    surah(40, "Ghafir", "The Forgiver", 467, 85),
    surah(41, "Fussilat", "Explained in Detail", 477, 54),
    surah(42, "Ash-Shura", "The Consultation", 483, 53),
    surah(43, "Az-Zukhruf", "The Ornaments of Gold", 489, 89),
    surah(44, "Ad-Dukhan", "The Smoke", 496, 59),
    surah(45, "Al-Jathiyah", "The Crouching", 499, 37),
    surah(46, "Al-Ahqaf", "The Wind-Curved Sandhills", 502, 35),
    surah(47, "Muhammad", "Muhammad", 507, 38),
    surah(48, "Al-Fath", "The Victory", 511, 29),
    surah(49, "Al-Hujurat", "The Rooms", 515, 18),
    surah(50, "Qaf", "The Letter Qaf", 518, 45),
    surah(51, "Adh-Dhariyat", "The Winnowing Winds", 520, 60),
    surah(52, "At-Tur", "The Mount", 523, 49),
    surah(53, "An-Najm", "The Star", 526, 62),
    surah(54, "Al-Qamar", "The Moon", 528, 55),
    surah(55, "Ar-Rahman", "The Beneficent", 531, 78),
    surah(56, "Al-Waqi'ah", "The Inevitable", 534, 96),
    surah(57, "Al-Hadid", "The Iron", 537, 29),
    surah(58, "Al-Mujadilah", "The Pleading Woman", 542, 22),
    surah(59, "Al-Hashr", "The Exile", 545, 24),
    surah(60, "Al-Mumtahanah", "She That Is To Be Examined", 549, 13),
    surah(61, "As-Saff", "The Ranks", 551, 14),
    surah(62, "Al-Jumu'ah", "The Congregation", 553, 11),
    surah(63, "Al-Munafiqun", "The Hypocrites", 554, 11),
    surah(64, "At-Taghabun", "The Mutual Disillusion", 556, 18),
    surah(65, "At-Talaq", "The Divorce", 558, 12),
    surah(66, "At-Tahrim", "The Prohibition", 560, 12),
    surah(67, "Al-Mulk", "The Sovereignty", 562, 30),
    surah(68, "Al-Qalam", "The Pen", 564, 52),
    surah(69, "Al-Haqqah", "The Reality", 566, 52),
    surah(70, "Al-Ma'arij", "The Ascending Stairways", 568, 44),
    surah(71, "Nuh", "Noah", 570, 28),
    surah(72, "Al-Jinn", "The Jinn", 572, 28),
    surah(73, "Al-Muzzammil", "The Enshrouded One", 574, 20),
    surah(74, "Al-Muddaththir", "The Cloaked One", 575, 56),
    surah(75, "Al-Qiyamah", "The Resurrection", 577, 40),
    surah(76, "Al-Insan", "The Man", 578, 31),
    surah(77, "Al-Mursalat", "The Emissaries", 580, 50),
    surah(78, "An-Naba", "The Tidings", 582, 40),
    surah(79, "An-Nazi'at", "Those Who Drag Forth", 583, 46),
    surah(80, "'Abasa", "He Frowned", 585, 42),
    surah(81, "At-Takwir", "The Overthrowing", 586, 29),
    surah(82, "Al-Infitar", "The Cleaving", 587, 19),
    surah(83, "Al-Mutaffifin", "The Defrauding", 587, 36),
    surah(84, "Al-Inshiqaq", "The Sundering", 589, 25),
    surah(85, "Al-Buruj", "The Mansions of the Stars", 590, 22),
    surah(86, "At-Tariq", "The Nightcomer", 591, 17),
    surah(87, "Al-A'la", "The Most High", 591, 19),
    surah(88, "Al-Ghashiyah", "The Overwhelming", 592, 26),
    surah(89, "Al-Fajr", "The Dawn", 593, 30),
    surah(90, "Al-Balad", "The City", 594, 20),
    surah(91, "Ash-Shams", "The Sun", 595, 15),
    surah(92, "Al-Layl", "The Night", 595, 21),
    surah(93, "Ad-Duha", "The Morning Hours", 596, 11),
    surah(94, "Ash-Sharh", "The Relief", 596, 8),
    surah(95, "At-Tin", "The Fig", 597, 8),
    surah(96, "Al-'Alaq", "The Clot", 597, 19),
    surah(97, "Al-Qadr", "The Power", 598, 5),
    surah(98, "Al-Bayyinah", "The Clear Proof", 598, 8),
    surah(99, "Az-Zalzalah", "The Earthquake", 599, 8),
    surah(100, "Al-'Adiyat", "The Courser", 599, 11),
    surah(101, "Al-Qari'ah", "The Calamity", 600, 11),
    surah(102, "At-Takathur", "The Rivalry in World Increase", 600, 8),
    surah(103, "Al-'Asr", "The Declining Day", 601, 3),
    surah(104, "Al-Humazah", "The Traducer", 601, 9),
    surah(105, "Al-Fil", "The Elephant", 601, 5),
    surah(106, "Quraysh", "Quraysh", 602, 4),
    surah(107, "Al-Ma'un", "The Small Kindnesses", 602, 7),
    surah(108, "Al-Kawthar", "The Abundance", 602, 3),
    surah(109, "Al-Kafirun", "The Disbelievers", 603, 6),
    surah(110, "An-Nasr", "The Divine Support", 603, 3),
    surah(111, "Al-Masad", "The Palm Fiber", 603, 5),
    surah(112, "Al-Ikhlas", "The Sincerity", 604, 4),
    surah(113, "Al-Falaq", "The Daybreak", 604, 5),
    surah(114, "An-Nas", "Mankind", 604, 6),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("{table} must start on page 1, found {found}")]
    FirstPage { table: &'static str, found: u32 },
    #[error("{table} entry {index} starts on page {page}, before the previous entry")]
    Unsorted {
        table: &'static str,
        index: usize,
        page: u32,
    },
    #[error("{table} entry {index} starts on page {page}, past the last page")]
    PastEnd {
        table: &'static str,
        index: usize,
        page: u32,
    },
    #[error("surah at index {index} is numbered {number}")]
    Numbering { index: usize, number: u32 },
}

/// Checks the boundary tables against the ordering rules the resolver relies on.
pub fn validate() -> Result<(), TableError> {
    check_boundaries("juz", &JUZ_START, true)?;
    let surah_pages: Vec<u32> = SURAHS.iter().map(|s| s.start_page).collect();
    check_boundaries("surah", &surah_pages, false)?;

    for (index, s) in SURAHS.iter().enumerate() {
        if s.number as usize != index + 1 {
            return Err(TableError::Numbering {
                index,
                number: s.number,
            });
        }
    }
    Ok(())
}

/// Start pages must begin at 1 and never go backwards. With `strict`, two
/// entries may not share a page either.
fn check_boundaries(table: &'static str, starts: &[u32], strict: bool) -> Result<(), TableError> {
    match starts.first() {
        Some(&1) => {}
        Some(&found) => return Err(TableError::FirstPage { table, found }),
        None => return Err(TableError::FirstPage { table, found: 0 }),
    }
    for (index, pair) in starts.windows(2).enumerate() {
        if pair[1] < pair[0] || (strict && pair[1] == pair[0]) {
            return Err(TableError::Unsorted {
                table,
                index: index + 1,
                page: pair[1],
            });
        }
    }
    for (index, &page) in starts.iter().enumerate() {
        if page > TOTAL_PAGES {
            return Err(TableError::PastEnd { table, index, page });
        }
    }
    Ok(())
}

/// Looks up a surah by its 1-based number.
pub fn surah_info(number: u32) -> Option<&'static SurahInfo> {
    number
        .checked_sub(1)
        .and_then(|idx| SURAHS.get(idx as usize))
}

/// Upper bound for the ayat counter of a surah. Only a hint; never enforced.
pub fn max_ayat(number: u32) -> Option<u32> {
    surah_info(number).map(|s| s.ayat_count)
}

/// Case-insensitive match on transliterated name, English name or number.
pub fn search(query: &str) -> Vec<&'static SurahInfo> {
    let needle = query.trim().to_lowercase();
    SURAHS
        .iter()
        .filter(|s| {
            s.name.to_lowercase().contains(&needle)
                || s.english_name.to_lowercase().contains(&needle)
                || s.number.to_string().contains(&needle)
        })
        .collect()
}
