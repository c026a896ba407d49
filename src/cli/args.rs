use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ramadan-hub", version, author, about = "Track Quran reading and prayers through Ramadan")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the dashboard: position, progress, pace and prayers
    Status,
    /// Set the current page (1-604)
    Page {
        /// Page number as typed
        value: String,
    },
    /// Jump to the first page of a Juz (1-30)
    Juz {
        /// Juz number as typed
        value: String,
    },
    /// Jump to the first page of a Surah (1-114)
    Surah {
        /// Surah number as typed
        value: String,
    },
    /// Set the ayat within the current Surah
    Ayat {
        /// Ayat number as typed
        value: String,
    },
    /// Advance one page
    Next,
    /// Toggle a prayer as performed, or as prayed in congregation
    Pray {
        /// Prayer name (fajr, dhuhr, asr, maghrib, isha)
        prayer: String,
        /// Toggle congregation (jamah) instead of performed
        #[arg(long)]
        jamah: bool,
        /// Date to mark (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show the 30 days of Ramadan with prayer counts
    Calendar,
    /// Show the reading pace needed to finish by a target day
    Pace {
        /// Target day of Ramadan (27, 29 or 30)
        #[arg(long)]
        target: Option<u32>,
    },
    /// Look up a Surah by name, English name or number
    Find {
        /// Search text
        query: String,
    },
    /// Print the stored records as JSON
    Export,
}
