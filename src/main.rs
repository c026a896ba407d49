mod cli;
mod config;
mod db;
mod models;
mod quran;
mod ramadan;
mod session;
mod utils;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use db::repository::SqliteStore;
use models::FieldKind;
use session::Session;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;
    quran::tables::validate().context("Checking reference tables")?;

    let db_path = config.ensure_db_dir()?;
    let store = SqliteStore::open(&db_path)
        .with_context(|| format!("Opening database at {:?}", db_path))?;
    let mut session = Session::open(store);
    let today = Local::now().date_naive();

    match cli.command.unwrap_or(Commands::Status) {
        Commands::Status => handlers::handle_status(&session, &config, today)?,
        Commands::Page { value } => handlers::handle_edit(&mut session, FieldKind::Page, &value)?,
        Commands::Juz { value } => handlers::handle_edit(&mut session, FieldKind::Juz, &value)?,
        Commands::Surah { value } => {
            handlers::handle_edit(&mut session, FieldKind::Surah, &value)?
        }
        Commands::Ayat { value } => handlers::handle_edit(&mut session, FieldKind::Ayat, &value)?,
        Commands::Next => handlers::handle_next(&mut session)?,
        Commands::Pray {
            prayer,
            jamah,
            date,
        } => handlers::handle_pray(&mut session, &prayer, jamah, date.unwrap_or(today))?,
        Commands::Calendar => handlers::handle_calendar(&session, &config, today)?,
        Commands::Pace { target } => handlers::handle_pace(&session, &config, target, today)?,
        Commands::Find { query } => handlers::handle_find(&query)?,
        Commands::Export => handlers::handle_export(&session)?,
    }

    if session.save_failures() > 0 {
        eprintln!(
            "Warning: {} change(s) could not be saved to {:?}",
            session.save_failures(),
            db_path
        );
    }

    Ok(())
}
