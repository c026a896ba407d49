use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ramadan::pace::TARGET_DAYS;

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 19).unwrap_or_default()
}
fn default_target_day() -> u32 {
    29
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RamadanConfig {
    /// First day of Ramadan. Fixed per year, never computed.
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,
    /// Day of Ramadan by which the reader aims to finish.
    #[serde(default = "default_target_day")]
    pub target_day: u32,
}

impl Default for RamadanConfig {
    fn default() -> Self {
        Self {
            start_date: default_start_date(),
            target_day: default_target_day(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Overrides the database location under the platform data dir.
    #[serde(default)]
    pub db_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub ramadan: RamadanConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "ramadan-hub")
            .context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.data_dir().to_path_buf())
    }

    pub fn db_path(&self) -> Result<PathBuf> {
        match &self.storage.db_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::data_dir()?.join("ramadan-hub.db")),
        }
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(&path).with_context(|| format!("Reading {:?}", path))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content).context("Parsing config.toml")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        check_target_day(self.ramadan.target_day)
    }

    /// Creates the directory the database lives in.
    pub fn ensure_db_dir(&self) -> Result<PathBuf> {
        let path = self.db_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Creating {:?}", parent))?;
        }
        Ok(path)
    }
}

pub fn check_target_day(day: u32) -> Result<()> {
    if !TARGET_DAYS.contains(&day) {
        bail!(
            "Target day {} is not supported; choose one of {:?}",
            day,
            TARGET_DAYS
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.ramadan.start_date, default_start_date());
        assert_eq!(config.ramadan.target_day, 29);
        assert!(config.storage.db_path.is_none());
    }

    #[test]
    fn reads_ramadan_and_storage_sections() {
        let config = AppConfig::from_toml(
            r#"
            [ramadan]
            start_date = "2027-02-08"
            target_day = 27

            [storage]
            db_path = "/tmp/hub.db"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.ramadan.start_date,
            NaiveDate::from_ymd_opt(2027, 2, 8).unwrap()
        );
        assert_eq!(config.ramadan.target_day, 27);
        assert_eq!(config.db_path().unwrap(), PathBuf::from("/tmp/hub.db"));
    }

    #[test]
    fn rejects_unsupported_target_day() {
        let err = AppConfig::from_toml("[ramadan]\ntarget_day = 12\n").unwrap_err();
        assert!(err.to_string().contains("Target day 12"));
    }
}
