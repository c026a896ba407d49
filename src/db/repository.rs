use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

use crate::db::migrations::run_migrations;
use crate::db::{KeyValueStore, StorageError};

pub const POSITION_KEY: &str = "reading_position";
pub const PRAYER_LOG_KEY: &str = "prayer_log";

// ─── SQLite store ────────────────────────────────────────────────────────────

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        // WAL keeps a reader from blocking the single writer.
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        Self::init(conn)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StorageError> {
        run_migrations(&conn)?;
        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.conn
            .query_row(
                "SELECT value FROM records WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(StorageError::from)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO records (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
            params![key, value],
        )?;
        Ok(())
    }
}

// ─── Typed records ───────────────────────────────────────────────────────────

pub struct RecordRepo;

impl RecordRepo {
    /// Reads and decodes a record. Absent, unreadable or corrupt records all
    /// come back as `T::default()`.
    pub fn load_or_default<T, S>(store: &S, key: &str) -> T
    where
        T: DeserializeOwned + Default,
        S: KeyValueStore + ?Sized,
    {
        let raw = match store.load(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("No stored {}, starting fresh", key);
                return T::default();
            }
            Err(e) => {
                log::warn!("Could not read {}: {}; using defaults", key, e);
                return T::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Stored {} is corrupt ({}); using defaults", key, e);
                T::default()
            }
        }
    }

    pub fn save<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), StorageError>
    where
        T: Serialize,
        S: KeyValueStore + ?Sized,
    {
        let raw = serde_json::to_string(value)?;
        store.save(key, &raw)?;
        log::debug!("Saved {} ({} bytes)", key, raw.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::models::ReadingPosition;
    use tempfile::TempDir;

    #[test]
    fn sqlite_store_overwrites_whole_records() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.load("k").unwrap(), None);
        store.save("k", "one").unwrap();
        store.save("k", "two").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn records_survive_reopening_the_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("hub.db");
        let pos = ReadingPosition {
            page: 300,
            juz: 15,
            surah: 18,
            ayat: 5,
        };

        {
            let mut store = SqliteStore::open(&path).unwrap();
            RecordRepo::save(&mut store, POSITION_KEY, &pos).unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        let loaded: ReadingPosition = RecordRepo::load_or_default(&store, POSITION_KEY);
        assert_eq!(loaded, pos);
    }

    #[test]
    fn missing_or_corrupt_records_fall_back_to_defaults() {
        let mut store = MemoryStore::new();
        let loaded: ReadingPosition = RecordRepo::load_or_default(&store, POSITION_KEY);
        assert_eq!(loaded, ReadingPosition::default());

        store.save(POSITION_KEY, "{not json").unwrap();
        let loaded: ReadingPosition = RecordRepo::load_or_default(&store, POSITION_KEY);
        assert_eq!(loaded, ReadingPosition::default());

        store.save(POSITION_KEY, r#"{"page":"ten"}"#).unwrap();
        let loaded: ReadingPosition = RecordRepo::load_or_default(&store, POSITION_KEY);
        assert_eq!(loaded, ReadingPosition::default());
    }
}
