//! SQLite-backed snapshot persistence.
//!
//! The whole session lives in one JSON document under a fixed key in a
//! kv table. Loading never fails: a missing or unreadable record falls
//! back to the built-in defaults, and per-field defaults inside
//! [`Snapshot`] absorb partially valid documents.

use std::path::Path;

use rusqlite::{params, Connection};

use super::{data_dir, Snapshot};
use crate::error::{CoreError, StoreError};

/// The kv key the session record lives under.
const SNAPSHOT_KEY: &str = "focus_shield_v4";

/// SQLite store for the session record.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the store at `~/.config/focusshield/focusshield.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, StoreError> {
        Self::open_at(&data_dir()?)
    }

    /// Open the store inside the given directory. Tests point this at a
    /// temp dir to stay isolated.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_at(dir: &Path) -> Result<Self, StoreError> {
        let path = dir.join("focusshield.db");
        let conn = Connection::open(&path).map_err(|source| StoreError::OpenFailed {
            path: path.clone(),
            source,
        })?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory store (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), StoreError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS kv (
                    key   TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                );",
            )
            .map_err(|e| StoreError::MigrationFailed(e.to_string()))
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Load the session record, falling back to defaults when the record
    /// is missing or unreadable. Field-level gaps are absorbed by the
    /// per-field defaults on [`Snapshot`] itself.
    pub fn load_snapshot(&self) -> Snapshot {
        let raw = match self.kv_get(SNAPSHOT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Snapshot::default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read session record, using defaults");
                return Snapshot::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(error = %e, "corrupt session record, using defaults");
                Snapshot::default()
            }
        }
    }

    /// Persist the session record.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save_snapshot(&self, snapshot: &Snapshot) -> Result<(), CoreError> {
        let json = serde_json::to_string(snapshot)?;
        self.kv_set(SNAPSHOT_KEY, &json)?;
        Ok(())
    }
}
