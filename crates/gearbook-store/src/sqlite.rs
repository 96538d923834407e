//! SQLite implementation of the Persistence trait.
//!
//! Values are stored as JSON text in a single `kv` table. Uses rusqlite with
//! bundled SQLite.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;

use crate::error::{Result, StoreError};
use crate::migration::{self, now_millis};
use crate::traits::Persistence;

/// SQLite-based persistence provider.
///
/// Thread-safe via an internal Mutex around the connection.
pub struct SqlitePersistence {
    conn: Mutex<Connection>,
}

impl SqlitePersistence {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory SQLite database.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }

    /// Read a key, distinguishing "missing" from "unreadable".
    pub fn load(&self, key: &str) -> Result<Option<Value>> {
        let conn = self.lock()?;
        let text: Option<String> = conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;

        match text {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    /// Write a key, replacing any previous value.
    pub fn save(&self, key: &str, value: &Value) -> Result<()> {
        let text = serde_json::to_string(value)?;
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, text, now_millis()],
        )?;
        Ok(())
    }

    /// Remove a key. Returns whether it existed.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let conn = self.lock()?;
        let affected = conn.execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(affected > 0)
    }
}

impl Persistence for SqlitePersistence {
    fn get(&self, key: &str) -> Option<Value> {
        self.load(key).unwrap_or_else(|e| {
            tracing::warn!(key, "failed to read key from sqlite: {}", e);
            None
        })
    }

    fn set(&self, key: &str, value: &Value) -> bool {
        match self.save(key, value) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key, "failed to write key to sqlite: {}", e);
                false
            }
        }
    }
}
