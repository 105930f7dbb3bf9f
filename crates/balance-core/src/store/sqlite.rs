//! SQLite backed store.

use std::path::Path;

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};

use super::KeyValueStore;
use crate::error::{Result, StoreResultExt};

const SELECT_SLOT_SQL: &str = "SELECT value FROM slots WHERE key = ?1";
const UPSERT_SLOT_SQL: &str = "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_SLOT_SQL: &str = "DELETE FROM slots WHERE key = ?1";

/// Slots stored as rows of a single SQLite table.
pub struct SqliteStore {
    connection: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database file and initializes the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).store_context("Failed to open database connection")?;
        Self::from_connection(connection)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().store_context("Failed to open in-memory database")?;
        Self::from_connection(connection)
    }

    fn from_connection(connection: Connection) -> Result<Self> {
        let store = Self { connection };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .store_context("Failed to initialize database schema")
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_SLOT_SQL, params![key], |row| row.get(0))
            .optional()
            .store_context("Failed to read slot")
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(UPSERT_SLOT_SQL, params![key, value, now])
            .store_context("Failed to write slot")?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.connection
            .execute(DELETE_SLOT_SQL, params![key])
            .store_context("Failed to remove slot")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_overwrites() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.set("schedules", "[]").unwrap();
        store.set("schedules", "[1]").unwrap();
        assert_eq!(store.get("schedules").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_missing_slot_is_none() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.get("nothing").unwrap(), None);
    }

    #[test]
    fn test_remove() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.set("onboarding", "{}").unwrap();
        store.remove("onboarding").unwrap();
        store.remove("onboarding").unwrap();
        assert_eq!(store.get("onboarding").unwrap(), None);
    }
}
