//! Key-value storage for serialized blobs.
//!
//! Components never touch storage directly; they are handed a
//! [`KeyValueStore`] and read or write whole blobs under a named slot. Writes
//! replace the previous value (last write wins).
//!
//! - [`MemoryStore`]: process-local map, used in tests
//! - [`SqliteStore`]: a single SQLite table, used by the CLI
//! - [`StoreBuilder`]: opens a [`SqliteStore`] at a given or default path

pub mod builder;
pub mod memory;
pub mod sqlite;

pub use builder::StoreBuilder;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::Result;

/// Slot holding the dashboard's schedule list.
pub const SCHEDULES_SLOT: &str = "schedules";

/// Slot holding the last onboarding result.
pub const ONBOARDING_SLOT: &str = "onboarding";

/// String-keyed blob storage.
pub trait KeyValueStore {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
