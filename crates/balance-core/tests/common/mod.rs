use balance_core::{SqliteStore, StoreBuilder};
use jiff::civil::{date, Date};
use tempfile::TempDir;

/// Helper function to create a store in a fresh temporary directory
pub fn create_test_store() -> (TempDir, SqliteStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = reopen(&temp_dir);
    (temp_dir, store)
}

/// Opens the store living in `temp_dir` again, as a new session would
pub fn reopen(temp_dir: &TempDir) -> SqliteStore {
    StoreBuilder::new()
        .with_database_path(Some(temp_dir.path().join("nested").join("test.db")))
        .build()
        .expect("Failed to open store")
}

pub fn today() -> Date {
    date(2025, 1, 6)
}
