//! Builder for opening the on-disk store.

use std::path::{Path, PathBuf};

use log::debug;

use super::SqliteStore;
use crate::error::{BalanceError, Result};

/// Builder for creating and configuring [`SqliteStore`] instances.
#[derive(Debug, Clone, Default)]
pub struct StoreBuilder {
    database_path: Option<PathBuf>,
}

impl StoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/balance/balance.db` or `~/.local/share/balance/balance.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Opens the configured store, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns `BalanceError::FileSystem` if the parent directory cannot be
    /// created and `BalanceError::Store` if the database cannot be opened.
    pub fn build(self) -> Result<SqliteStore> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| BalanceError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening store at {}", db_path.display());
        SqliteStore::open(&db_path)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("balance")
            .place_data_file("balance.db")
            .map_err(|e| BalanceError::XdgDirectory(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::store::KeyValueStore;

    #[test]
    fn test_build_creates_parent_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("nested").join("balance.db");

        let mut store = StoreBuilder::new()
            .with_database_path(Some(&db_path))
            .build()
            .expect("Failed to open store");
        store.set("k", "v").unwrap();

        assert!(db_path.exists());
    }
}
