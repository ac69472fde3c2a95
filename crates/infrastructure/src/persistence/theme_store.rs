//! SQLite preference store implementation
//!
//! Implements the `PreferenceStore` port with a single key-value table.
//! The theme preference lives under one well-known key, mirroring the
//! single-key contract of the store it replaces.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use application::{error::ApplicationError, ports::PreferenceStore};
use async_trait::async_trait;
use domain::value_objects::ThemeMode;
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension, params};
use tokio::task;
use tracing::{debug, instrument, warn};

/// Key under which the theme preference is stored
const THEME_KEY: &str = "theme";

/// SQLite-based preference store
///
/// A preference database holds a handful of rows at most, so a single
/// connection behind a mutex is used instead of a pool. Statements run on
/// the blocking thread pool.
#[derive(Debug, Clone)]
pub struct SqliteThemeStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteThemeStore {
    /// Open (and create if needed) the preference database at `path`
    ///
    /// # Errors
    ///
    /// Returns an internal error if the database cannot be opened or the
    /// schema cannot be created.
    pub fn open(path: &Path) -> Result<Self, ApplicationError> {
        let conn = Connection::open(path).map_err(internal)?;
        Self::with_connection(conn)
    }

    /// Open an in-memory store (used by tests and ephemeral runs)
    ///
    /// # Errors
    ///
    /// Returns an internal error if the database cannot be initialized.
    pub fn open_in_memory() -> Result<Self, ApplicationError> {
        let conn = Connection::open_in_memory().map_err(internal)?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, ApplicationError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS preferences (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )
        .map_err(internal)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

fn internal(err: rusqlite::Error) -> ApplicationError {
    ApplicationError::Internal(err.to_string())
}

#[async_trait]
impl PreferenceStore for SqliteThemeStore {
    #[instrument(skip(self))]
    async fn load_theme(&self) -> Result<Option<ThemeMode>, ApplicationError> {
        let conn = Arc::clone(&self.conn);

        task::spawn_blocking(move || {
            let conn = conn.lock();
            let stored: Option<String> = conn
                .query_row(
                    "SELECT value FROM preferences WHERE key = ?1",
                    params![THEME_KEY],
                    |row| row.get(0),
                )
                .optional()
                .map_err(internal)?;

            Ok(stored.and_then(|value| match ThemeMode::from_str(&value) {
                Ok(mode) => Some(mode),
                Err(_) => {
                    // Unknown legacy values fall back to the default theme
                    warn!(value = %value, "Ignoring unrecognized stored theme");
                    None
                }
            }))
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self))]
    async fn save_theme(&self, mode: ThemeMode) -> Result<(), ApplicationError> {
        let conn = Arc::clone(&self.conn);

        task::spawn_blocking(move || {
            let conn = conn.lock();
            conn.execute(
                "INSERT INTO preferences (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![THEME_KEY, mode.as_str()],
            )
            .map_err(internal)?;

            debug!(theme = %mode, "Saved theme preference");
            Ok(())
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_store_has_no_preference() {
        let store = SqliteThemeStore::open_in_memory().expect("store opens");
        assert_eq!(store.load_theme().await.expect("loads"), None);
    }

    #[tokio::test]
    async fn save_and_load_round_trip() {
        let store = SqliteThemeStore::open_in_memory().expect("store opens");

        store.save_theme(ThemeMode::Dark).await.expect("saves");
        assert_eq!(
            store.load_theme().await.expect("loads"),
            Some(ThemeMode::Dark)
        );
    }

    #[tokio::test]
    async fn save_replaces_previous_value() {
        let store = SqliteThemeStore::open_in_memory().expect("store opens");

        store.save_theme(ThemeMode::Dark).await.expect("saves");
        store.save_theme(ThemeMode::Light).await.expect("saves");
        assert_eq!(
            store.load_theme().await.expect("loads"),
            Some(ThemeMode::Light)
        );
    }

    #[tokio::test]
    async fn unrecognized_stored_value_is_ignored() {
        let store = SqliteThemeStore::open_in_memory().expect("store opens");
        {
            let conn = store.conn.lock();
            conn.execute(
                "INSERT INTO preferences (key, value) VALUES ('theme', 'solarized')",
                [],
            )
            .expect("insert");
        }

        assert_eq!(store.load_theme().await.expect("loads"), None);
    }

    #[tokio::test]
    async fn preference_survives_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prefs.db");

        {
            let store = SqliteThemeStore::open(&path).expect("store opens");
            store.save_theme(ThemeMode::Dark).await.expect("saves");
        }

        let store = SqliteThemeStore::open(&path).expect("store reopens");
        assert_eq!(
            store.load_theme().await.expect("loads"),
            Some(ThemeMode::Dark)
        );
    }
}
