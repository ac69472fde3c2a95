//! SQLite-backed persistence

mod theme_store;

pub use theme_store::SqliteThemeStore;
