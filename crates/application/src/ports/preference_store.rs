//! Preference storage port
//!
//! Defines the single-key persistence contract for the theme preference.

use async_trait::async_trait;
use domain::value_objects::ThemeMode;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for persisting the user's theme preference
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Load the stored theme preference
    ///
    /// Returns `None` when no preference has been stored yet (the caller
    /// falls back to the default theme).
    async fn load_theme(&self) -> Result<Option<ThemeMode>, ApplicationError>;

    /// Persist the theme preference, replacing any previous value
    async fn save_theme(&self, mode: ThemeMode) -> Result<(), ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn PreferenceStore) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn PreferenceStore>();
    }
}
