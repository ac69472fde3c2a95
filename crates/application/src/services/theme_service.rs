//! Theme preference service

use std::sync::Arc;

use domain::value_objects::ThemeMode;
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::PreferenceStore};

/// Reads and persists the two-valued theme preference
///
/// When the store holds no preference the light theme applies, matching the
/// display default for first-time users.
#[derive(Clone)]
pub struct ThemeService {
    store: Arc<dyn PreferenceStore>,
}

impl std::fmt::Debug for ThemeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeService").finish_non_exhaustive()
    }
}

impl ThemeService {
    /// Create a new theme service
    #[must_use]
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// The effective theme: the stored preference or the default
    #[instrument(skip(self))]
    pub async fn current(&self) -> Result<ThemeMode, ApplicationError> {
        Ok(self.store.load_theme().await?.unwrap_or_default())
    }

    /// Persist an explicit theme choice
    #[instrument(skip(self))]
    pub async fn set(&self, mode: ThemeMode) -> Result<(), ApplicationError> {
        self.store.save_theme(mode).await?;
        debug!(theme = %mode, "theme preference saved");
        Ok(())
    }

    /// Flip the current theme, persist it, and return the new mode
    #[instrument(skip(self))]
    pub async fn toggle(&self) -> Result<ThemeMode, ApplicationError> {
        let next = self.current().await?.toggle();
        self.set(next).await?;
        Ok(next)
    }
}
