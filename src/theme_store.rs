//! Process-wide light/dark mode with best-effort persistence.

use crate::storage::PreferenceStore;
use crate::theme::Theme;
use crate::types::ThemeMode;
use std::sync::Arc;
use tokio::sync::watch;

/// Preference key the mode is persisted under
pub const THEME_MODE_KEY: &str = "theme-mode";

/// Holds the active [`ThemeMode`] and publishes changes to subscribers.
///
/// Cloning is cheap and every clone observes the same mode.
#[derive(Clone)]
pub struct ThemeStore {
    mode: Arc<watch::Sender<ThemeMode>>,
    prefs: Arc<dyn PreferenceStore>,
}

impl ThemeStore {
    /// Restore the persisted mode, falling back to light.
    pub fn load(prefs: Arc<dyn PreferenceStore>) -> Self {
        let mode = match prefs.get(THEME_MODE_KEY) {
            Some(raw) => raw.parse::<ThemeMode>().unwrap_or_else(|err| {
                tracing::warn!("ignoring persisted theme preference: {}", err);
                ThemeMode::default()
            }),
            None => ThemeMode::default(),
        };
        tracing::debug!(%mode, "theme store loaded");
        let (sender, _) = watch::channel(mode);
        Self {
            mode: Arc::new(sender),
            prefs,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        *self.mode.borrow()
    }

    pub fn theme(&self) -> &'static Theme {
        Theme::for_mode(self.mode())
    }

    /// Flip light and dark, returning the new mode.
    pub fn toggle(&self) -> ThemeMode {
        let next = self.mode().toggled();
        self.set_mode(next);
        next
    }

    /// Set an absolute mode. The preference is written even when unchanged;
    /// subscribers only hear about actual changes.
    pub fn set_mode(&self, mode: ThemeMode) {
        let changed = self.mode.send_if_modified(|current| {
            if *current == mode {
                return false;
            }
            *current = mode;
            true
        });
        if changed {
            tracing::debug!(%mode, "theme mode changed");
        }
        self.persist(mode);
    }

    pub fn subscribe(&self) -> watch::Receiver<ThemeMode> {
        self.mode.subscribe()
    }

    fn persist(&self, mode: ThemeMode) {
        if let Err(err) = self.prefs.set(THEME_MODE_KEY, mode.as_str()) {
            tracing::warn!("failed to persist theme mode: {}", err);
        }
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("mode", &self.mode())
            .finish_non_exhaustive()
    }
}

impl PartialEq for ThemeStore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.mode, &other.mode)
    }
}
