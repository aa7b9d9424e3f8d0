//! Integration tests for theme persistence
//!
//! Tests file-backed preferences and the theme store on top of them

use inwintors::storage::{FilePreferences, PreferenceStore};
use inwintors::theme_store::{THEME_MODE_KEY, ThemeStore};
use inwintors::types::ThemeMode;
use std::sync::Arc;

mod file_preferences_tests {
    use super::*;

    #[test]
    fn test_set_and_get() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let prefs = FilePreferences::new(dir.path().join("preferences"));

        prefs.set("theme-mode", "dark")?;
        assert_eq!(prefs.get("theme-mode"), Some("dark".to_string()));

        prefs.set("theme-mode", "light")?;
        assert_eq!(prefs.get("theme-mode"), Some("light".to_string()));
        Ok(())
    }

    #[test]
    fn test_get_missing_key() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let prefs = FilePreferences::new(dir.path());
        assert_eq!(prefs.get("theme-mode"), None);
        Ok(())
    }

    #[test]
    fn test_data_dir_layout() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let prefs = FilePreferences::in_data_dir(Some(dir.path().to_path_buf()));
        prefs.set("user:theme", "dark")?;

        // Key gets sanitized for the filesystem
        assert!(dir.path().join("preferences").join("user_theme.pref").exists());
        assert_eq!(prefs.get("user:theme"), Some("dark".to_string()));
        Ok(())
    }

    #[test]
    fn test_unwritable_root_reports_error() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory")?;

        let prefs = FilePreferences::new(blocker.join("preferences"));
        assert!(prefs.set("theme-mode", "dark").is_err());
        Ok(())
    }
}

mod theme_store_tests {
    use super::*;

    fn file_store(dir: &tempfile::TempDir) -> (ThemeStore, Arc<FilePreferences>) {
        let prefs = Arc::new(FilePreferences::new(dir.path()));
        (ThemeStore::load(prefs.clone()), prefs)
    }

    #[test]
    fn test_mode_survives_reload() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let (store, prefs) = file_store(&dir);
        assert_eq!(store.mode(), ThemeMode::Light);

        store.toggle();
        assert_eq!(prefs.get(THEME_MODE_KEY), Some("dark".to_string()));

        let (reloaded, _) = file_store(&dir);
        assert_eq!(reloaded.mode(), ThemeMode::Dark);
        Ok(())
    }

    #[test]
    fn test_garbage_on_disk_yields_light() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join("theme-mode.pref"), "{\"mode\": 3}")?;

        let (store, _) = file_store(&dir);
        assert_eq!(store.mode(), ThemeMode::Light);
        Ok(())
    }

    #[test]
    fn test_unwritable_storage_still_toggles() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory")?;

        let store = ThemeStore::load(Arc::new(FilePreferences::new(blocker.join("prefs"))));
        assert_eq!(store.toggle(), ThemeMode::Dark);
        assert_eq!(store.mode(), ThemeMode::Dark);
        Ok(())
    }

    #[test]
    fn test_set_mode_then_get() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let (store, _) = file_store(&dir);

        store.set_mode(ThemeMode::Dark);
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert_eq!(store.theme().mode, ThemeMode::Dark);
        Ok(())
    }
}
