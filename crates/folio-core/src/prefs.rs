//! Local preference storage.
//!
//! A small JSON file at `${FOLIO_HOME}/prefs.json` holding the preferred
//! palette id and any custom palette colors. `PrefsStore` is the only writer
//! of this file; readers go through it as well.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config;
use crate::theme::ThemeColors;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PrefsFile {
    preferred_theme_id: Option<String>,
    custom_theme: Option<ThemeColors>,
}

/// Handle on the local preferences file.
#[derive(Debug, Clone)]
pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    /// Opens the store at the default prefs path.
    pub fn open_default() -> Self {
        Self::new(config::paths::prefs_path())
    }

    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the locally persisted palette id, if any.
    ///
    /// A missing or unreadable file is treated as "no preference".
    pub fn preferred_theme_id(&self) -> Option<String> {
        self.read().preferred_theme_id
    }

    /// Returns the locally persisted custom palette colors, if any.
    pub fn custom_colors(&self) -> Option<ThemeColors> {
        self.read().custom_theme
    }

    /// Persists the preferred palette id, keeping other entries intact.
    pub fn save_theme_id(&self, id: &str) -> Result<()> {
        let mut prefs = self.read();
        prefs.preferred_theme_id = Some(id.to_string());
        self.write(&prefs)
    }

    /// Persists custom palette colors, keeping other entries intact.
    pub fn save_custom_colors(&self, colors: &ThemeColors) -> Result<()> {
        let mut prefs = self.read();
        prefs.custom_theme = Some(colors.clone());
        self.write(&prefs)
    }

    fn read(&self) -> PrefsFile {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            return PrefsFile::default();
        };
        match serde_json::from_str(&contents) {
            Ok(prefs) => prefs,
            Err(err) => {
                tracing::debug!(
                    path = %self.path.display(),
                    "ignoring unparsable prefs file: {err}"
                );
                PrefsFile::default()
            }
        }
    }

    fn write(&self, prefs: &PrefsFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create prefs directory {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(prefs).context("Failed to encode prefs")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write prefs to {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, PrefsStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefsStore::new(dir.path().join("prefs.json"));
        (dir, store)
    }

    #[test]
    fn missing_file_means_no_preference() {
        let (_dir, store) = temp_store();
        assert_eq!(store.preferred_theme_id(), None);
        assert_eq!(store.custom_colors(), None);
    }

    #[test]
    fn theme_id_round_trips() {
        let (_dir, store) = temp_store();
        store.save_theme_id("ocean").unwrap();
        assert_eq!(store.preferred_theme_id().as_deref(), Some("ocean"));
    }

    #[test]
    fn custom_colors_do_not_clobber_theme_id() {
        let (_dir, store) = temp_store();
        store.save_theme_id("forest").unwrap();
        let colors = ThemeColors {
            accent_color: "#112233".to_string(),
            background_color: "#445566".to_string(),
            dark_text_color: "#000000".to_string(),
            light_text_color: "#ffffff".to_string(),
        };
        store.save_custom_colors(&colors).unwrap();
        assert_eq!(store.preferred_theme_id().as_deref(), Some("forest"));
        assert_eq!(store.custom_colors(), Some(colors));
    }

    #[test]
    fn corrupt_file_degrades_to_empty() {
        let (_dir, store) = temp_store();
        std::fs::write(store.path(), "{not json").unwrap();
        assert_eq!(store.preferred_theme_id(), None);
        // A save after corruption starts over from empty prefs.
        store.save_theme_id("sunset").unwrap();
        assert_eq!(store.preferred_theme_id().as_deref(), Some("sunset"));
    }
}
