//! Persisted application settings
//!
//! A flat key-value store backed by a single JSON file. Load failures
//! (missing file, unreadable file, malformed JSON) are treated as "no
//! settings yet" and yield an empty map. Save failures are returned to
//! the caller; the in-memory value still takes effect for the rest of
//! the process.
//!
//! The store is an explicitly constructed value owned by `App` and passed
//! to the code that needs it; there is no process-global instance.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings file name, relative to the application root (the working
/// directory the process was launched from)
pub const SETTINGS_FILE: &str = "app_settings.json";

/// Key under which the last used import directory is stored
pub const LAST_DIRECTORY_KEY: &str = "last_directory";

/// JSON-backed key-value settings store
#[derive(Debug)]
pub struct Settings {
    /// File the store reads from and writes to
    path: PathBuf,
    /// In-memory settings map; unknown keys are kept and re-serialized
    values: Map<String, Value>,
}

impl Settings {
    /// Load settings from the default location
    pub fn load() -> Self {
        Self::load_from(SETTINGS_FILE)
    }

    /// Load settings from an explicit path
    ///
    /// Any failure to read or parse the file yields an empty store; this
    /// is never an error.
    pub fn load_from(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = fs::read_to_string(&path)
            .ok()
            .and_then(|contents| serde_json::from_str::<Map<String, Value>>(&contents).ok())
            .unwrap_or_default();
        Self { path, values }
    }

    /// Get a setting value, or `None` if the key is absent
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Set a setting value and persist the whole store immediately
    ///
    /// The in-memory value is updated even when the write fails; the
    /// error is returned so the caller can surface a warning.
    pub fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        self.save()
    }

    /// Write the store to disk as a pretty-printed JSON object
    fn save(&self) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, contents)
            .with_context(|| format!("could not save settings to {}", self.path.display()))
    }

    /// Last used import directory
    ///
    /// Returns the stored path only if it still exists as a directory,
    /// otherwise the default root.
    pub fn last_directory(&self) -> PathBuf {
        if let Some(Value::String(dir)) = self.get(LAST_DIRECTORY_KEY) {
            let path = PathBuf::from(dir);
            if path.is_dir() {
                return path;
            }
        }
        Self::default_root()
    }

    /// Remember the last used import directory
    pub fn set_last_directory(&mut self, directory: &Path) -> Result<()> {
        self.set(
            LAST_DIRECTORY_KEY,
            Value::String(directory.to_string_lossy().into_owned()),
        )
    }

    /// Fallback directory when no valid last directory is stored
    fn default_root() -> PathBuf {
        env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn settings_in(dir: &TempDir) -> Settings {
        Settings::load_from(dir.path().join(SETTINGS_FILE))
    }

    #[test]
    fn test_missing_file_yields_empty_store() {
        let dir = TempDir::new().unwrap();
        let settings = settings_in(&dir);
        assert!(settings.get("anything").is_none());
    }

    #[test]
    fn test_invalid_json_yields_empty_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "{ not json at all").unwrap();

        let settings = Settings::load_from(&path);
        assert!(settings.get(LAST_DIRECTORY_KEY).is_none());
    }

    #[test]
    fn test_non_object_json_yields_empty_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "[1, 2, 3]").unwrap();

        let settings = Settings::load_from(&path);
        assert!(settings.get("anything").is_none());
    }

    #[test]
    fn test_set_persists_immediately() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);

        let mut settings = Settings::load_from(&path);
        settings.set("threshold", json!(42)).unwrap();

        let reloaded = Settings::load_from(&path);
        assert_eq!(reloaded.get("threshold"), Some(&json!(42)));
    }

    #[test]
    fn test_unknown_keys_survive_a_save() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, r#"{"future_key": "kept"}"#).unwrap();

        let mut settings = Settings::load_from(&path);
        settings.set(LAST_DIRECTORY_KEY, json!("/tmp")).unwrap();

        let reloaded = Settings::load_from(&path);
        assert_eq!(reloaded.get("future_key"), Some(&json!("kept")));
    }

    #[test]
    fn test_last_directory_roundtrip() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().join("images");
        fs::create_dir(&data_dir).unwrap();

        let mut settings = settings_in(&dir);
        settings.set_last_directory(&data_dir).unwrap();
        assert_eq!(settings.last_directory(), data_dir);
    }

    #[test]
    fn test_last_directory_falls_back_when_deleted() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().join("images");
        fs::create_dir(&data_dir).unwrap();

        let mut settings = settings_in(&dir);
        settings.set_last_directory(&data_dir).unwrap();

        fs::remove_dir(&data_dir).unwrap();
        let fallback = settings.last_directory();
        assert_ne!(fallback, data_dir);
        assert!(fallback.is_dir());
    }

    #[test]
    fn test_save_failure_keeps_in_memory_value() {
        let dir = TempDir::new().unwrap();
        // Point the store at a path whose parent does not exist so the
        // write fails.
        let mut settings = Settings::load_from(dir.path().join("missing").join("s.json"));
        let result = settings.set("key", json!("value"));

        assert!(result.is_err());
        assert_eq!(settings.get("key"), Some(&json!("value")));
    }
}
