//! The persisted dark-mode preference.
//!
//! The preference is a small versioned object stored as JSON under [`DARK_MODE_KEY`].
//! Two older raw encodings (`"enabled"`/`"disabled"` and `"true"`/`"false"`) may still be
//! found under the same key; they are read as legacy values and rewritten in the current
//! encoding on the next save.

use std::collections::HashMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const DARK_MODE_KEY: &str = "darkMode";
pub const PREFERENCES_VERSION: u32 = 1;

// the storage seam
//
// the webapp implements this over window.localStorage; tests use MemoryStore
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>>;

    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.items.insert(key.to_owned(), value.to_owned());
        store
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_owned(), value.to_owned());
        self.writes += 1;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    Missing,
    Current,
    Legacy,
    Invalid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub version: u32,
    pub dark_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            version: PREFERENCES_VERSION,
            dark_mode: false,
        }
    }
}

impl Preferences {
    pub fn with_dark_mode(dark_mode: bool) -> Self {
        Preferences {
            dark_mode,
            ..Self::default()
        }
    }

    pub fn decode(raw: Option<&str>) -> (Self, Source) {
        let Some(raw) = raw else {
            return (Self::default(), Source::Missing);
        };

        match raw.trim() {
            "enabled" | "true" => return (Self::with_dark_mode(true), Source::Legacy),
            "disabled" | "false" => return (Self::with_dark_mode(false), Source::Legacy),
            _ => {}
        }

        match serde_json::from_str::<Preferences>(raw) {
            Ok(prefs) if prefs.version == PREFERENCES_VERSION => (prefs, Source::Current),
            Ok(prefs) => {
                warn!(version = prefs.version, "unknown preferences version, using defaults");
                (Self::default(), Source::Invalid)
            }
            Err(err) => {
                warn!(%err, "unreadable preferences, using defaults");
                (Self::default(), Source::Invalid)
            }
        }
    }

    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    // storage failures fall back to defaults; the page should still render
    pub fn load(store: &impl PreferenceStore) -> Self {
        let raw = match store.read(DARK_MODE_KEY) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(%err, "failed to read preferences");
                None
            }
        };

        let (prefs, source) = Self::decode(raw.as_deref());
        debug!(?source, dark_mode = prefs.dark_mode, "loaded preferences");
        prefs
    }

    pub fn save(&self, store: &mut impl PreferenceStore) -> Result<()> {
        store.write(DARK_MODE_KEY, &self.encode()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_defaults_to_light() {
        let (prefs, source) = Preferences::decode(None);
        assert!(!prefs.dark_mode);
        assert_eq!(source, Source::Missing);
    }

    #[test]
    fn both_legacy_encodings_are_understood() {
        for (raw, dark) in [("enabled", true), ("true", true), ("disabled", false), ("false", false)] {
            let (prefs, source) = Preferences::decode(Some(raw));
            assert_eq!(prefs.dark_mode, dark, "{raw}");
            assert_eq!(source, Source::Legacy);
        }
    }

    #[test]
    fn current_encoding_round_trips() {
        let prefs = Preferences::with_dark_mode(true);
        let raw = prefs.encode().expect("serializes");

        assert_eq!(Preferences::decode(Some(&raw)), (prefs, Source::Current));
    }

    #[test]
    fn garbage_and_future_versions_fall_back() {
        assert_eq!(Preferences::decode(Some("{oops")).1, Source::Invalid);
        assert_eq!(
            Preferences::decode(Some(r#"{"version":99,"dark_mode":true}"#)),
            (Preferences::default(), Source::Invalid)
        );
    }

    #[test]
    fn saving_legacy_value_migrates_it() {
        let mut store = MemoryStore::with(DARK_MODE_KEY, "enabled");
        let prefs = Preferences::load(&store);
        assert!(prefs.dark_mode);

        prefs.save(&mut store).expect("memory store");
        assert_eq!(
            store.get(DARK_MODE_KEY),
            Some(r#"{"version":1,"dark_mode":true}"#)
        );
    }
}
