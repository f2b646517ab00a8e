//! Persisted session state over a key-value store.
//!
//! The shell never owns durability: front ends hand it a [`KeyValueStore`]
//! (browser storage, a JSON file, memory) and the session loads its history
//! and settings from it once, then writes back on every change. Values are
//! JSON encoded under the keys in [`store_keys`].

use std::collections::HashMap;

use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::store_keys;
use crate::error::StoreError;
use crate::models::{Background, SessionSettings, Theme};

/// String key-value storage backing the session.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store, for tests and ephemeral sessions.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// Typed Access
// =============================================================================

/// Read and decode a value; `None` if missing, unreadable or malformed.
fn load<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(raw) => raw?,
        Err(e) => {
            warn!("failed to read '{}': {}", key, e);
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("ignoring malformed value for '{}': {}", key, e);
            None
        }
    }
}

/// Encode and write a value, logging failures.
fn save<T: Serialize + ?Sized>(store: &mut dyn KeyValueStore, key: &str, value: &T) {
    let result = serde_json::to_string(value)
        .map_err(StoreError::from)
        .and_then(|json| store.set(key, &json));

    if let Err(e) = result {
        warn!("failed to persist '{}': {}", key, e);
    }
}

/// Load the command history; empty when absent or malformed.
pub fn load_history(store: &dyn KeyValueStore) -> Vec<String> {
    load(store, store_keys::HISTORY).unwrap_or_default()
}

pub fn save_history(store: &mut dyn KeyValueStore, history: &[String]) {
    save(store, store_keys::HISTORY, history);
}

/// Load settings, falling back per field to the defaults.
///
/// A missing background is written back so the store always carries one.
pub fn load_settings(store: &mut dyn KeyValueStore) -> SessionSettings {
    let defaults = SessionSettings::default();

    let background = match load::<Background>(store, store_keys::BACKGROUND) {
        Some(bg) => bg,
        None => {
            save(store, store_keys::BACKGROUND, &defaults.background);
            defaults.background
        }
    };

    SessionSettings {
        typewriter: load(store, store_keys::TYPEWRITER).unwrap_or(defaults.typewriter),
        banner: load(store, store_keys::BANNER).unwrap_or(defaults.banner),
        theme: load::<Theme>(store, store_keys::THEME).unwrap_or(defaults.theme),
        background,
    }
}

pub fn save_typewriter(store: &mut dyn KeyValueStore, enabled: bool) {
    save(store, store_keys::TYPEWRITER, &enabled);
}

pub fn save_banner(store: &mut dyn KeyValueStore, enabled: bool) {
    save(store, store_keys::BANNER, &enabled);
}

pub fn save_theme(store: &mut dyn KeyValueStore, theme: Theme) {
    save(store, store_keys::THEME, &theme);
}

pub fn save_background(store: &mut dyn KeyValueStore, background: Background) {
    save(store, store_keys::BACKGROUND, &background);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store whose writes always fail.
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.0.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("read-only")))
        }
    }

    #[test]
    fn test_defaults_on_empty_store() {
        let mut store = MemoryStore::new();
        assert!(load_history(&store).is_empty());
        assert_eq!(load_settings(&mut store), SessionSettings::default());
    }

    #[test]
    fn test_missing_background_is_written_back() {
        let mut store = MemoryStore::new();
        load_settings(&mut store);
        assert_eq!(
            store.get(store_keys::BACKGROUND).unwrap(),
            Some("\"waves\"".to_string())
        );
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let mut store = MemoryStore::new();
        store.set(store_keys::HISTORY, "not json").unwrap();
        store.set(store_keys::TYPEWRITER, "\"yes\"").unwrap();
        store.set(store_keys::THEME, "\"sepia\"").unwrap();
        store.set(store_keys::BANNER, "false").unwrap();

        assert!(load_history(&store).is_empty());
        let settings = load_settings(&mut store);
        assert!(!settings.typewriter);
        assert_eq!(settings.theme, Theme::Dark);
        assert!(!settings.banner);
    }

    #[test]
    fn test_round_trip_values() {
        let mut store = MemoryStore::new();
        let history = vec!["ls".to_string(), "".to_string(), "ls".to_string()];
        save_history(&mut store, &history);
        save_typewriter(&mut store, true);
        save_theme(&mut store, Theme::Matrix);
        save_background(&mut store, Background::Off);

        assert_eq!(load_history(&store), history);
        assert_eq!(
            store.get(store_keys::HISTORY).unwrap(),
            Some("[\"ls\",\"\",\"ls\"]".to_string())
        );
        let settings = load_settings(&mut store);
        assert!(settings.typewriter);
        assert_eq!(settings.theme, Theme::Matrix);
        assert_eq!(settings.background, Background::Off);
    }

    #[test]
    fn test_write_failures_are_not_fatal() {
        let mut store = ReadOnlyStore(MemoryStore::new());
        save_history(&mut store, &["ls".to_string()]);
        assert_eq!(load_settings(&mut store), SessionSettings::default());
    }
}
