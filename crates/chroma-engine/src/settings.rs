//! Persisted engine settings.
//!
//! Exactly three scalar keys survive restarts: whether filtering is
//! active, the active filter's name, and the strength as an integer
//! percent. The engine talks to storage through [`PersistenceAdapter`];
//! hosts plug in whatever store they have.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use chroma_core::strength::{from_percent, to_percent};
use chroma_core::DEFAULT_STRENGTH;
use chroma_filters::catalog::{by_name, FilterId, DEFAULT_FILTER};
use serde::{Deserialize, Serialize};

pub const KEY_ACTIVE: &str = "filter-active";
pub const KEY_NAME: &str = "filter-name";
pub const KEY_STRENGTH: &str = "filter-strength";

/// Scalar settings storage consumed by the engine.
///
/// Load methods return `None` on a fresh store; the engine substitutes
/// defaults rather than failing.
pub trait PersistenceAdapter {
    fn load_bool(&self, key: &str) -> Option<bool>;
    fn load_int(&self, key: &str) -> Option<i64>;
    fn load_string(&self, key: &str) -> Option<String>;

    fn save_bool(&mut self, key: &str, value: bool);
    fn save_int(&mut self, key: &str, value: i64);
    fn save_string(&mut self, key: &str, value: &str);
}

/// The engine's persistent state: enabled flag, active filter, strength.
/// The three fields change atomically together and are serialized as a
/// unit on every mutation (debounced).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineState {
    pub enabled: bool,
    pub active: FilterId,
    pub strength: f32,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            enabled: false,
            active: DEFAULT_FILTER,
            strength: DEFAULT_STRENGTH,
        }
    }
}

impl EngineState {
    /// Reconstruct from persisted values, falling back field by field.
    /// An unrecognized filter name falls back to the default filter;
    /// deserialization never fails.
    pub fn load(settings: &dyn PersistenceAdapter) -> Self {
        let enabled = settings.load_bool(KEY_ACTIVE).unwrap_or(false);
        let active = match settings.load_string(KEY_NAME) {
            Some(name) => match by_name(&name) {
                Some(desc) => desc.id,
                None => {
                    log::warn!(
                        "unknown persisted filter '{name}', falling back to {}",
                        DEFAULT_FILTER.name()
                    );
                    DEFAULT_FILTER
                }
            },
            None => DEFAULT_FILTER,
        };
        let strength = settings
            .load_int(KEY_STRENGTH)
            .map(from_percent)
            .unwrap_or(DEFAULT_STRENGTH);
        Self { enabled, active, strength }
    }

    /// Write all three keys.
    pub fn store(&self, settings: &mut dyn PersistenceAdapter) {
        settings.save_bool(KEY_ACTIVE, self.enabled);
        settings.save_string(KEY_NAME, self.active.name());
        settings.save_int(KEY_STRENGTH, to_percent(self.strength));
    }
}

/// In-memory adapter for hosts without a settings store, and for tests.
#[derive(Debug, Default)]
pub struct MemorySettings {
    bools: HashMap<String, bool>,
    ints: HashMap<String, i64>,
    strings: HashMap<String, String>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistenceAdapter for MemorySettings {
    fn load_bool(&self, key: &str) -> Option<bool> {
        self.bools.get(key).copied()
    }

    fn load_int(&self, key: &str) -> Option<i64> {
        self.ints.get(key).copied()
    }

    fn load_string(&self, key: &str) -> Option<String> {
        self.strings.get(key).cloned()
    }

    fn save_bool(&mut self, key: &str, value: bool) {
        self.bools.insert(key.to_owned(), value);
    }

    fn save_int(&mut self, key: &str, value: i64) {
        self.ints.insert(key.to_owned(), value);
    }

    fn save_string(&mut self, key: &str, value: &str) {
        self.strings.insert(key.to_owned(), value.to_owned());
    }
}

/// On-disk settings document.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsDoc {
    #[serde(default)]
    bools: HashMap<String, bool>,
    #[serde(default)]
    ints: HashMap<String, i64>,
    #[serde(default)]
    strings: HashMap<String, String>,
}

/// File-backed adapter persisting the keys as a JSON document.
///
/// Writes through on every save; the engine's debounce already bounds the
/// write rate. Write failures are logged and swallowed: losing a settings
/// write must not take the filter down.
#[derive(Debug)]
pub struct JsonSettings {
    path: PathBuf,
    doc: SettingsDoc,
}

impl JsonSettings {
    /// Open the document at `path`, starting empty if it does not exist.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let doc = match std::fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => SettingsDoc::default(),
            Err(e) => return Err(e),
        };
        Ok(Self { path, doc })
    }

    fn write_through(&self) {
        let json = match serde_json::to_string_pretty(&self.doc) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("failed to serialize settings: {e}");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, json) {
            log::warn!("failed to write settings file {}: {e}", self.path.display());
        }
    }
}

impl PersistenceAdapter for JsonSettings {
    fn load_bool(&self, key: &str) -> Option<bool> {
        self.doc.bools.get(key).copied()
    }

    fn load_int(&self, key: &str) -> Option<i64> {
        self.doc.ints.get(key).copied()
    }

    fn load_string(&self, key: &str) -> Option<String> {
        self.doc.strings.get(key).cloned()
    }

    fn save_bool(&mut self, key: &str, value: bool) {
        self.doc.bools.insert(key.to_owned(), value);
        self.write_through();
    }

    fn save_int(&mut self, key: &str, value: i64) {
        self.doc.ints.insert(key.to_owned(), value);
        self.write_through();
    }

    fn save_string(&mut self, key: &str, value: &str) {
        self.doc.strings.insert(key.to_owned(), value.to_owned());
        self.write_through();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_store_yields_defaults() {
        let settings = MemorySettings::new();
        let state = EngineState::load(&settings);
        assert_eq!(state, EngineState::default());
        assert!(!state.enabled);
        assert_eq!(state.active, FilterId::DeuterCorrection);
    }

    #[test]
    fn test_round_trip() {
        let mut settings = MemorySettings::new();
        let state = EngineState {
            enabled: true,
            active: FilterId::TritanCorrection,
            strength: 0.8,
        };
        state.store(&mut settings);
        let loaded = EngineState::load(&settings);
        assert_eq!(loaded.enabled, state.enabled);
        assert_eq!(loaded.active, state.active);
        assert!((loaded.strength - state.strength).abs() < 0.01);
    }

    #[test]
    fn test_unknown_name_falls_back() {
        let mut settings = MemorySettings::new();
        settings.save_bool(KEY_ACTIVE, true);
        settings.save_string(KEY_NAME, "NoSuchFilter");
        settings.save_int(KEY_STRENGTH, 50);
        let state = EngineState::load(&settings);
        assert_eq!(state.active, DEFAULT_FILTER);
        assert!(state.enabled);
        assert!((state.strength - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_json_settings_round_trip() {
        let path = std::env::temp_dir().join(format!("chroma-settings-{}.json", std::process::id()));
        let _ = std::fs::remove_file(&path);
        {
            let mut settings = JsonSettings::open(&path).unwrap();
            let state = EngineState {
                enabled: true,
                active: FilterId::ColorInversion,
                strength: 0.25,
            };
            state.store(&mut settings);
        }
        let reloaded = JsonSettings::open(&path).unwrap();
        let state = EngineState::load(&reloaded);
        assert!(state.enabled);
        assert_eq!(state.active, FilterId::ColorInversion);
        assert!((state.strength - 0.25).abs() < 0.01);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_boundary_percent_is_nudged() {
        let mut settings = MemorySettings::new();
        settings.save_int(KEY_STRENGTH, 100);
        assert!(EngineState::load(&settings).strength < 1.0);
        settings.save_int(KEY_STRENGTH, 0);
        assert!(EngineState::load(&settings).strength > 0.0);
    }
}
