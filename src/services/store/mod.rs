//! Key-value store abstraction shared by the settings and session adapters.
//!
//! Both the widget settings and the work-session snapshot live in flat
//! key→scalar maps owned by the host platform. The controller only sees the
//! [`KeyValueStore`] trait, so hosts inject their own backend and tests use
//! [`MemoryStore`].

mod memory;
mod sqlite;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Namespace holding the widget's own settings
pub const SETTINGS_NAMESPACE: &str = "WidgetPrefs";
/// Namespace the main application publishes session data into
pub const SESSION_NAMESPACE: &str = "home_widget_prefs";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum StoreValue {
    Str(String),
    Int(i64),
    Bool(bool),
    Float(f64),
}

impl StoreValue {
    pub fn kind(&self) -> &'static str {
        match self {
            StoreValue::Str(_) => "string",
            StoreValue::Int(_) => "int",
            StoreValue::Bool(_) => "bool",
            StoreValue::Float(_) => "float",
        }
    }

    /// Text form of a scalar, for values that are only ever displayed
    pub fn to_display_string(&self) -> String {
        match self {
            StoreValue::Str(s) => s.clone(),
            StoreValue::Int(i) => i.to_string(),
            StoreValue::Bool(b) => b.to_string(),
            StoreValue::Float(f) => f.to_string(),
        }
    }
}

impl From<&str> for StoreValue {
    fn from(value: &str) -> Self {
        StoreValue::Str(value.to_string())
    }
}

impl From<String> for StoreValue {
    fn from(value: String) -> Self {
        StoreValue::Str(value)
    }
}

impl From<i64> for StoreValue {
    fn from(value: i64) -> Self {
        StoreValue::Int(value)
    }
}

impl From<bool> for StoreValue {
    fn from(value: bool) -> Self {
        StoreValue::Bool(value)
    }
}

impl From<f64> for StoreValue {
    fn from(value: f64) -> Self {
        StoreValue::Float(value)
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend failure: {0}")]
    Backend(#[from] rusqlite::Error),
    #[error("value for '{key}' is {found}, expected {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("failed to encode stored value: {0}")]
    Encoding(#[from] serde_json::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Flat key→scalar map with immediate visibility and last-write-wins.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<StoreValue>, StoreError>;
    fn put(&self, key: &str, value: StoreValue) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Typed, infallible accessors over any [`KeyValueStore`].
///
/// Missing keys yield the supplied default. Backend failures and type
/// mismatches are logged and also yield the default; writes report success
/// as a bool after logging any failure.
pub trait KeyValueStoreExt: KeyValueStore {
    fn read_int(&self, key: &str, default: i64) -> i64 {
        match self.get(key) {
            Ok(Some(StoreValue::Int(value))) => value,
            Ok(Some(other)) => default_on_mismatch(key, "int", &other, default),
            Ok(None) => default,
            Err(err) => default_on_error(key, err, default),
        }
    }

    fn read_opt_int(&self, key: &str) -> Option<i64> {
        match self.get(key) {
            Ok(Some(StoreValue::Int(value))) => Some(value),
            Ok(Some(other)) => default_on_mismatch(key, "int", &other, None),
            Ok(None) => None,
            Err(err) => default_on_error(key, err, None),
        }
    }

    fn read_bool(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Ok(Some(StoreValue::Bool(value))) => value,
            Ok(Some(other)) => default_on_mismatch(key, "bool", &other, default),
            Ok(None) => default,
            Err(err) => default_on_error(key, err, default),
        }
    }

    fn read_opt_string(&self, key: &str) -> Option<String> {
        match self.get(key) {
            Ok(Some(StoreValue::Str(value))) => Some(value),
            Ok(Some(other)) => default_on_mismatch(key, "string", &other, None),
            Ok(None) => None,
            Err(err) => default_on_error(key, err, None),
        }
    }

    fn read_string(&self, key: &str, default: &str) -> String {
        self.read_opt_string(key)
            .unwrap_or_else(|| default.to_string())
    }

    /// Any scalar rendered as text; for values that are only displayed
    fn read_display_text(&self, key: &str, default: &str) -> String {
        match self.get(key) {
            Ok(Some(value)) => value.to_display_string(),
            Ok(None) => default.to_string(),
            Err(err) => default_on_error(key, err, default.to_string()),
        }
    }

    fn write(&self, key: &str, value: impl Into<StoreValue>) -> bool {
        match self.put(key, value.into()) {
            Ok(()) => true,
            Err(err) => {
                log::error!("Failed to write '{}': {}", key, err);
                false
            }
        }
    }

    fn clear(&self, key: &str) -> bool {
        match self.remove(key) {
            Ok(()) => true,
            Err(err) => {
                log::error!("Failed to remove '{}': {}", key, err);
                false
            }
        }
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStoreExt for T {}

fn default_on_mismatch<T>(key: &str, expected: &'static str, found: &StoreValue, default: T) -> T {
    let err = StoreError::TypeMismatch {
        key: key.to_string(),
        expected,
        found: found.kind(),
    };
    log::warn!("{}; using default", err);
    default
}

fn default_on_error<T>(key: &str, err: StoreError, default: T) -> T {
    log::error!("Failed to read '{}': {}; using default", key, err);
    default
}
