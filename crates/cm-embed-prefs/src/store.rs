//! Key/value preference storage with defaults.

use crate::error::PreferenceError;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// A stored preference value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PreferenceValue {
    /// A boolean flag.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A string.
    Str(String),
}

impl PreferenceValue {
    fn as_string(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Str(s) => s.clone(),
        }
    }

    fn as_bool(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Str(s) => s.trim().eq_ignore_ascii_case("true"),
        }
    }

    fn as_int(&self) -> i64 {
        match self {
            Self::Bool(b) => i64::from(*b),
            Self::Int(i) => *i,
            Self::Str(s) => s.trim().parse().unwrap_or(0),
        }
    }
}

impl From<bool> for PreferenceValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PreferenceValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for PreferenceValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<&str> for PreferenceValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for PreferenceValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// A key/value preference store with per-key defaults.
///
/// Getters fall back to the key's default, then to the type's zero value (`""`, `false`, `0`).
/// Use [`contains`](PreferenceStore::contains) to distinguish "unset" from a zero value.
pub trait PreferenceStore {
    /// The explicit value or default for `key`, if either exists.
    fn lookup(&self, key: &str) -> Option<PreferenceValue>;

    /// Set the default for `key`.
    fn set_default(&mut self, key: &str, value: PreferenceValue);

    /// Set an explicit value for `key`.
    fn set_value(&mut self, key: &str, value: PreferenceValue);

    /// Returns `true` if `key` has a value or a default.
    fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// String value of `key` (`""` when unset).
    fn get_string(&self, key: &str) -> String {
        self.lookup(key).map(|v| v.as_string()).unwrap_or_default()
    }

    /// Boolean value of `key` (`false` when unset).
    fn get_bool(&self, key: &str) -> bool {
        self.lookup(key).is_some_and(|v| v.as_bool())
    }

    /// Integer value of `key` (`0` when unset or not a number).
    fn get_int(&self, key: &str) -> i64 {
        self.lookup(key).map(|v| v.as_int()).unwrap_or(0)
    }
}

/// An in-memory [`PreferenceStore`], optionally loaded from a JSON document.
///
/// The JSON form is a flat object of `key → string | boolean | integer`. Only explicit values
/// are persisted; defaults are registered by code at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, PreferenceValue>,
    defaults: HashMap<String, PreferenceValue>,
}

impl MemoryPreferenceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse explicit values from a JSON object.
    pub fn from_json_str(json: &str) -> Result<Self, PreferenceError> {
        let mut store = Self::new();
        store.merge_json_str(json)?;
        Ok(store)
    }

    /// Load explicit values from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PreferenceError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Overlay explicit values from a JSON object onto this store.
    pub fn merge_json_str(&mut self, json: &str) -> Result<(), PreferenceError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let serde_json::Value::Object(map) = value else {
            return Err(PreferenceError::NotAnObject);
        };

        for (key, value) in map {
            let value = match value {
                serde_json::Value::Bool(b) => PreferenceValue::Bool(b),
                serde_json::Value::String(s) => PreferenceValue::Str(s),
                serde_json::Value::Number(n) => match n.as_i64() {
                    Some(i) => PreferenceValue::Int(i),
                    None => {
                        return Err(PreferenceError::InvalidValue {
                            key,
                            expected: "an integer",
                        });
                    }
                },
                _ => {
                    return Err(PreferenceError::InvalidValue {
                        key,
                        expected: "a string, boolean or integer",
                    });
                }
            };
            self.values.insert(key, value);
        }
        Ok(())
    }

    /// Serialize explicit values as a JSON object (keys sorted).
    pub fn to_json_string(&self) -> Result<String, PreferenceError> {
        let sorted: BTreeMap<&String, &PreferenceValue> = self.values.iter().collect();
        Ok(serde_json::to_string_pretty(&sorted)?)
    }

    /// Write explicit values to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PreferenceError> {
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    /// Remove the explicit value of `key`, falling back to its default.
    pub fn reset(&mut self, key: &str) -> Option<PreferenceValue> {
        self.values.remove(key)
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn lookup(&self, key: &str) -> Option<PreferenceValue> {
        self.values
            .get(key)
            .or_else(|| self.defaults.get(key))
            .cloned()
    }

    fn set_default(&mut self, key: &str, value: PreferenceValue) {
        self.defaults.insert(key.to_string(), value);
    }

    fn set_value(&mut self, key: &str, value: PreferenceValue) {
        self.values.insert(key.to_string(), value);
    }
}
