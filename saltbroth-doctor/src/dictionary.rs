//! Locale dictionaries: nested JSON translation tables.
//!
//! LLM `features` entries are translation keys in dot notation (e.g.
//! `llm.feature.writing`) that resolve against `dictionaries/<locale>.json`.
//! The rendering layer does the lookup at display time; the doctor does it
//! here to catch keys that resolve nowhere.

use crate::{DoctorError, Result};
use serde_json::Value;
use std::path::Path;

/// A parsed locale dictionary.
#[derive(Debug, Clone)]
pub struct Dictionary {
    root: Value,
}

impl Dictionary {
    /// Load a dictionary from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            DoctorError::DictionaryRead {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let root = serde_json::from_str(&content).map_err(|source| {
            DoctorError::DictionaryParse {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(Self { root })
    }

    /// Build a dictionary from an already-parsed JSON value.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Resolve a dot-notation key to its translated string.
    ///
    /// Returns `None` when any segment is missing or the terminal value is
    /// not a string.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let mut current = &self.root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        current.as_str()
    }

    /// Whether a key resolves to a translated string.
    pub fn contains_key(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }
}
