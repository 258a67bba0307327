//! ConfigMap type.
//!
//! The decrypted variables of one bundle.

use std::collections::BTreeMap;

use crate::core::validation::{validate_key, validate_value};
use crate::error::LoadError;

/// Decrypted variables of one bundle, ordered by name.
///
/// Iteration is ascending byte order of the names, so anything rendered from
/// a `ConfigMap` is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMap {
    vars: BTreeMap<String, String>,
}

impl ConfigMap {
    /// Parse the JSON text returned by a fetch backend.
    ///
    /// The text must be a single object whose values are all strings, and
    /// every entry must pass validation. Nothing is returned on failure.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::MalformedResponse` for invalid JSON, non-string
    /// values, or entries that fail validation.
    pub fn parse(text: &str) -> Result<Self, LoadError> {
        let vars: BTreeMap<String, String> = serde_json::from_str(text)
            .map_err(|e| LoadError::MalformedResponse(e.to_string()))?;

        for (key, value) in &vars {
            validate_key(key).map_err(|e| LoadError::MalformedResponse(e.to_string()))?;
            validate_value(key, value)
                .map_err(|e| LoadError::MalformedResponse(e.to_string()))?;
        }

        Ok(Self { vars })
    }

    /// Create from raw pairs without validation.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Get a value by name
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Entries in ascending name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Names in ascending order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
