//! Environment variable stores.
//!
//! The loader and the shell serializer read and write variables through the
//! `Environment` trait so they can run against the real process or a map.

use std::collections::BTreeMap;

/// A mutable key/value view of environment variables.
pub trait Environment {
    /// Current value of `key`, or `None` if unset or not valid Unicode.
    fn get(&self, key: &str) -> Option<String>;

    /// Set `key` to `value`.
    fn set(&mut self, key: &str, value: &str);

    /// Whether `key` holds a non-empty value.
    ///
    /// Empty values count as unset: they never block a fetched value.
    fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_empty())
    }
}

/// The environment of the current process.
///
/// Writes are visible to the whole process and to children spawned later.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        std::env::set_var(key, value);
    }

    /// Checks the raw value, so a non-Unicode value still counts as set.
    fn is_set(&self, key: &str) -> bool {
        std::env::var_os(key).is_some_and(|v| !v.is_empty())
    }
}

/// An in-memory environment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: BTreeMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from pairs, e.g. `MemoryEnv::from_pairs([("ENVKEY", "...")])`.
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

    /// All variables in name order
    pub fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }
}

impl Environment for MemoryEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
    }
}
