//! Environment variable snapshot
//!
//! Plugin configuration is resolved against an immutable snapshot of the
//! process environment taken once at startup. Tests inject synthetic
//! snapshots instead of mutating the global environment.

use crate::{Error, Result};
use std::collections::BTreeMap;

/// Immutable snapshot of environment key/value pairs
///
/// Lookups against the same snapshot always yield the same values, so a
/// configuration resolved from it is deterministic for the process lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSource {
    vars: BTreeMap<String, String>,
}

impl EnvSource {
    /// Capture the current process environment
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Build a snapshot from explicit key/value pairs
    pub fn from_iter<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up a variable; absent means the caller gets no value, not an error
    pub fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    /// Look up a variable with a literal fallback
    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.vars
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    /// Look up a numeric variable with a fallback
    ///
    /// A variable that is present but not parseable is a configuration
    /// error rather than a silent fallback.
    pub fn get_u16_or(&self, key: &str, default: u16) -> Result<u16> {
        match self.vars.get(key) {
            Some(raw) => raw
                .parse()
                .map_err(|e| Error::config(key, &format!("invalid number '{}': {}", raw, e))),
            None => Ok(default),
        }
    }

    /// Whether the snapshot contains a value for `key`
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }
}
