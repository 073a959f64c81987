//! Environment snapshots.
//!
//! Credential resolution never reads `std::env` directly; it takes an
//! [`EnvSnapshot`] captured by the caller. The snapshot can come from the
//! process environment, from a `.publish.env` file (shell-style
//! `KEY=value` format holding publishing secrets), or from test fixtures.

use std::collections::BTreeMap;
use std::path::Path;

use jsoncmap_util::errors::JsoncmapError;

/// An immutable point-in-time view of a key-value environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// An empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Load a `.publish.env` file (shell-style `KEY=value` format).
    ///
    /// Blank lines and `#` comments are skipped; keys and values are
    /// trimmed. A missing file yields an empty snapshot, since secrets
    /// files are optional by design.
    pub fn from_env_file(path: &Path) -> miette::Result<Self> {
        let mut vars = BTreeMap::new();
        if !path.is_file() {
            return Ok(Self { vars });
        }
        let content = std::fs::read_to_string(path).map_err(JsoncmapError::Io)?;
        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = trimmed.split_once('=') {
                vars.insert(key.trim().to_string(), value.trim().to_string());
            }
        }
        Ok(Self { vars })
    }

    /// A new snapshot where entries from `overrides` win over `self`.
    pub fn merged(&self, overrides: &EnvSnapshot) -> Self {
        let mut vars = self.vars.clone();
        for (key, value) in &overrides.vars {
            vars.insert(key.clone(), value.clone());
        }
        Self { vars }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Raw lookup; an empty value is returned as-is.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Lookup where an empty string counts the same as an absent key.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
