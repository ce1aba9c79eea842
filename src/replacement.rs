//! Replacement table loading.
//!
//! The configuration file is a JSON array of `{ "name": ..., "d": ... }`
//! objects. Elements are checked structurally: anything without a non-empty
//! `name` and `d` string is skipped, the rest become [`ReplacementEntry`]
//! values in file order.
//!
//! A missing file is not an error. A broken file is, but callers on the
//! build path go through [`ReplacementTable::load_or_empty`], which logs the
//! failure and carries on with an empty table so the user's build never
//! aborts over icon configuration.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::PLUGIN_NAME;

/// One icon substitution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReplacementEntry {
    /// Exported identifier as it appears in the icon package.
    #[serde(default)]
    pub name: String,
    /// Raw SVG path geometry.
    #[serde(rename = "d", default)]
    pub path_data: String,
}

impl ReplacementEntry {
    pub fn new(name: impl Into<String>, path_data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path_data: path_data.into(),
        }
    }

    /// Check one element of the configuration array.
    pub fn from_value(value: &Value) -> Result<Self, InvalidEntry> {
        let object = value.as_object().ok_or(InvalidEntry::NotAnObject)?;

        let name = non_empty_str(object.get("name")).ok_or(InvalidEntry::MissingName)?;
        let path_data = non_empty_str(object.get("d")).ok_or(InvalidEntry::MissingPathData)?;

        Ok(Self::new(name, path_data))
    }

    fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.path_data.is_empty()
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Why a configuration element was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidEntry {
    #[error("element is not an object")]
    NotAnObject,
    #[error("missing or empty `name`")]
    MissingName,
    #[error("missing or empty `d`")]
    MissingPathData,
}

/// Failure to read or parse the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid JSON: {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}: config must be an array of {{ name, d }} objects", .path.display())]
    NotAnArray { path: PathBuf },
}

impl ConfigError {
    /// True for errors caused by the file's content rather than by reading it.
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::InvalidJson { .. } | Self::NotAnArray { .. })
    }
}

/// Icon name to path data, in configuration order.
///
/// Immutable once built. When a name appears more than once, lookups return
/// the first entry.
#[derive(Debug, Clone, Default)]
pub struct ReplacementTable {
    entries: Vec<ReplacementEntry>,
    index: HashMap<String, usize>,
}

impl ReplacementTable {
    /// Build a table from already-typed entries, dropping incomplete ones.
    pub fn from_entries(entries: impl IntoIterator<Item = ReplacementEntry>) -> Self {
        let mut table = Self::default();
        for entry in entries {
            if entry.is_complete() {
                table.push(entry);
            }
        }
        table
    }

    fn push(&mut self, entry: ReplacementEntry) {
        self.index
            .entry(entry.name.clone())
            .or_insert(self.entries.len());
        self.entries.push(entry);
    }

    /// Build a table from a parsed JSON document.
    ///
    /// Returns the table and the number of skipped elements, or `None` if the
    /// top-level value is not an array.
    pub fn from_json(value: &Value) -> Option<(Self, usize)> {
        let items = value.as_array()?;
        let mut table = Self::default();
        let mut skipped = 0;

        for item in items {
            match ReplacementEntry::from_value(item) {
                Ok(entry) => table.push(entry),
                Err(reason) => {
                    tracing::debug!("skipping config element: {}", reason);
                    skipped += 1;
                }
            }
        }

        Some((table, skipped))
    }

    /// Load the table from `config_path`, resolved against `root_dir`.
    ///
    /// No path, or a path that does not exist, yields an empty table.
    pub fn load(root_dir: &Path, config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(config_path) = config_path else {
            return Ok(Self::default());
        };

        let path = resolve_config_path(root_dir, config_path);
        let exists = path.try_exists().map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        if !exists {
            tracing::debug!("config file {} not found", path.display());
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let json: Value = serde_json::from_str(&raw).map_err(|source| ConfigError::InvalidJson {
            path: path.clone(),
            source,
        })?;

        let (table, skipped) =
            Self::from_json(&json).ok_or_else(|| ConfigError::NotAnArray { path: path.clone() })?;

        if skipped > 0 {
            tracing::debug!(
                "{}: skipped {} incomplete element(s)",
                path.display(),
                skipped
            );
        }

        Ok(table)
    }

    /// Like [`load`](Self::load), but any error is logged and becomes an empty table.
    pub fn load_or_empty(root_dir: &Path, config_path: Option<&Path>, log: bool) -> Self {
        match Self::load(root_dir, config_path) {
            Ok(table) => table,
            Err(e) => {
                if log {
                    tracing::error!("[{}] Failed to load config: {}", PLUGIN_NAME, e);
                }
                Self::default()
            }
        }
    }

    /// Look up path data by exact icon name.
    pub fn get(&self, name: &str) -> Option<&ReplacementEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReplacementEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }
}

fn resolve_config_path(root_dir: &Path, config_path: &Path) -> PathBuf {
    if config_path.is_absolute() {
        config_path.to_path_buf()
    } else {
        root_dir.join(config_path)
    }
}
