//! Plugin options and the host's resolved configuration.
//!
//! [`PluginOptions`] is the public configuration surface handed to the
//! plugin by the embedding application. It deserializes from the same
//! camelCase JSON shape the JavaScript side uses:
//!
//! ```json
//! { "log": true, "configPath": "customEpIcon.json" }
//! ```
//!
//! # Example
//!
//! ```rust
//! use ep_icons_replace::config::PluginOptions;
//!
//! let options = PluginOptions::default().with_config_path("customEpIcon.json");
//! assert!(options.log);
//! assert!(options.enable);
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::replacement::ReplacementEntry;

/// Name the plugin reports to the host and prefixes its log lines with.
pub const PLUGIN_NAME: &str = "vite-plugin-element-plus-icons-svg-replace";

/// The only package whose named imports are redirected.
pub const TARGET_PACKAGE: &str = "@element-plus/icons-vue";

/// Prefix of every virtual module identifier the plugin claims.
pub const VIRTUAL_PREFIX: &str = "virtual:ep-icons-replace/";

/// Options supplied by the embedding application.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PluginOptions {
    /// Reserved for future gating. Accepted but does not alter behavior.
    pub enable: bool,
    /// Emit the informational and advisory lines about the loaded table.
    pub log: bool,
    /// Inline replacement entries. When non-empty, file loading is skipped.
    pub replacements: Option<Vec<ReplacementEntry>>,
    /// JSON configuration file, absolute or relative to the project root.
    pub config_path: Option<PathBuf>,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            enable: true,
            log: true,
            replacements: None,
            config_path: None,
        }
    }
}

impl PluginOptions {
    /// Parse options from a JSON document.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn with_replacements(mut self, entries: Vec<ReplacementEntry>) -> Self {
        self.replacements = Some(entries);
        self
    }

    pub fn with_log(mut self, log: bool) -> Self {
        self.log = log;
        self
    }

    /// Inline entries, if any were supplied and the list is non-empty.
    pub fn inline_replacements(&self) -> Option<&[ReplacementEntry]> {
        self.replacements
            .as_deref()
            .filter(|entries| !entries.is_empty())
    }
}

/// The subset of the host's resolved configuration the plugin reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Effective project root. Relative config paths resolve against it.
    pub root: PathBuf,
}

impl ResolvedConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Use the process working directory, as the host does when it reports no root.
    pub fn from_cwd() -> Self {
        let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
