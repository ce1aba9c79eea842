//! Bundler hook contract and the icon replacement plugin.
//!
//! The host drives a [`Plugin`] through one build:
//!
//! ```text
//! config_resolved (once, or again on watch restart)
//!   -> resolve_id / load / transform (any number, any order, any thread)
//! ```
//!
//! All state is written in `config_resolved`, which takes `&mut self`. The
//! read hooks take `&self`, so a host can share the plugin across worker
//! threads once configuration is done.

use std::path::Path;

use crate::config::{PluginOptions, ResolvedConfig, PLUGIN_NAME, TARGET_PACKAGE};
use crate::replacement::ReplacementTable;
use crate::rewrite::rewrite_imports;
use crate::synth::{synthesize, EMPTY_MODULE};
use crate::virtual_id::{icon_name, is_virtual};

/// When the host should run a plugin relative to its core plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Enforce {
    Pre,
    #[default]
    Normal,
    Post,
}

/// Output of a transform hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutput {
    pub code: String,
    /// Source map, if the plugin produced one.
    pub map: Option<String>,
}

/// Hooks a bundler calls on a plugin. Every hook defaults to "not handled".
pub trait Plugin {
    fn name(&self) -> &str;

    fn enforce(&self) -> Enforce {
        Enforce::Normal
    }

    fn config_resolved(&mut self, _config: &ResolvedConfig) {}

    /// Claim a module id. `None` lets other resolvers try.
    fn resolve_id(&self, _id: &str) -> Option<String> {
        None
    }

    /// Source text for a claimed id. `None` means not handled.
    fn load(&self, _id: &str) -> Option<String> {
        None
    }

    /// Rewritten source. `None` means unchanged.
    fn transform(&self, _code: &str, _id: &str) -> Option<TransformOutput> {
        None
    }
}

/// Lifecycle position of an [`IconReplacePlugin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// `config_resolved` has not run yet; every hook is inert.
    Uninitialized,
    /// Table loaded; hooks are served.
    Active,
}

/// Replaces Element Plus icons with components built from custom path data.
#[derive(Debug)]
pub struct IconReplacePlugin {
    options: PluginOptions,
    table: ReplacementTable,
    state: State,
}

impl IconReplacePlugin {
    pub fn new(options: PluginOptions) -> Self {
        Self {
            options,
            table: ReplacementTable::default(),
            state: State::Uninitialized,
        }
    }

    pub fn options(&self) -> &PluginOptions {
        &self.options
    }

    pub fn table(&self) -> &ReplacementTable {
        &self.table
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Build the table for this build. Inline entries win over the config file.
    fn load_table(&self, root: &Path) -> ReplacementTable {
        if let Some(inline) = self.options.inline_replacements() {
            if self.options.config_path.is_some() {
                tracing::debug!("inline replacements supplied, ignoring configPath");
            }
            return ReplacementTable::from_entries(inline.iter().cloned());
        }

        ReplacementTable::load_or_empty(
            root,
            self.options.config_path.as_deref(),
            self.options.log,
        )
    }

    fn report_table(&self) {
        if !self.options.log {
            return;
        }

        if self.table.is_empty() {
            tracing::warn!(
                "[{}] No icon replacements provided. Plugin will do nothing.",
                PLUGIN_NAME
            );
            return;
        }

        tracing::info!(
            "[{}] Loaded {} icon replacements:",
            PLUGIN_NAME,
            self.table.len()
        );
        for name in self.table.names() {
            tracing::info!("  - {}", name);
        }
    }
}

impl Plugin for IconReplacePlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn enforce(&self) -> Enforce {
        Enforce::Pre
    }

    fn config_resolved(&mut self, config: &ResolvedConfig) {
        // A restart replaces the table wholesale.
        self.table = self.load_table(config.root());
        self.state = State::Active;
        self.report_table();
    }

    fn resolve_id(&self, id: &str) -> Option<String> {
        is_virtual(id).then(|| id.to_string())
    }

    fn load(&self, id: &str) -> Option<String> {
        let name = icon_name(id)?;

        match self.table.get(name) {
            Some(entry) => Some(synthesize(name, &entry.path_data)),
            None => {
                tracing::debug!("no replacement for {}, serving empty module", id);
                Some(EMPTY_MODULE.to_string())
            }
        }
    }

    fn transform(&self, code: &str, id: &str) -> Option<TransformOutput> {
        if code.is_empty() || id.is_empty() || self.table.is_empty() {
            return None;
        }
        if !code.contains(TARGET_PACKAGE) {
            return None;
        }

        let rewritten = rewrite_imports(code, &self.table)?;
        tracing::debug!(
            "{}: redirected {} icon(s) across {} import statement(s)",
            id,
            rewritten.redirected,
            rewritten.statements
        );

        Some(TransformOutput {
            code: rewritten.code,
            map: None,
        })
    }
}
