//! Element Plus icon replacement for bundler pipelines.
//!
//! Rewrites `import { .. } from '@element-plus/icons-vue'` so that selected
//! icons come from generated virtual modules built on custom SVG path data,
//! while every other icon keeps coming from the package.
//!
//! - `replacement` - Loads the icon name to path data table
//! - `synth` - Generates the source of a replacement component
//! - `rewrite` - Splits matching import statements
//! - `plugin` - The hook contract and the plugin that ties it together

pub mod config;
pub mod plugin;
pub mod replacement;
pub mod rewrite;
pub mod synth;
pub mod virtual_id;

pub use config::{PluginOptions, ResolvedConfig};
pub use plugin::{Enforce, IconReplacePlugin, Plugin, TransformOutput};
pub use replacement::{ConfigError, ReplacementEntry, ReplacementTable};
