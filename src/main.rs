//! Element Plus icon replacement CLI
//!
//! Runs the plugin hooks outside a bundler, to check a configuration or see
//! what a source file turns into.
//!
//! # Usage
//!
//! ```bash
//! # Show which icons the config replaces
//! ep-icons-replace --config customEpIcon.json status
//!
//! # Rewrite the icon imports of a file
//! ep-icons-replace --config customEpIcon.json transform src/App.vue
//!
//! # Print the generated module for one icon
//! ep-icons-replace --config customEpIcon.json load virtual:ep-icons-replace/ArrowRight
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use ep_icons_replace::{IconReplacePlugin, Plugin, PluginOptions, ResolvedConfig};

#[derive(Parser)]
#[command(name = "ep-icons-replace")]
#[command(author, version, about = "Element Plus icon replacement", long_about = None)]
struct Cli {
    /// Project root (default: current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// JSON replacement config, relative to the root
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON plugin options file ({ "log", "configPath", "replacements" })
    #[arg(long, global = true)]
    options: Option<PathBuf>,

    /// Suppress the plugin's own log lines
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite icon imports in source files and print the result
    Transform {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Resolve and load a virtual module id
    Load { id: String },

    /// Show the loaded replacement table
    Status,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let plugin = build_plugin(&cli)?;

    match cli.command {
        Commands::Transform { files } => cmd_transform(&plugin, &files),
        Commands::Load { id } => cmd_load(&plugin, &id),
        Commands::Status => cmd_status(&plugin),
    }
}

fn build_plugin(cli: &Cli) -> Result<IconReplacePlugin> {
    let mut options = match &cli.options {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read options file: {}", path.display()))?;
            PluginOptions::from_json(&raw)
                .with_context(|| format!("Invalid options file: {}", path.display()))?
        }
        None => PluginOptions::default(),
    };

    if let Some(config) = &cli.config {
        options.config_path = Some(config.clone());
    }
    if cli.quiet {
        options.log = false;
    }

    let resolved = match &cli.root {
        Some(root) => ResolvedConfig::new(root),
        None => ResolvedConfig::from_cwd(),
    };

    let mut plugin = IconReplacePlugin::new(options);
    plugin.config_resolved(&resolved);
    Ok(plugin)
}

fn cmd_transform(plugin: &IconReplacePlugin, files: &[PathBuf]) -> Result<()> {
    for file in files {
        let code = fs::read_to_string(file)
            .with_context(|| format!("Failed to read source file: {}", file.display()))?;
        let id = file.display().to_string();

        match plugin.transform(&code, &id) {
            Some(out) => {
                if files.len() > 1 {
                    println!("// === {} ===", id);
                }
                print!("{}", out.code);
                if !out.code.ends_with('\n') {
                    println!();
                }
            }
            None => eprintln!("[SKIP] {} unchanged", id),
        }
    }
    Ok(())
}

fn cmd_load(plugin: &IconReplacePlugin, id: &str) -> Result<()> {
    let resolved = plugin
        .resolve_id(id)
        .with_context(|| format!("'{}' is not a virtual icon module", id))?;
    let source = plugin
        .load(&resolved)
        .with_context(|| format!("No module for '{}'", resolved))?;
    println!("{}", source);
    Ok(())
}

fn cmd_status(plugin: &IconReplacePlugin) -> Result<()> {
    let options = plugin.options();
    let table = plugin.table();

    println!("Icon Replacement Status");
    println!("=======================");
    println!();
    println!("Configuration:");
    match (&options.replacements, &options.config_path) {
        (Some(inline), _) if !inline.is_empty() => {
            println!("  Source:      inline ({} entries)", inline.len())
        }
        (_, Some(path)) => println!("  Source:      {}", path.display()),
        _ => println!("  Source:      none"),
    }
    println!("  Logging:     {}", if options.log { "on" } else { "off" });
    println!();

    if table.is_empty() {
        println!("No replacements loaded. The plugin is inert.");
        return Ok(());
    }

    println!("Replacements ({}):", table.len());
    for entry in table.iter() {
        println!("  {:<20} {} bytes of path data", entry.name, entry.path_data.len());
    }
    Ok(())
}
