//! Configuration management for the template composer.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config file (field limits, default template type)

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::composer::{DEFAULT_MAX_BUTTONS, TemplateType};

/// Output format for previews and diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "tplc")]
#[command(about = "Compose message templates with numbered placeholders")]
#[command(version)]
pub struct Args {
    /// Template type, overriding the config file
    #[arg(long, global = true, value_enum, help = "Template type (marketing, utility)")]
    pub template_type: Option<TemplateType>,

    /// Explicit config file
    #[arg(long, global = true, help = "Path to a config TOML file")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(
        long,
        global = true,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a draft with its variables substituted
    Preview {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Re-render whenever the file changes
        #[arg(long)]
        watch: bool,
    },
    /// Validate a draft
    Check {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the normalized draft as TOML
    Normalize { file: PathBuf },
    /// Print the bundled example draft
    Example,
    /// Interactive composing session on stdin
    Session {
        /// Start from a draft file
        #[arg(long)]
        from: Option<PathBuf>,
        /// Start from the bundled example
        #[arg(long, conflicts_with = "from")]
        example: bool,
    },
}

/// Field length and button limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub header_max: usize,
    pub body_max: usize,
    pub footer_max: usize,
    pub max_buttons: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            header_max: 60,
            body_max: 1024,
            footer_max: 60,
            max_buttons: DEFAULT_MAX_BUTTONS,
        }
    }
}

/// Config file contents (all keys optional)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    template_type: Option<TemplateType>,
    limits: Limits,
}

impl ConfigFile {
    fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Template type for new composers and drafts without one
    pub template_type: TemplateType,
    pub limits: Limits,
    pub log_level: String,
    /// Config file that was loaded, if any
    pub config_path: Option<PathBuf>,
}

impl Config {
    /// Parse command-line arguments and build the configuration
    pub fn from_args_and_env() -> Result<(Self, Command)> {
        let args = Args::parse();
        let config = Self::from_args(&args)?;
        Ok((config, args.command))
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: &Args) -> Result<Self> {
        let config_path = match &args.config {
            Some(path) => Some(path.clone()),
            None => Self::default_config_path().filter(|path| path.exists()),
        };

        let file = match &config_path {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };

        Ok(Config {
            template_type: args
                .template_type
                .or(file.template_type)
                .unwrap_or_default(),
            limits: file.limits,
            log_level: args.log_level.clone(),
            config_path,
        })
    }

    /// `<config dir>/template-composer/config.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("template-composer").join("config.toml"))
    }
}
