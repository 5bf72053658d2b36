//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigRevealMode};

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum RevealMode {
    /// Reveal only when stdout is a terminal (default)
    #[default]
    Auto,
    /// Always reveal the new post
    Always,
    /// Never reveal
    Never,
}

#[derive(Parser)]
#[command(name = "mdpost")]
#[command(about = "Convert a markdown file into a dated Jekyll post", version)]
pub(crate) struct Cli {
    /// Markdown file to convert
    #[arg(value_name = "FILE")]
    pub(crate) input: Vec<PathBuf>,

    /// Directory to write the post into
    #[arg(short = 'd', long, value_name = "DIR")]
    pub(crate) posts_dir: Option<PathBuf>,

    /// Backdate the post (YYYYMMDD or YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub(crate) date: Option<String>,

    /// Timezone for the post timestamp (e.g., "Asia/Shanghai", "UTC")
    #[arg(long, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Output the conversion result as JSON
    #[arg(short, long)]
    pub(crate) json: bool,

    /// When to reveal the new post in the file browser
    #[arg(long, value_enum, default_value = "auto")]
    pub(crate) reveal: RevealMode,

    /// Skip the file-browser reveal (shorthand for --reveal=never)
    #[arg(long)]
    pub(crate) no_reveal: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.no_reveal && config.no_reveal {
            self.no_reveal = true;
        }

        // For enum values, apply config only if CLI is at default
        if let Some(reveal) = config.reveal
            && self.reveal == RevealMode::Auto
        {
            self.reveal = match reveal {
                ConfigRevealMode::Auto => RevealMode::Auto,
                ConfigRevealMode::Always => RevealMode::Always,
                ConfigRevealMode::Never => RevealMode::Never,
            };
        }

        // String options: only apply if CLI didn't set them
        if self.posts_dir.is_none() {
            self.posts_dir = config.posts_dir.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }

        self
    }

    pub(crate) fn should_reveal(&self) -> bool {
        if self.no_reveal {
            return false;
        }
        match self.reveal {
            RevealMode::Always => true,
            RevealMode::Never => false,
            RevealMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}
