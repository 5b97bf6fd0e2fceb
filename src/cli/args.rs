//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// What a run does, decided from the explicit command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Show the provider summary, then prompt for a filter
    Interactive,
    /// List prices matching the given filter
    Listing(String),
}

#[derive(Parser)]
#[command(name = "llm-prices")]
#[command(about = "List LLM provider and model prices from a local dataset", version)]
pub(crate) struct Cli {
    /// Provider or model filter, case-insensitive ("all" lists everything).
    /// When several are given the last one wins.
    #[arg(value_name = "FILTER")]
    pub(crate) filters: Vec<String>,

    /// Sort all models by input + output price, lowest first
    #[arg(long)]
    pub(crate) sort: bool,

    /// Price dataset to read (defaults to prices/data.json beside the binary)
    #[arg(long, value_name = "PATH", env = "LLM_PRICES_DATA")]
    pub(crate) data: Option<PathBuf>,

    /// Color output mode
    #[arg(long, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long)]
    pub(crate) no_color: bool,

    /// Enable debug output on stderr (load timing, degraded records)
    #[arg(long)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Interactive only when neither a filter nor `--sort` was given
    pub(crate) fn mode(&self) -> Mode {
        match self.filters.last() {
            Some(filter) => Mode::Listing(filter.clone()),
            None if self.sort => Mode::Listing(String::new()),
            None => Mode::Interactive,
        }
    }

    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.sort && config.sort {
            self.sort = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(color) = config.color
            && matches!(self.color, ColorMode::Auto)
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.data.is_none() {
            self.data = config.data_path();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}
