//! Command line argument parsing for the spelltrie CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::checker::CheckerConfig;

/// spelltrie - check spelling and suggest corrections from a word list
#[derive(Parser, Debug, Clone)]
#[command(name = "spelltrie")]
#[command(about = "Check spelling against a word list and suggest corrections")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpelltrieArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Checker configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", env = "SPELLTRIE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Maximum number of suggestions per word
    #[arg(long)]
    pub max_suggestions: Option<usize>,

    /// Edit distance used for suggestions
    #[arg(long)]
    pub distance: Option<usize>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpelltrieArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Build the checker configuration: file first, then command line overrides.
    pub fn checker_config(&self) -> Result<CheckerConfig> {
        let mut config = match &self.config {
            Some(path) => CheckerConfig::load_from_file(path)?,
            None => CheckerConfig::default(),
        };

        if let Some(max_suggestions) = self.max_suggestions {
            config.suggestion.max_suggestions = max_suggestions;
        }
        if let Some(distance) = self.distance {
            config.suggestion.default_distance = distance;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show a text with misspelled words highlighted
    Check(CheckArgs),

    /// Suggest corrections for individual words
    Suggest(SuggestArgs),

    /// Interactively correct a text and save the result
    Fix(FixArgs),

    /// Show dictionary statistics
    Stats(StatsArgs),
}

/// Arguments for checking a text
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Word list (whitespace-separated)
    #[arg(short, long, value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Text file to check
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

/// Arguments for word suggestions
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Word list (whitespace-separated)
    #[arg(short, long, value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Words to look up
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for interactive correction
#[derive(Parser, Debug, Clone)]
pub struct FixArgs {
    /// Word list (whitespace-separated)
    #[arg(short, long, value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Text file to correct
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where to write the corrected text (defaults to overwriting INPUT)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}

/// Arguments for dictionary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Word list (whitespace-separated)
    #[arg(short, long, value_name = "DICTIONARY")]
    pub dictionary: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
