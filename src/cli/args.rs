//! CLI argument definitions using clap.
//!
//! Running `lexi` with keys translates them. Subcommands cover the bulk
//! operations on a dictionary.
//!
//! ## Commands
//!
//! - (default): Translate each positional key and print the result
//! - `export`: Print a dictionary as flat `key -> value` entries
//! - `import`: Rebuild a dictionary from a flat JSON object
//! - `init`: Initialize lexi configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::{error::KeyError, key::Delimiter};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub translate: TranslateArgs,
}

impl Arguments {
    /// Print help and return None when there is nothing to do.
    pub fn with_work_or_help(self) -> Option<Self> {
        if self.command.is_none() && self.translate.keys.is_empty() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from whichever command is running.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Export(cmd)) => cmd.common.verbose,
            Some(Command::Import(cmd)) => cmd.common.verbose,
            Some(Command::Init) => false,
            None => self.translate.common.verbose,
        }
    }
}

fn parse_delimiter(value: &str) -> Result<Delimiter, KeyError> {
    Delimiter::new(value)
}

/// Common arguments shared by all dictionary commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Language code of the dictionary (overrides config file)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Directory holding <language>.json dictionaries (overrides config file)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Key segment delimiter (overrides config file)
    #[arg(short = 'D', long, value_parser = parse_delimiter)]
    pub delimiter: Option<Delimiter>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Default, Args)]
pub struct TranslateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Register unknown keys in the dictionary (overrides config file)
    #[arg(long)]
    pub fill_unknown: bool,

    /// Append unknown keys to <DIR>/<language>_unknown.lst (overrides config file)
    #[arg(long, value_name = "DIR", conflicts_with = "warn_unknown")]
    pub log_unknown: Option<PathBuf>,

    /// Print a warning for every unknown key (overrides config file)
    #[arg(long)]
    pub warn_unknown: bool,

    /// Dotted keys to translate. Put `--` before a key spelled like a
    /// subcommand (`lexi -- export`)
    pub keys: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// A flat JSON object
    #[default]
    Json,
    /// One `key=value` line per entry
    Lines,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,
}

#[derive(Debug, Args)]
pub struct ImportCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Keep existing entries and overlay the imported ones
    #[arg(long)]
    pub merge: bool,

    /// Flat JSON file of `"dotted.key": "value"` entries
    pub file: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a dictionary as flat key/value entries
    Export(ExportCommand),
    /// Rebuild a dictionary from a flat JSON object
    Import(ImportCommand),
    /// Initialize a new .lexirc.json configuration file
    Init,
}
