use std::{env, path::PathBuf};

use anyhow::{Context as _, Result, bail};

use super::super::args::CommonArgs;
use crate::{
    config::{CONFIG_FILE_NAME, load_config},
    store::JsonStore,
    translator::Settings,
};

/// Configuration for one command run: config file values with command line
/// overrides applied.
pub struct SessionContext {
    pub settings: Settings,
    pub dictionary_root: PathBuf,
    pub verbose: bool,
}

impl SessionContext {
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to determine current directory")?;
        let loaded = load_config(&cwd)?;

        // In verbose mode, inform user if using default config
        if args.verbose && !loaded.from_file {
            eprintln!("Note: No {} found, using default configuration", CONFIG_FILE_NAME);
        }

        let mut settings = loaded.config.settings(&loaded.base_dir);
        if let Some(language) = &args.language {
            if language.trim().is_empty() {
                bail!("Language code must not be empty.");
            }
            settings.language = language.clone();
        }
        if let Some(delimiter) = &args.delimiter {
            settings.delimiter = delimiter.clone();
        }

        let dictionary_root = match &args.path {
            Some(path) => cwd.join(path),
            None => loaded.config.dictionary_root(&loaded.base_dir),
        };

        Ok(Self {
            settings,
            dictionary_root,
            verbose: args.verbose,
        })
    }

    /// The dictionary directory, which must exist.
    pub fn store(&self) -> Result<JsonStore> {
        if !self.dictionary_root.exists() {
            bail!(
                "Dictionary directory '{}' does not exist.\n\
                 Hint: Check your {} 'dictionaryRoot' setting or pass --path.",
                self.dictionary_root.display(),
                CONFIG_FILE_NAME
            );
        }
        if !self.dictionary_root.is_dir() {
            bail!("'{}' is not a directory.", self.dictionary_root.display());
        }
        Ok(JsonStore::new(&self.dictionary_root))
    }
}
