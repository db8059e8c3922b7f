use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    key::Delimiter,
    missing_log::LogSetting,
    translator::{DEFAULT_LANGUAGE, Settings},
};

pub const CONFIG_FILE_NAME: &str = ".lexirc.json";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub delimiter: Delimiter,
    #[serde(default = "default_dictionary_root", alias = "dictionaryPath")]
    pub dictionary_root: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub fill_unknown: bool,
    #[serde(default = "default_fill_value")]
    pub fill_value: Value,
    #[serde(default)]
    pub log_unknown: LogSetting,
}

fn default_dictionary_root() -> String {
    "./lang".to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_fill_value() -> Value {
    Value::Null
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::default(),
            dictionary_root: default_dictionary_root(),
            language: default_language(),
            fill_unknown: false,
            fill_value: default_fill_value(),
            log_unknown: LogSetting::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// The delimiter is checked during deserialization; this covers the
    /// remaining fields.
    pub fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            bail!("'language' must not be empty");
        }
        if self.dictionary_root.trim().is_empty() {
            bail!("'dictionaryRoot' must not be empty");
        }
        if matches!(self.fill_value, Value::Object(_) | Value::Array(_)) {
            bail!("'fillValue' must be a string or null, not a nested value");
        }
        Ok(())
    }

    /// Engine settings with relative paths resolved against `base_dir`.
    pub fn settings(&self, base_dir: &Path) -> Settings {
        Settings {
            language: self.language.clone(),
            delimiter: self.delimiter.clone(),
            fill_unknown: self.fill_unknown,
            fill_value: self.fill_value.clone(),
            log_mode: self.log_unknown.to_mode(base_dir),
        }
    }

    pub fn dictionary_root(&self, base_dir: &Path) -> PathBuf {
        resolve_path(base_dir, Path::new(&self.dictionary_root))
    }
}

/// Join a configured path onto `base_dir`, dropping `.` components.
/// Absolute paths are returned as they are.
pub fn resolve_path(base_dir: &Path, path: &Path) -> PathBuf {
    let relative: PathBuf = path
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect();
    base_dir.join(relative)
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory relative config paths are resolved against: the config
    /// file's directory, or the start directory when using defaults.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
