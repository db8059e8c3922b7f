//! Missing-translation logging.
//!
//! In [`LogMode::Warn`] every miss is reported immediately as a `tracing`
//! warning. In [`LogMode::File`] misses are collected per language and
//! appended to `<dir>/<language>_unknown.lst` on [`MissingKeyLogger::flush`],
//! skipping keys the file already lists. Existing content is never rewritten.
//!
//! A log line is a key verbatim (a trailing `\r` from CRLF files is ignored),
//! so keys that are empty or contain a line break cannot round-trip through
//! the file and are never written to it.

use std::{
    collections::{BTreeMap, HashSet},
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{config::resolve_path, error::LogError};

pub const LOG_FILE_SUFFIX: &str = "_unknown.lst";

/// Where missing keys go.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogMode {
    #[default]
    Disabled,
    Warn,
    File(PathBuf),
}

/// Config form of [`LogMode`]: `false`, `true`, or a directory path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LogSetting {
    Enabled(bool),
    Directory(PathBuf),
}

impl Default for LogSetting {
    fn default() -> Self {
        LogSetting::Enabled(false)
    }
}

impl LogSetting {
    /// Resolve to a mode, joining relative directories onto `base`.
    pub fn to_mode(&self, base: &Path) -> LogMode {
        match self {
            LogSetting::Enabled(false) => LogMode::Disabled,
            LogSetting::Enabled(true) => LogMode::Warn,
            LogSetting::Directory(dir) => LogMode::File(resolve_path(base, dir)),
        }
    }
}

/// Keys collected for one language, in discovery order.
#[derive(Debug, Default)]
struct Pending {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl Pending {
    fn push(&mut self, key: &str) -> bool {
        if !self.seen.insert(key.to_string()) {
            return false;
        }
        self.order.push(key.to_string());
        true
    }
}

#[derive(Debug, Default)]
pub struct MissingKeyLogger {
    mode: LogMode,
    pending: BTreeMap<String, Pending>,
}

impl MissingKeyLogger {
    pub fn new(mode: LogMode) -> Self {
        Self {
            mode,
            pending: BTreeMap::new(),
        }
    }

    pub fn mode(&self) -> &LogMode {
        &self.mode
    }

    /// Record that `key` has no translation in `language`.
    pub fn record(&mut self, language: &str, key: &str) {
        match &self.mode {
            LogMode::Disabled => {}
            LogMode::Warn => {
                tracing::warn!("Translation missing for \"{}\" in \"{}\"", key, language);
            }
            LogMode::File(_) => {
                if !is_loggable(key) {
                    tracing::debug!(language, key, "not logging key that cannot be a log line");
                    return;
                }
                if self.pending.entry(language.to_string()).or_default().push(key) {
                    tracing::debug!(language, key, "queued missing key");
                }
            }
        }
    }

    /// Keys recorded for `language` that have not been flushed yet.
    pub fn pending(&self, language: &str) -> Vec<&str> {
        self.pending
            .get(language)
            .map(|p| p.order.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.values().any(|p| !p.order.is_empty())
    }

    /// Append new keys to each language's log file.
    ///
    /// Returns the number of lines written. A language whose write fails
    /// keeps its pending keys so a later flush can retry; the first error
    /// is returned after every language has been attempted.
    pub fn flush(&mut self) -> Result<usize, LogError> {
        let LogMode::File(dir) = &self.mode else {
            return Ok(0);
        };

        let mut written = 0;
        let mut first_error = None;
        let languages: Vec<String> = self.pending.keys().cloned().collect();

        for language in languages {
            let Some(pending) = self.pending.get(&language) else {
                continue;
            };
            match append_new_keys(dir, &language, &pending.order) {
                Ok(count) => {
                    written += count;
                    self.pending.remove(&language);
                }
                Err(err) => {
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(written),
        }
    }
}

pub fn log_file_path(dir: &Path, language: &str) -> PathBuf {
    dir.join(format!("{}{}", language, LOG_FILE_SUFFIX))
}

fn is_loggable(key: &str) -> bool {
    !key.is_empty() && !key.contains(['\n', '\r'])
}

/// Lines already present in a log file, and whether the file ends without a
/// newline. Missing or unreadable files count as empty so that the append
/// still happens; invalid UTF-8 is decoded lossily.
fn read_logged_keys(path: &Path) -> (HashSet<String>, bool) {
    match fs::read(path) {
        Ok(bytes) => {
            let content = String::from_utf8_lossy(&bytes);
            let keys = content
                .split('\n')
                .map(|line| line.strip_suffix('\r').unwrap_or(line))
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect();
            let unterminated = !content.is_empty() && !content.ends_with('\n');
            (keys, unterminated)
        }
        Err(err) => {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %err, "treating unreadable log as empty");
            }
            (HashSet::new(), false)
        }
    }
}

fn append_new_keys(dir: &Path, language: &str, keys: &[String]) -> Result<usize, LogError> {
    let path = log_file_path(dir, language);
    let (logged, unterminated) = read_logged_keys(&path);
    let fresh: Vec<&String> = keys.iter().filter(|k| !logged.contains(*k)).collect();
    if fresh.is_empty() {
        return Ok(0);
    }

    fs::create_dir_all(dir).map_err(|source| LogError {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut content = String::new();
    if unterminated {
        content.push('\n');
    }
    for key in &fresh {
        content.push_str(key);
        content.push('\n');
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .and_then(|mut file| file.write_all(content.as_bytes()))
        .map_err(|source| LogError {
            path: path.clone(),
            source,
        })?;

    tracing::debug!(language, path = %path.display(), count = fresh.len(), "appended missing keys");
    Ok(fresh.len())
}
