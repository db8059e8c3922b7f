//! Translation sessions.
//!
//! A [`Translator`] is bound to one store and one default language. It
//! resolves dotted keys against that language's dictionary, records misses,
//! optionally registers unknown keys in the dictionary, and writes changes
//! back once: on [`Translator::finish`], or when dropped.
//!
//! A session owns its own copy of the dictionary. Use
//! [`crate::registry::Translators`] when several parts of a program translate
//! the same language, so they share one session instead of overwriting each
//! other's saves.
//!
//! ```no_run
//! use lexi::{JsonStore, Settings, Translator};
//!
//! let mut translator = Translator::open(JsonStore::new("lang"), Settings::default())?;
//! println!("{}", translator.resolve("system.dot"));
//! translator.finish()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde_json::Value;
use thiserror::Error;

use crate::{
    dictionary::{Dictionary, FlatMap, Lookup},
    error::{DictionaryError, FlatKeyError, LogError},
    key::{Delimiter, DottedKey},
    missing_log::{LogMode, MissingKeyLogger},
    store::DictionaryStore,
};

pub const DEFAULT_LANGUAGE: &str = "en";

/// Engine settings, usually derived from [`crate::config::Config`].
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub language: String,
    pub delimiter: Delimiter,
    /// Register unknown keys in the default dictionary.
    pub fill_unknown: bool,
    /// Value written for auto-filled keys.
    pub fill_value: Value,
    pub log_mode: LogMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            delimiter: Delimiter::default(),
            fill_unknown: false,
            fill_value: Value::Null,
            log_mode: LogMode::Disabled,
        }
    }
}

/// Per-call overrides for [`Translator::resolve_with`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolveOptions {
    pub language: Option<String>,
    pub delimiter: Option<Delimiter>,
}

impl ResolveOptions {
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = Some(delimiter);
        self
    }
}

/// What a flush wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlushSummary {
    pub dictionary_saved: bool,
    pub keys_logged: usize,
}

#[derive(Debug, Error)]
pub enum FlushError {
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
    #[error(transparent)]
    Log(#[from] LogError),
}

/// Owned classification of a lookup, detached from the dictionary borrow.
#[derive(Debug, Clone, PartialEq)]
enum Outcome {
    Hit(String),
    Untranslated,
    Subtree,
    Absent,
}

impl From<Lookup<'_>> for Outcome {
    fn from(lookup: Lookup<'_>) -> Self {
        match lookup {
            Lookup::Found(_) => lookup.text().map_or(Outcome::Absent, Outcome::Hit),
            Lookup::Untranslated => Outcome::Untranslated,
            Lookup::Subtree => Outcome::Subtree,
            Lookup::Absent => Outcome::Absent,
        }
    }
}

pub struct Translator<S: DictionaryStore> {
    store: S,
    settings: Settings,
    dictionary: Dictionary,
    logger: MissingKeyLogger,
    finished: bool,
}

impl<S: DictionaryStore> Translator<S> {
    /// Load the default language and start a session.
    ///
    /// Fails if the language has no dictionary or it cannot be parsed.
    pub fn open(store: S, settings: Settings) -> Result<Self, DictionaryError> {
        let tree = store.load(&settings.language)?;
        let dictionary = Dictionary::new(settings.language.clone(), tree);
        Ok(Self::with_dictionary(store, settings, dictionary))
    }

    /// Like [`Translator::open`], but a language without a dictionary starts
    /// empty. Every lookup misses, and auto-fill creates the file on flush.
    /// Unreadable or invalid dictionaries still fail.
    pub fn open_or_empty(store: S, settings: Settings) -> Result<Self, DictionaryError> {
        let dictionary = match store.load(&settings.language) {
            Ok(tree) => Dictionary::new(settings.language.clone(), tree),
            Err(err) if err.is_unavailable() => {
                tracing::debug!(error = %err, "starting with an empty dictionary");
                Dictionary::empty(settings.language.clone())
            }
            Err(err) => return Err(err),
        };
        Ok(Self::with_dictionary(store, settings, dictionary))
    }

    fn with_dictionary(store: S, settings: Settings, dictionary: Dictionary) -> Self {
        let logger = MissingKeyLogger::new(settings.log_mode.clone());
        Self {
            store,
            settings,
            dictionary,
            logger,
            finished: false,
        }
    }

    pub fn language(&self) -> &str {
        &self.settings.language
    }

    pub fn delimiter(&self) -> &Delimiter {
        &self.settings.delimiter
    }

    pub fn set_delimiter(&mut self, delimiter: Delimiter) {
        self.settings.delimiter = delimiter;
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn logger(&self) -> &MissingKeyLogger {
        &self.logger
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Translate `key` in the default language, or return `key` unchanged.
    pub fn resolve(&mut self, key: &str) -> String {
        self.resolve_with(key, &ResolveOptions::default())
    }

    /// Translate `key` with an optional language and delimiter override.
    ///
    /// An overridden language is read from the store for this call only.
    /// Misses are recorded under the effective language. Auto-fill only ever
    /// writes to the default dictionary, and only where that dictionary has
    /// nothing at the key's path.
    pub fn resolve_with(&mut self, key: &str, options: &ResolveOptions) -> String {
        self.try_resolve_with(key, options)
            .unwrap_or_else(|| key.to_string())
    }

    /// Like [`Translator::resolve`], but `None` on a miss.
    pub fn try_resolve(&mut self, key: &str) -> Option<String> {
        self.try_resolve_with(key, &ResolveOptions::default())
    }

    /// Like [`Translator::resolve_with`], but `None` on a miss. Misses are
    /// still logged and auto-filled.
    pub fn try_resolve_with(&mut self, key: &str, options: &ResolveOptions) -> Option<String> {
        let delimiter = options
            .delimiter
            .clone()
            .unwrap_or_else(|| self.settings.delimiter.clone());
        let segments: Vec<&str> = delimiter.split(key).collect();

        let override_language = options
            .language
            .as_deref()
            .filter(|language| *language != self.settings.language);

        let outcome = match override_language {
            None => Outcome::from(self.dictionary.lookup(&segments)),
            Some(language) => self.lookup_uncached(language, &segments),
        };

        if let Outcome::Hit(text) = outcome {
            return Some(text);
        }

        let language = override_language.unwrap_or(&self.settings.language);
        self.logger.record(language, key);

        if self.settings.fill_unknown {
            let absent_in_default = match override_language {
                None => outcome == Outcome::Absent,
                Some(_) => self.dictionary.lookup(&segments) == Lookup::Absent,
            };
            if absent_in_default {
                self.register_unknown(key, &delimiter);
            }
        }

        None
    }

    fn lookup_uncached(&self, language: &str, segments: &[&str]) -> Outcome {
        match self.store.load(language) {
            Ok(tree) => Outcome::from(Dictionary::new(language, tree).lookup(segments)),
            Err(err) => {
                tracing::debug!(language, error = %err, "override language unavailable");
                Outcome::Absent
            }
        }
    }

    fn register_unknown(&mut self, key: &str, delimiter: &Delimiter) {
        match DottedKey::parse(key, delimiter) {
            Ok(dotted) => {
                let outcome = self
                    .dictionary
                    .insert(&dotted, self.settings.fill_value.clone());
                tracing::debug!(
                    language = self.dictionary.language(),
                    key,
                    outcome = outcome.as_str(),
                    "registered unknown key"
                );
            }
            Err(err) => {
                tracing::debug!(key, error = %err, "not registering malformed key");
            }
        }
    }

    /// The default dictionary as flat `key -> leaf` entries, joined with the
    /// session delimiter.
    pub fn export_flat(&self) -> FlatMap {
        self.dictionary.flatten(&self.settings.delimiter)
    }

    /// Replace the default dictionary with one rebuilt from flat entries.
    pub fn import_flat(&mut self, flat: &FlatMap) -> Result<(), FlatKeyError> {
        self.dictionary
            .replace_with_flat(flat, &self.settings.delimiter)
    }

    /// Save the dictionary if it changed and append pending missing keys.
    ///
    /// Both steps are attempted even if the first fails.
    pub fn flush(&mut self) -> Result<FlushSummary, FlushError> {
        let saved = self.save_if_dirty();
        let logged = self.logger.flush();
        Ok(FlushSummary {
            dictionary_saved: saved?,
            keys_logged: logged?,
        })
    }

    fn save_if_dirty(&mut self) -> Result<bool, DictionaryError> {
        if !self.dictionary.is_dirty() {
            return Ok(false);
        }
        self.store
            .save(self.dictionary.language(), self.dictionary.root())?;
        self.dictionary.mark_clean();
        Ok(true)
    }

    /// Flush and end the session.
    pub fn finish(mut self) -> Result<FlushSummary, FlushError> {
        self.finished = true;
        self.flush()
    }
}

impl<S: DictionaryStore> Drop for Translator<S> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        if let Err(err) = self.flush() {
            let cause = std::error::Error::source(&err)
                .map(|source| format!(": {}", source))
                .unwrap_or_default();
            tracing::warn!(
                "failed to flush translations for '{}': {}{}",
                self.settings.language,
                err,
                cause
            );
        }
    }
}
