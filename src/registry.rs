//! One translator session per language over a shared store.
//!
//! Two [`Translator`]s opened separately on the same language hold separate
//! copies of its dictionary, and whichever flushes last overwrites the other's
//! auto-filled keys. [`Translators`] hands out a single lazily opened session
//! per language instead, so every lookup for that language goes through the
//! same dictionary and it is saved at most once per flush.

use std::collections::{BTreeMap, btree_map::Entry};

use crate::{
    error::DictionaryError,
    store::DictionaryStore,
    translator::{FlushError, FlushSummary, Settings, Translator},
};

/// Flush results keyed by language.
pub type FlushReport = BTreeMap<String, FlushSummary>;

pub struct Translators<S: DictionaryStore + Clone> {
    store: S,
    settings: Settings,
    bootstrap_missing: bool,
    sessions: BTreeMap<String, Translator<S>>,
}

impl<S: DictionaryStore + Clone> Translators<S> {
    /// `settings` is the template for every session; its `language` is the
    /// default used by [`Translators::default_language`].
    pub fn new(store: S, settings: Settings) -> Self {
        Self {
            store,
            settings,
            bootstrap_missing: false,
            sessions: BTreeMap::new(),
        }
    }

    /// Open languages that have no dictionary yet as empty ones
    /// (see [`Translator::open_or_empty`]) instead of failing.
    pub fn bootstrap_missing(mut self, enabled: bool) -> Self {
        self.bootstrap_missing = enabled;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The session for `language`, loading its dictionary on first use.
    ///
    /// A failed load is not cached; the next call tries again.
    pub fn get_or_open(&mut self, language: &str) -> Result<&mut Translator<S>, DictionaryError> {
        match self.sessions.entry(language.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let settings = Settings {
                    language: language.to_string(),
                    ..self.settings.clone()
                };
                let store = self.store.clone();
                let translator = if self.bootstrap_missing {
                    Translator::open_or_empty(store, settings)?
                } else {
                    Translator::open(store, settings)?
                };
                tracing::debug!(language, "opened translator session");
                Ok(entry.insert(translator))
            }
        }
    }

    /// The session for the configured default language.
    pub fn default_language(&mut self) -> Result<&mut Translator<S>, DictionaryError> {
        let language = self.settings.language.clone();
        self.get_or_open(&language)
    }

    /// Translate `key` in `language` through that language's shared session.
    pub fn resolve(&mut self, language: &str, key: &str) -> Result<String, DictionaryError> {
        Ok(self.get_or_open(language)?.resolve(key))
    }

    pub fn is_open(&self, language: &str) -> bool {
        self.sessions.contains_key(language)
    }

    /// Languages with an open session, in sorted order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.sessions.keys().map(String::as_str)
    }

    /// Flush every open session. All sessions are attempted; the first
    /// error is returned.
    pub fn flush(&mut self) -> Result<FlushReport, FlushError> {
        collect_report(
            self.sessions
                .iter_mut()
                .map(|(language, translator)| (language.clone(), translator.flush())),
        )
    }

    /// Flush and close every session.
    ///
    /// Dropping the registry instead flushes each session from its own
    /// `Drop`, reporting failures as warnings.
    pub fn finish(self) -> Result<FlushReport, FlushError> {
        collect_report(
            self.sessions
                .into_iter()
                .map(|(language, translator)| (language, translator.finish())),
        )
    }
}

fn collect_report<I>(results: I) -> Result<FlushReport, FlushError>
where
    I: Iterator<Item = (String, Result<FlushSummary, FlushError>)>,
{
    let mut report = FlushReport::new();
    let mut first_error = None;
    for (language, result) in results {
        match result {
            Ok(summary) => {
                report.insert(language, summary);
            }
            Err(err) => {
                first_error.get_or_insert(err);
            }
        }
    }
    match first_error {
        Some(err) => Err(err),
        None => Ok(report),
    }
}
