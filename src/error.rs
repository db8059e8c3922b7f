//! Error types for the dictionary engine.
//!
//! Missing translations are not errors: they are a normal resolution outcome
//! (see [`crate::dictionary::Lookup`]). The types here cover the failures a
//! caller has to decide about: unreadable dictionary sources, malformed keys,
//! and log writes that did not go through.
//!
//! Messages name what failed; the underlying I/O or JSON error is only exposed
//! through [`std::error::Error::source`], so chain printers show it once.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load or persist a language dictionary.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The backing source for the language does not exist.
    #[error("no dictionary for language '{language}' at {location}")]
    Unavailable { language: String, location: String },

    /// The source exists but could not be read or written.
    #[error("failed to access dictionary {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source is not valid JSON.
    #[error("failed to parse dictionary {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The source parsed, but its root is not an object.
    #[error("dictionary {location} must contain a JSON object at its root")]
    NotAMapping { location: String },

    /// The in-memory dictionary could not be serialized.
    #[error("failed to serialize dictionary for '{language}'")]
    Serialize {
        language: String,
        #[source]
        source: serde_json::Error,
    },
}

impl DictionaryError {
    /// True when the language simply has no dictionary yet.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, DictionaryError::Unavailable { .. })
    }
}

/// A raw key or delimiter that cannot address a dictionary node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("delimiter must not be empty")]
    EmptyDelimiter,

    /// Leading, trailing or doubled delimiter.
    #[error("key \"{key}\" contains an empty segment")]
    EmptySegment { key: String },
}

/// A flat entry that cannot be placed back into a nested dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlatKeyError {
    #[error("flat key \"{key}\" contains an empty segment")]
    EmptySegment { key: String },
}

/// Failure to append to a missing-key log file.
#[derive(Debug, Error)]
#[error("failed to write missing-key log {}", .path.display())]
pub struct LogError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
