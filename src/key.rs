//! Dotted keys and the delimiter that splits them.
//!
//! A dotted key such as `system.notation.dot` names a leaf in a nested
//! dictionary. There is no escaping: a segment that contains the delimiter
//! cannot be addressed. Pick a different delimiter for such dictionaries.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::KeyError;

pub const DEFAULT_DELIMITER: &str = ".";

/// Non-empty separator between key segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Delimiter(String);

impl Delimiter {
    pub fn new(value: impl Into<String>) -> Result<Self, KeyError> {
        let value = value.into();
        if value.is_empty() {
            return Err(KeyError::EmptyDelimiter);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split a raw key without validating segments.
    pub fn split<'a>(&'a self, raw: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        raw.split(self.0.as_str())
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self(DEFAULT_DELIMITER.to_string())
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Delimiter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Delimiter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Delimiter::new(value).map_err(serde::de::Error::custom)
    }
}

/// An ordered sequence of non-empty key segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DottedKey {
    segments: Vec<String>,
}

impl DottedKey {
    /// Parse `raw` by splitting on `delimiter`.
    ///
    /// Rejects keys that would produce an empty segment, e.g. `"a..b"`,
    /// `".a"` or `""`.
    pub fn parse(raw: &str, delimiter: &Delimiter) -> Result<Self, KeyError> {
        let segments: Vec<String> = delimiter.split(raw).map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(KeyError::EmptySegment {
                key: raw.to_string(),
            });
        }
        Ok(Self { segments })
    }

    pub fn from_segments<I, S>(segments: I) -> Result<Self, KeyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() || segments.iter().any(String::is_empty) {
            return Err(KeyError::EmptySegment {
                key: segments.join(DEFAULT_DELIMITER),
            });
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Split into the parent path and the final segment.
    pub fn split_last(&self) -> (&[String], &str) {
        match self.segments.split_last() {
            Some((last, parents)) => (parents, last.as_str()),
            None => (&[], ""),
        }
    }

    pub fn join(&self, delimiter: &Delimiter) -> String {
        self.segments.join(delimiter.as_str())
    }
}
