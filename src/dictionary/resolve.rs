//! Read-only descent along a key path.
//!
//! `null`, `""` and `false` leaves are placeholders, not translations: they
//! resolve as [`Lookup::Untranslated`] and callers fall back to the key.
//! Numbers (including `0`) and `true` are real values and render with their
//! JSON text.

use serde_json::{Map, Value};

/// Outcome of descending a dictionary along a key path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    /// A leaf holding a usable translation.
    Found(&'a Value),
    /// A leaf exists but is `null`, `false` or an empty string.
    Untranslated,
    /// The path names an object, not a leaf.
    Subtree,
    /// Some segment along the path does not exist.
    Absent,
}

impl<'a> Lookup<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    /// Display text of a found leaf. Strings are returned as-is; numbers and
    /// booleans use their JSON representation.
    pub fn text(&self) -> Option<String> {
        match self {
            Lookup::Found(Value::String(s)) => Some(s.clone()),
            Lookup::Found(other) => Some(other.to_string()),
            _ => None,
        }
    }
}

/// Walk `keys` left to right through nested objects.
///
/// Never fails: a missing segment, a leaf in the middle of the path, or an
/// empty key sequence all produce [`Lookup::Absent`].
pub fn descend<'a, S: AsRef<str>>(root: &'a Map<String, Value>, keys: &[S]) -> Lookup<'a> {
    let Some((last, parents)) = keys.split_last() else {
        return Lookup::Absent;
    };

    let mut node = root;
    for key in parents {
        match node.get(key.as_ref()) {
            Some(Value::Object(child)) => node = child,
            _ => return Lookup::Absent,
        }
    }

    match node.get(last.as_ref()) {
        None => Lookup::Absent,
        Some(Value::Object(_)) => Lookup::Subtree,
        Some(Value::Null | Value::Bool(false)) => Lookup::Untranslated,
        Some(Value::String(s)) if s.is_empty() => Lookup::Untranslated,
        Some(leaf) => Lookup::Found(leaf),
    }
}
