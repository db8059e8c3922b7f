//! In-memory language dictionaries.
//!
//! A dictionary is a JSON object tree: objects are internal nodes, every other
//! value is a leaf. `null` marks an entry that was registered but never
//! translated. Key order is the file's order and is preserved through every
//! operation (serde_json is built with `preserve_order`).
//!
//! - `resolve`: read-only descent along a key path
//! - `flatten`: nested tree <-> flat `dotted.key -> leaf` map
//! - `insert`: path-walk insertion used for auto-filling unknown keys

mod flatten;
mod insert;
mod resolve;

pub use flatten::{FlatMap, flatten, unflatten};
pub use insert::{InsertOutcome, insert};
pub use resolve::{Lookup, descend};

use serde_json::{Map, Value};

use crate::{
    error::FlatKeyError,
    key::{Delimiter, DottedKey},
};

/// The nested tree backing a dictionary.
pub type Tree = Map<String, Value>;

/// A loaded language dictionary and whether it has unsaved changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary {
    language: String,
    root: Tree,
    dirty: bool,
}

impl Dictionary {
    /// Wrap a tree loaded from a store. The tree is normalized so that
    /// every internal node is an object.
    pub fn new(language: impl Into<String>, root: Tree) -> Self {
        Self {
            language: language.into(),
            root: normalize(root),
            dirty: false,
        }
    }

    pub fn empty(language: impl Into<String>) -> Self {
        Self::new(language, Tree::new())
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn root(&self) -> &Tree {
        &self.root
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Forget pending changes, typically after they have been saved.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn lookup<S: AsRef<str>>(&self, keys: &[S]) -> Lookup<'_> {
        descend(&self.root, keys)
    }

    /// Register `key` with `value`, creating intermediate objects as needed.
    pub fn insert(&mut self, key: &DottedKey, value: Value) -> InsertOutcome {
        let outcome = insert(&mut self.root, key, value);
        self.dirty = true;
        outcome
    }

    pub fn flatten(&self, delimiter: &Delimiter) -> FlatMap {
        flatten(&self.root, delimiter)
    }

    /// Replace the whole tree with one rebuilt from flat entries.
    ///
    /// On error the dictionary is left untouched.
    pub fn replace_with_flat(
        &mut self,
        flat: &FlatMap,
        delimiter: &Delimiter,
    ) -> Result<(), FlatKeyError> {
        self.root = unflatten(flat, delimiter)?;
        self.dirty = true;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

/// Turn JSON arrays into objects keyed by element index so that list
/// entries are addressable as `parents.type.0`.
pub fn normalize(tree: Tree) -> Tree {
    tree.into_iter()
        .map(|(key, value)| (key, normalize_value(value)))
        .collect()
}

fn normalize_value(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(normalize(map)),
        Value::Array(items) => Value::Object(
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| (index.to_string(), normalize_value(item)))
                .collect(),
        ),
        leaf => leaf,
    }
}
