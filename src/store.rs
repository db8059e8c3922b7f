//! Dictionary sources.
//!
//! A store maps a language code to a nested tree and writes mutated trees
//! back. [`JsonStore`] keeps one `<language>.json` file per language under a
//! root directory; [`MemoryStore`] keeps trees in memory.
//!
//! Saves are whole-file rewrites. Two processes flushing the same language
//! race and the last one wins: stores are single-writer.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::{dictionary::Tree, error::DictionaryError};

pub const DICTIONARY_EXTENSION: &str = "json";

/// Load/save boundary for language dictionaries.
pub trait DictionaryStore {
    /// Load the tree for `language`.
    ///
    /// A language with no backing source yields
    /// [`DictionaryError::Unavailable`]; the caller decides whether that
    /// means "empty dictionary" or "abort".
    fn load(&self, language: &str) -> Result<Tree, DictionaryError>;

    /// Persist `tree` as the dictionary for `language`.
    fn save(&self, language: &str, tree: &Tree) -> Result<(), DictionaryError>;

    /// Human readable location of a language's source, for messages.
    fn location(&self, language: &str) -> String;
}

/// One pretty-printed JSON file per language.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, language: &str) -> PathBuf {
        self.root.join(format!("{}.{}", language, DICTIONARY_EXTENSION))
    }
}

impl DictionaryStore for JsonStore {
    fn load(&self, language: &str) -> Result<Tree, DictionaryError> {
        let path = self.path_for(language);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(DictionaryError::Unavailable {
                    language: language.to_string(),
                    location: path.display().to_string(),
                });
            }
            Err(source) => return Err(DictionaryError::Io { path, source }),
        };

        if content.trim().is_empty() {
            return Ok(Tree::new());
        }

        let value: Value = serde_json::from_str(&content)
            .map_err(|source| DictionaryError::Parse {
                path: path.clone(),
                source,
            })?;

        match value {
            Value::Object(tree) => {
                tracing::debug!(language, path = %path.display(), keys = tree.len(), "loaded dictionary");
                Ok(tree)
            }
            _ => Err(DictionaryError::NotAMapping {
                location: path.display().to_string(),
            }),
        }
    }

    fn save(&self, language: &str, tree: &Tree) -> Result<(), DictionaryError> {
        let path = self.path_for(language);
        fs::create_dir_all(&self.root).map_err(|source| DictionaryError::Io {
            path: self.root.clone(),
            source,
        })?;

        let mut content =
            serde_json::to_string_pretty(tree).map_err(|source| DictionaryError::Serialize {
                language: language.to_string(),
                source,
            })?;
        if !content.ends_with('\n') {
            content.push('\n');
        }

        // Write next to the target and rename so readers never see a partial file.
        let staging = path.with_extension(format!("{}.tmp", DICTIONARY_EXTENSION));
        fs::write(&staging, content).map_err(|source| DictionaryError::Io {
            path: staging.clone(),
            source,
        })?;
        fs::rename(&staging, &path).map_err(|source| DictionaryError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(language, path = %path.display(), "saved dictionary");
        Ok(())
    }

    fn location(&self, language: &str) -> String {
        self.path_for(language).display().to_string()
    }
}

/// Trees held in memory, keyed by language.
#[derive(Debug, Default)]
pub struct MemoryStore {
    trees: RefCell<HashMap<String, Tree>>,
    saves: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(self, language: impl Into<String>, tree: Tree) -> Self {
        self.trees.borrow_mut().insert(language.into(), tree);
        self
    }

    /// Current tree for `language`, if any.
    pub fn get(&self, language: &str) -> Option<Tree> {
        self.trees.borrow().get(language).cloned()
    }

    /// Number of successful `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl DictionaryStore for MemoryStore {
    fn load(&self, language: &str) -> Result<Tree, DictionaryError> {
        self.get(language)
            .ok_or_else(|| DictionaryError::Unavailable {
                language: language.to_string(),
                location: self.location(language),
            })
    }

    fn save(&self, language: &str, tree: &Tree) -> Result<(), DictionaryError> {
        self.trees
            .borrow_mut()
            .insert(language.to_string(), tree.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self, language: &str) -> String {
        format!("memory:{}", language)
    }
}

impl<S: DictionaryStore + ?Sized> DictionaryStore for &S {
    fn load(&self, language: &str) -> Result<Tree, DictionaryError> {
        (**self).load(language)
    }

    fn save(&self, language: &str, tree: &Tree) -> Result<(), DictionaryError> {
        (**self).save(language, tree)
    }

    fn location(&self, language: &str) -> String {
        (**self).location(language)
    }
}
