//! Lexi - dotted-key translation dictionaries
//!
//! Lexi resolves keys such as `system.notation.dot` against nested
//! per-language JSON dictionaries, falling back to the key itself when no
//! translation exists. Misses can be logged and, optionally, registered back
//! into the dictionary as placeholders to be translated later.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, output)
//! - `config`: Configuration file loading and parsing
//! - `dictionary`: Nested dictionary tree, descent, flatten/unflatten, insertion
//! - `error`: Typed errors for the engine
//! - `key`: Dotted keys and delimiters
//! - `missing_log`: Missing-translation logging
//! - `registry`: One shared translator session per language
//! - `store`: Dictionary load/save backends
//! - `translator`: Translation sessions tying the above together

pub mod cli;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod key;
pub mod missing_log;
pub mod registry;
pub mod store;
pub mod translator;

pub use dictionary::{Dictionary, FlatMap, Lookup};
pub use key::{Delimiter, DottedKey};
pub use missing_log::{LogMode, MissingKeyLogger};
pub use registry::{FlushReport, Translators};
pub use store::{DictionaryStore, JsonStore, MemoryStore};
pub use translator::{FlushSummary, ResolveOptions, Settings, Translator};
