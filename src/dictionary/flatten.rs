use serde_json::{Map, Value};

use super::insert::insert;
use crate::{
    error::FlatKeyError,
    key::{Delimiter, DottedKey},
};

/// One-dimensional view of a dictionary: `dotted.key -> leaf`, in
/// depth-first insertion order.
pub type FlatMap = Map<String, Value>;

/// Flatten a nested tree into delimiter-joined keys.
///
/// Empty objects have no leaves and therefore produce no entries.
pub fn flatten(root: &Map<String, Value>, delimiter: &Delimiter) -> FlatMap {
    let mut out = FlatMap::new();
    flatten_into(root, "", delimiter, &mut out);
    out
}

fn flatten_into(
    node: &Map<String, Value>,
    prefix: &str,
    delimiter: &Delimiter,
    out: &mut FlatMap,
) {
    for (key, value) in node {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}{}{}", prefix, delimiter, key)
        };
        match value {
            Value::Object(child) => flatten_into(child, &path, delimiter, out),
            leaf => {
                out.insert(path, leaf.clone());
            }
        }
    }
}

/// Rebuild a nested tree from flat entries.
///
/// Entries are applied in order and the last write wins when one key is
/// used both as a leaf and as an intermediate node. A key with an empty
/// segment is rejected and nothing is built.
pub fn unflatten(
    flat: &FlatMap,
    delimiter: &Delimiter,
) -> Result<Map<String, Value>, FlatKeyError> {
    let mut root = Map::new();
    for (raw, value) in flat {
        let key = DottedKey::parse(raw, delimiter)
            .map_err(|_| FlatKeyError::EmptySegment { key: raw.clone() })?;
        insert(&mut root, &key, value.clone());
    }
    Ok(root)
}
