use serde_json::{Map, Value};

use crate::key::DottedKey;

/// What an insertion did to the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The final key did not exist.
    Added,
    /// The final key existed and its value was replaced.
    Updated,
    /// A leaf sitting on the path was replaced by an object to make room.
    Restructured,
}

impl InsertOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            InsertOutcome::Added => "added",
            InsertOutcome::Updated => "updated",
            InsertOutcome::Restructured => "restructured",
        }
    }
}

/// Set `key` to `value`, creating intermediate objects along the way.
///
/// Destructive by contract: a leaf found in the middle of the path is
/// replaced by an object, and whatever sits at the final position (leaf or
/// subtree) is overwritten.
pub fn insert(root: &mut Map<String, Value>, key: &DottedKey, value: Value) -> InsertOutcome {
    insert_at(root, key.segments(), value)
}

fn insert_at(node: &mut Map<String, Value>, segments: &[String], value: Value) -> InsertOutcome {
    match segments {
        [] => InsertOutcome::Updated,
        [last] => match node.insert(last.clone(), value) {
            None => InsertOutcome::Added,
            Some(_) => InsertOutcome::Updated,
        },
        [head, rest @ ..] => {
            let slot = node
                .entry(head.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            match slot {
                Value::Object(child) => insert_at(child, rest, value),
                leaf => {
                    let mut child = Map::new();
                    insert_at(&mut child, rest, value);
                    *leaf = Value::Object(child);
                    InsertOutcome::Restructured
                }
            }
        }
    }
}
