//! Per-utterance document tree
//!
//! The assembler owns exactly one JSON object tree at a time. Handlers write
//! into it through flat keys, dotted hierarchical keys and named arrays; on
//! utterance end the tree is serialized as a whole and discarded.

use serde_json::{Map, Value};
use tracing::warn;

use voxdoc_foundation::{DocumentError, EmitError};

/// Assembler lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocState {
    /// Freshly initialized or just cleared, no writes yet.
    Empty,
    /// At least one write since the last clear.
    Accumulating,
}

/// Builder for one utterance's output document.
#[derive(Debug)]
pub struct DocumentAssembler {
    root: Map<String, Value>,
    state: DocState,
}

impl Default for DocumentAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentAssembler {
    pub fn new() -> Self {
        Self {
            root: Map::new(),
            state: DocState::Empty,
        }
    }

    pub fn state(&self) -> DocState {
        self.state
    }

    /// Discard the current tree and start over empty.
    pub fn reset(&mut self) {
        self.root = Map::new();
        self.state = DocState::Empty;
    }

    /// Set a top-level field.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.state = DocState::Accumulating;
        self.root.insert(key.to_string(), value.into());
    }

    /// Set a field under a dotted hierarchical key, creating intermediate
    /// objects as needed. An intermediate that already exists as an object is
    /// descended into, so sibling leaves under the same prefix survive each
    /// other; writes under the same prefix are order-independent.
    pub fn dotset(
        &mut self,
        path: &str,
        value: impl Into<Value>,
    ) -> Result<(), DocumentError> {
        let mut segments = path.split('.');
        // split never yields zero items
        let mut key = segments.next().unwrap_or_default();
        if key.is_empty() {
            return Err(DocumentError::EmptyKeySegment {
                key: path.to_string(),
            });
        }
        self.state = DocState::Accumulating;

        let mut current = &mut self.root;
        for next in segments {
            if next.is_empty() {
                return Err(DocumentError::EmptyKeySegment {
                    key: path.to_string(),
                });
            }
            let entry = current
                .entry(key.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                // A scalar has no children to lose; promote it to an object
                // so the deeper write can land.
                warn!(
                    target: "voxdoc::document",
                    path, segment = key,
                    "dotted write replaces non-object intermediate"
                );
                *entry = Value::Object(Map::new());
            }
            current = match entry {
                Value::Object(map) => map,
                _ => unreachable!("intermediate was just made an object"),
            };
            key = next;
        }
        current.insert(key.to_string(), value.into());
        Ok(())
    }

    /// Append a value to the named top-level array, creating the array on
    /// first use.
    pub fn append(&mut self, key: &str, value: Value) -> Result<(), DocumentError> {
        self.state = DocState::Accumulating;
        let entry = self
            .root
            .entry(key.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        match entry.as_array_mut() {
            Some(items) => {
                items.push(value);
                Ok(())
            }
            None => Err(DocumentError::NotAnArray {
                key: key.to_string(),
            }),
        }
    }

    /// Attach an empty named array, replacing any previous value under the
    /// key. Used by handlers that must report an array even with no entries.
    pub fn set_array(&mut self, key: &str) {
        self.set(key, Value::Array(Vec::new()));
    }

    /// Render the whole tree as compact JSON. Does not mutate state; an
    /// empty document serializes to `{}`.
    pub fn serialize(&self) -> Result<String, EmitError> {
        serde_json::to_string(&Value::Object(self.root.clone()))
            .map_err(|e| EmitError::Serialize(e.to_string()))
    }

    /// Read access for assertions and summaries.
    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_document_serializes_to_empty_object() {
        let doc = DocumentAssembler::new();
        assert_eq!(doc.state(), DocState::Empty);
        assert_eq!(doc.serialize().unwrap(), "{}");
    }

    #[test]
    fn write_transitions_to_accumulating() {
        let mut doc = DocumentAssembler::new();
        doc.set("sentence", "hello");
        assert_eq!(doc.state(), DocState::Accumulating);
        doc.reset();
        assert_eq!(doc.state(), DocState::Empty);
        assert!(doc.root().is_empty());
    }

    #[test]
    fn dotted_writes_share_a_prefix() {
        let mut doc = DocumentAssembler::new();
        doc.dotset("TIME.LISTEN", 100).unwrap();
        doc.dotset("TIME.STARTREC", 101).unwrap();
        doc.dotset("TIME.ENDREC", 104).unwrap();
        let parsed: Value = serde_json::from_str(&doc.serialize().unwrap()).unwrap();
        assert_eq!(
            parsed,
            json!({"TIME": {"LISTEN": 100, "STARTREC": 101, "ENDREC": 104}})
        );
    }

    #[test]
    fn dotted_writes_are_order_independent() {
        let mut forward = DocumentAssembler::new();
        forward.dotset("TIME.LISTEN", 1).unwrap();
        forward.dotset("TIME.STARTREC", 2).unwrap();

        let mut reverse = DocumentAssembler::new();
        reverse.dotset("TIME.STARTREC", 2).unwrap();
        reverse.dotset("TIME.LISTEN", 1).unwrap();

        assert_eq!(forward.serialize().unwrap(), reverse.serialize().unwrap());
    }

    #[test]
    fn dotted_write_creates_deep_intermediates() {
        let mut doc = DocumentAssembler::new();
        doc.dotset("A.B.C.D", true).unwrap();
        let parsed: Value = serde_json::from_str(&doc.serialize().unwrap()).unwrap();
        assert_eq!(parsed, json!({"A": {"B": {"C": {"D": true}}}}));
    }

    #[test]
    fn empty_segment_is_rejected() {
        let mut doc = DocumentAssembler::new();
        assert!(doc.dotset("", 1).is_err());
        assert!(doc.dotset("A..B", 1).is_err());
        assert!(doc.dotset(".A", 1).is_err());
    }

    #[test]
    fn append_builds_an_array() {
        let mut doc = DocumentAssembler::new();
        doc.append("PASS1", json!({"ID": 0})).unwrap();
        doc.append("PASS1", json!({"ID": 1})).unwrap();
        let parsed: Value = serde_json::from_str(&doc.serialize().unwrap()).unwrap();
        assert_eq!(parsed["PASS1"], json!([{"ID": 0}, {"ID": 1}]));
    }

    #[test]
    fn append_to_scalar_key_fails() {
        let mut doc = DocumentAssembler::new();
        doc.set("PASS1", 3);
        assert_eq!(
            doc.append("PASS1", json!({})),
            Err(DocumentError::NotAnArray {
                key: "PASS1".to_string()
            })
        );
    }

    #[test]
    fn serialize_round_trips_losslessly() {
        let mut doc = DocumentAssembler::new();
        doc.set("succeeded", true);
        doc.set("sentence", "hello world");
        doc.dotset("INPUT.FRAMES", 299).unwrap();
        doc.dotset("INPUT.MSEC", 2990).unwrap();
        doc.append("result", json!({"ID": 0, "STATUS": "SUCCESS"}))
            .unwrap();

        let text = doc.serialize().unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["succeeded"], json!(true));
        assert_eq!(parsed["sentence"], json!("hello world"));
        assert_eq!(parsed["INPUT"]["FRAMES"], json!(299));
        assert_eq!(parsed["result"][0]["STATUS"], json!("SUCCESS"));
        // serializing again yields the same text, state is untouched
        assert_eq!(doc.serialize().unwrap(), text);
        assert_eq!(doc.state(), DocState::Accumulating);
    }
}
