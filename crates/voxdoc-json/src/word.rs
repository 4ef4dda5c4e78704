//! Per-word field rendering
//!
//! One recognized word becomes a flat `{WORD, CLASSID, PHONE}` field set.
//! PHONE is the word's sub-unit sequence rendered through the lexicon's
//! center-name lookup and joined with single spaces.

use serde_json::{Map, Value};

use voxdoc_engine::{PhoneLexicon, Word};

/// Render one word into its document fields.
///
/// The caller may add further fields (confidence, frame alignment) to the
/// returned object before attaching it to the hypothesis.
pub fn word_fields(word: &Word, lexicon: &dyn PhoneLexicon) -> Map<String, Value> {
    let phone = word
        .units
        .iter()
        .map(|unit| lexicon.center_name(unit))
        .collect::<Vec<_>>()
        .join(" ");

    let mut fields = Map::new();
    fields.insert("WORD".to_string(), Value::from(word.surface.clone()));
    fields.insert("CLASSID".to_string(), Value::from(word.class_label.clone()));
    fields.insert("PHONE".to_string(), Value::from(phone));
    fields
}
