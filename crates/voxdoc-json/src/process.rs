//! Per-configuration result assembly
//!
//! One parallel recognizer configuration contributes one object per array it
//! appears in: identity, resolved status, success flag, and (for successful
//! final results) the ranked SHYPO hypothesis array. Results for
//! configurations that are not live never reach the document.

use serde_json::{Map, Value};

use voxdoc_engine::{PhoneLexicon, ProcessResult};

use crate::diagnostics::Diagnostic;
use crate::hypothesis::hypothesis_value;
use crate::status::status_label;

/// Identity-and-status summary used by the PASS1 and `result` arrays.
pub fn status_summary_value(result: &ProcessResult) -> Value {
    let mut obj = Map::new();
    obj.insert("ID".to_string(), Value::from(result.config.id));
    obj.insert("NAME".to_string(), Value::from(result.config.name.clone()));
    obj.insert(
        "STATUS".to_string(),
        Value::from(status_label(result.status)),
    );
    obj.insert("succeeded".to_string(), Value::from(result.succeeded()));
    Value::Object(obj)
}

/// Build the RECOGOUT entry for one configuration.
///
/// A failed configuration keeps its identity and status but carries no SHYPO
/// key at all. Hypotheses arrive ranked; their input order is preserved.
pub fn process_result_value(
    result: &ProcessResult,
    lexicon: &dyn PhoneLexicon,
    diagnostics: &mut Vec<Diagnostic>,
) -> Value {
    let mut value = status_summary_value(result);
    if !result.succeeded() {
        return value;
    }

    let shypo: Vec<Value> = result
        .sentences
        .iter()
        .enumerate()
        .map(|(n, hypo)| hypothesis_value(hypo, n + 1, &result.config, lexicon, diagnostics))
        .collect();
    if let Value::Object(obj) = &mut value {
        obj.insert("SHYPO".to_string(), Value::Array(shypo));
    }
    value
}
