//! Ranked-hypothesis assembly
//!
//! One sentence hypothesis becomes one object: rank, scores, LM-specific
//! metadata and the WHYPO word array. Which score fields appear is driven by
//! the owning configuration's capabilities, never by compile-time switches;
//! absent optional data is omitted, not an error.

use serde_json::{Map, Value};

use voxdoc_engine::{AlignUnit, ConfidenceMode, Hypothesis, LmKind, PhoneLexicon, ProcessConfig};

use crate::diagnostics::Diagnostic;
use crate::word::word_fields;

/// Build the document object for one hypothesis.
///
/// `rank` is 1-based. Unsupported-feature conditions (non-word alignment
/// granularity, multi-stream confidence) are pushed to `diagnostics`; the
/// affected fields are omitted and assembly continues.
pub fn hypothesis_value(
    hypo: &Hypothesis,
    rank: usize,
    config: &ProcessConfig,
    lexicon: &dyn PhoneLexicon,
    diagnostics: &mut Vec<Diagnostic>,
) -> Value {
    let mut obj = Map::new();
    obj.insert("RANK".to_string(), Value::from(rank as i64));
    if config.mbr_enabled {
        if let Some(mbr) = hypo.mbr_score {
            obj.insert("MBRSCORE".to_string(), Value::from(mbr));
        }
    }
    obj.insert("SCORE".to_string(), Value::from(hypo.score));
    match config.lm_kind {
        LmKind::Statistical => {
            if let Some(am) = hypo.am_score {
                obj.insert("AMSCORE".to_string(), Value::from(am));
            }
            if let Some(lm) = hypo.lm_score {
                obj.insert("LMSCORE".to_string(), Value::from(lm));
            }
        }
        LmKind::Grammar => {
            if let Some(gram) = hypo.gram_id {
                obj.insert("GRAM".to_string(), Value::from(gram));
            }
        }
    }

    // Non-word alignment blocks cannot be attached per word; report each
    // offending block once for the whole hypothesis.
    for alignment in &hypo.alignments {
        if alignment.unit != AlignUnit::Word {
            let diag = Diagnostic::UnsupportedAlignment {
                unit: alignment.unit,
            };
            if !diagnostics.contains(&diag) {
                diagnostics.push(diag);
            }
        }
    }

    let mut whypo = Vec::with_capacity(hypo.words.len());
    for (i, word) in hypo.words.iter().enumerate() {
        let mut fields = word_fields(word, lexicon);
        match config.confidence {
            ConfidenceMode::Single => {
                if let Some(cm) = word.confidence {
                    fields.insert("CM".to_string(), Value::from(cm));
                }
            }
            ConfidenceMode::MultipleAlpha => {
                if !diagnostics.contains(&Diagnostic::UnsupportedConfidenceMode) {
                    diagnostics.push(Diagnostic::UnsupportedConfidenceMode);
                }
            }
            ConfidenceMode::Disabled => {}
        }
        for alignment in &hypo.alignments {
            if alignment.unit != AlignUnit::Word {
                continue;
            }
            if let Some(span) = alignment.spans.get(i) {
                fields.insert("BEGINFRAME".to_string(), Value::from(span.begin));
                fields.insert("ENDFRAME".to_string(), Value::from(span.end));
            }
        }
        whypo.push(Value::Object(fields));
    }
    obj.insert("WHYPO".to_string(), Value::Array(whypo));

    Value::Object(obj)
}
