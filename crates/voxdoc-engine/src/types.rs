//! Event payload types handed over by the recognition engine
//!
//! Every struct here is a per-utterance snapshot: the engine produces it
//! fresh for each utterance and the consumer treats it as read-only.

use serde::{Deserialize, Serialize};

/// Language model kind of one recognizer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LmKind {
    /// Statistical (n-gram) language model; hypotheses carry separate
    /// acoustic and language model scores.
    Statistical,
    /// Rule-based grammar; hypotheses carry the id of the matched grammar.
    Grammar,
}

/// Confidence scoring mode of one recognizer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceMode {
    /// Confidence scoring disabled.
    Disabled,
    /// One confidence stream; per-word scores are available.
    Single,
    /// Multiple simultaneous smearing factors. Producing per-word output for
    /// this mode is unsupported downstream.
    MultipleAlpha,
}

/// One parallel recognizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessConfig {
    /// Numeric configuration id assigned by the engine.
    pub id: i64,
    /// Display name of the configuration.
    pub name: String,
    /// Whether this configuration is live for the current utterance.
    /// Results for non-live configurations must not be reported.
    pub live: bool,
    pub lm_kind: LmKind,
    /// Minimum-Bayes-risk rescoring enabled.
    pub mbr_enabled: bool,
    pub confidence: ConfidenceMode,
}

/// Recognition outcome of one configuration for the current utterance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResult {
    pub config: ProcessConfig,
    /// Raw engine status code. Negative values are rejections/failures,
    /// non-negative means success.
    pub status: i64,
    /// Ranked sentence hypotheses, best first. Empty unless `status >= 0`.
    pub sentences: Vec<Hypothesis>,
}

impl ProcessResult {
    /// Success flag derived from the status code.
    pub fn succeeded(&self) -> bool {
        self.status >= 0
    }
}

/// One ranked candidate sentence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hypothesis {
    /// Total hypothesis score.
    pub score: f64,
    /// Acoustic model component score; supplied for statistical LMs.
    pub am_score: Option<f64>,
    /// Language model component score; supplied for statistical LMs.
    pub lm_score: Option<f64>,
    /// Id of the grammar the hypothesis matched; supplied for grammar LMs.
    pub gram_id: Option<i64>,
    /// MBR rescoring score; supplied when MBR is enabled.
    pub mbr_score: Option<f64>,
    /// Recognized words in sentence order.
    pub words: Vec<Word>,
    /// Alignment blocks attached to this hypothesis. Each block's spans are
    /// indexed in parallel with `words` when its unit is `AlignUnit::Word`.
    pub alignments: Vec<Alignment>,
}

/// One recognized lexical unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    /// Surface form as written to output.
    pub surface: String,
    /// Class / category label from the dictionary.
    pub class_label: String,
    /// Raw names of the phonetic sub-units making up this word, in order.
    pub units: Vec<String>,
    /// Per-word confidence score, when confidence scoring supplies one.
    pub confidence: Option<f64>,
}

/// Granularity of an alignment block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlignUnit {
    Word,
    Phoneme,
    State,
}

/// Frame-level alignment of one hypothesis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alignment {
    pub unit: AlignUnit,
    /// Begin/end frame index per aligned unit.
    pub spans: Vec<FrameSpan>,
}

/// Inclusive begin/end frame indices of one aligned unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSpan {
    pub begin: i64,
    pub end: i64,
}

/// Per-stream statistics of one audio feature stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureStream {
    /// Engine-assigned id of the feature extraction instance.
    pub mfcc_id: i64,
    /// Number of feature frames extracted for the utterance.
    pub frames: i64,
}

/// Input statistics delivered by the status-param event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputParams {
    /// One entry per active feature stream; at least one.
    pub streams: Vec<FeatureStream>,
    /// Sampling period in engine units (100 ns).
    pub period: f64,
    /// Frame shift in samples.
    pub frameshift: f64,
}

impl InputParams {
    /// Input length of one stream in milliseconds, using the engine's unit
    /// conversion: `frames * period * frameshift / 10000.0`, truncated to an
    /// integer exactly as the engine's reference output does.
    pub fn msec(&self, stream: &FeatureStream) -> i64 {
        (stream.frames as f64 * self.period * self.frameshift / 10000.0) as i64
    }
}

/// Result of the GMM input classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GmmResult {
    /// Name of the top-scoring class.
    pub best_name: String,
    /// Confidence of the decision, when confidence scoring is enabled.
    pub cm_score: Option<f64>,
}
