//! Per-utterance JSON document assembly for recognition results
//!
//! This crate turns the event stream of a multi-pass recognition engine into
//! one structured JSON document per utterance. The `EventRouter` implements
//! the engine's hook interface, routes each event into the growing document
//! tree, and on recognition-end serializes the tree, emits it through a
//! `ResultSink` as a single `JSON> <doc>` line, and resets for the next
//! utterance.

pub mod diagnostics;
pub mod document;
pub mod hypothesis;
pub mod metrics;
pub mod process;
pub mod router;
pub mod sink;
pub mod status;
pub mod word;

pub use diagnostics::Diagnostic;
pub use document::{DocState, DocumentAssembler};
pub use metrics::{EmitMetrics, SharedEmitMetrics};
pub use router::{EventRouter, UtterancePhase};
pub use sink::{CaptureSink, ResultSink, StdoutSink, JSON_PREFIX};
pub use status::RecognitionStatus;
