//! Event routing over one utterance's lifecycle
//!
//! The router implements `EngineHooks`: each engine event drives one handler
//! that writes into the utterance document, and recognition-end serializes
//! the document, pushes it through the sink and resets for the next
//! utterance. Delivery is serialized by the engine, so the router owns all
//! its state exclusively.

use serde_json::Value;
use tracing::{debug, error, info};

use voxdoc_engine::{EngineHooks, GmmResult, InputParams, PhoneLexicon, ProcessResult};
use voxdoc_foundation::SharedWallClock;

use crate::diagnostics::Diagnostic;
use crate::document::DocumentAssembler;
use crate::metrics::{shared_metrics, SharedEmitMetrics};
use crate::process::{process_result_value, status_summary_value};
use crate::sink::ResultSink;

/// Where the current utterance stands in its lifecycle.
///
/// Transitions are driven entirely by the engine's event order. The router
/// records them for observability but never rejects an event: the engine
/// controls cardinality and may legitimately skip phases (e.g. the second
/// pass after a segment rejection).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtterancePhase {
    Idle,
    Listening,
    Capturing,
    Captured,
    Pass1Done,
    Pass2Done,
}

/// Engine-event consumer assembling one JSON document per utterance.
pub struct EventRouter<L: PhoneLexicon, S: ResultSink> {
    doc: DocumentAssembler,
    phase: UtterancePhase,
    lexicon: L,
    clock: SharedWallClock,
    sink: S,
    metrics: SharedEmitMetrics,
}

impl<L: PhoneLexicon, S: ResultSink> EventRouter<L, S> {
    pub fn new(lexicon: L, clock: SharedWallClock, sink: S) -> Self {
        Self {
            doc: DocumentAssembler::new(),
            phase: UtterancePhase::Idle,
            lexicon,
            clock,
            sink,
            metrics: shared_metrics(),
        }
    }

    pub fn phase(&self) -> UtterancePhase {
        self.phase
    }

    /// Shared handle to the emit counters.
    pub fn metrics(&self) -> SharedEmitMetrics {
        self.metrics.clone()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The document under construction. Exposed for hosts that inspect
    /// partial state; the router remains the only writer.
    pub fn document(&self) -> &DocumentAssembler {
        &self.doc
    }

    fn advance(&mut self, next: UtterancePhase) {
        if self.phase != next {
            debug!(target: "voxdoc::router", from = ?self.phase, to = ?next, "phase");
            self.phase = next;
        }
    }

    /// Dotted-key write with a static path; path errors cannot occur for the
    /// fixed keys this router uses, but a failure must never abort an event.
    fn write_dot(&mut self, path: &str, value: impl Into<Value>) {
        if let Err(e) = self.doc.dotset(path, value) {
            error!(target: "voxdoc::router", path, "document write failed: {}", e);
        }
    }

    fn append(&mut self, key: &str, value: Value) {
        if let Err(e) = self.doc.append(key, value) {
            error!(target: "voxdoc::router", key, "document append failed: {}", e);
        }
    }

    fn report_diagnostics(&mut self, diagnostics: Vec<Diagnostic>) {
        if diagnostics.is_empty() {
            return;
        }
        self.metrics.write().unsupported_features += diagnostics.len() as u64;
        for diag in diagnostics {
            error!(target: "voxdoc::router", "{}", diag);
        }
    }

    /// Serialize, emit and clear the current document.
    fn finalize_utterance(&mut self) {
        match self.doc.serialize() {
            Ok(document) => match self.sink.emit(&document) {
                Ok(()) => {
                    self.metrics.write().documents_emitted += 1;
                }
                Err(e) => {
                    self.metrics.write().sink_failures += 1;
                    error!(target: "voxdoc::router", "document emit failed: {}", e);
                }
            },
            Err(e) => {
                // Fatal for this utterance only: skip emission, keep the host
                // alive, still reset for the next utterance.
                self.metrics.write().serialize_failures += 1;
                error!(target: "voxdoc::router", "document serialization failed: {}", e);
            }
        }
        self.doc.reset();
        self.advance(UtterancePhase::Idle);
    }
}

impl<L: PhoneLexicon, S: ResultSink> EngineHooks for EventRouter<L, S> {
    fn speech_ready(&mut self) {
        let now = self.clock.epoch_secs();
        info!(target: "voxdoc::router", "INPUT STATUS=LISTEN TIME={}", now);
        self.write_dot("TIME.LISTEN", now);
        self.advance(UtterancePhase::Listening);
    }

    fn speech_start(&mut self) {
        let now = self.clock.epoch_secs();
        info!(target: "voxdoc::router", "INPUT STATUS=STARTREC TIME={}", now);
        self.write_dot("TIME.STARTREC", now);
        self.advance(UtterancePhase::Capturing);
    }

    fn speech_stop(&mut self) {
        let now = self.clock.epoch_secs();
        info!(target: "voxdoc::router", "INPUT STATUS=ENDREC TIME={}", now);
        self.write_dot("TIME.ENDREC", now);
        self.advance(UtterancePhase::Captured);
    }

    fn pass1_begin(&mut self) {
        info!(target: "voxdoc::router", "PASS1_STARTRECOG");
    }

    fn pass1_interim(&mut self) {
        debug!(target: "voxdoc::router", "PASS1_INTERIM");
    }

    fn pass1_final(&mut self, results: &[ProcessResult]) {
        // The array exists even when no configuration is live.
        self.doc.set_array("PASS1");
        for result in results.iter().filter(|r| r.config.live) {
            let summary = status_summary_value(result);
            self.append("PASS1", summary);
        }
        self.advance(UtterancePhase::Pass1Done);
    }

    fn pass1_end(&mut self) {
        info!(target: "voxdoc::router", "PASS1_ENDRECOG");
    }

    fn status_param(&mut self, params: &InputParams) {
        if params.streams.len() > 1 {
            self.doc.set_array("INPUT");
            for stream in &params.streams {
                let mut entry = serde_json::Map::new();
                entry.insert("MFCCID".to_string(), Value::from(stream.mfcc_id));
                entry.insert("FRAMES".to_string(), Value::from(stream.frames));
                entry.insert("MSEC".to_string(), Value::from(params.msec(stream)));
                self.append("INPUT", Value::Object(entry));
            }
        } else if let Some(stream) = params.streams.first() {
            let msec = params.msec(stream);
            self.write_dot("INPUT.FRAMES", stream.frames);
            self.write_dot("INPUT.MSEC", msec);
        }
    }

    fn result(&mut self, results: &[ProcessResult]) {
        self.doc.set_array("RECOGOUT");
        let mut diagnostics = Vec::new();
        for result in results.iter().filter(|r| r.config.live) {
            let value = process_result_value(result, &self.lexicon, &mut diagnostics);
            self.append("RECOGOUT", value);
        }
        self.report_diagnostics(diagnostics);
        self.advance(UtterancePhase::Pass2Done);
    }

    fn result_gmm(&mut self, gmm: &GmmResult) {
        self.write_dot("GMM.RESULT", gmm.best_name.clone());
        if let Some(cm) = gmm.cm_score {
            self.write_dot("GMM.CMSCORE", cm);
        }
    }

    fn best_sentence(&mut self, text: Option<&str>) {
        // A missing sentence is an explicit empty string, never an omitted
        // field.
        self.doc.set("sentence", text.unwrap_or(""));
        self.doc.set("succeeded", text.is_some());
    }

    fn segment_end(&mut self) {
        info!(target: "voxdoc::router", "SEGMENT_END");
    }

    fn recognition_end(&mut self, results: &[ProcessResult]) {
        self.doc.set_array("result");
        for result in results.iter().filter(|r| r.config.live) {
            let summary = status_summary_value(result);
            self.append("result", summary);
        }
        self.finalize_utterance();
        info!(target: "voxdoc::router", "RECOGNITION_END");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::CaptureSink;
    use voxdoc_engine::{
        CenterNameLexicon, ConfidenceMode, FeatureStream, LmKind, ProcessConfig,
    };
    use voxdoc_foundation::test_wall_clock;

    fn router() -> EventRouter<CenterNameLexicon, CaptureSink> {
        EventRouter::new(
            CenterNameLexicon::new(),
            test_wall_clock(1_700_000_000),
            CaptureSink::new(),
        )
    }

    fn live_result(id: i64, status: i64) -> ProcessResult {
        ProcessResult {
            config: ProcessConfig {
                id,
                name: format!("sr{}", id),
                live: true,
                lm_kind: LmKind::Statistical,
                mbr_enabled: false,
                confidence: ConfidenceMode::Disabled,
            },
            status,
            sentences: vec![],
        }
    }

    #[test]
    fn lifecycle_phases_follow_events() {
        let mut router = router();
        assert_eq!(router.phase(), UtterancePhase::Idle);
        router.speech_ready();
        assert_eq!(router.phase(), UtterancePhase::Listening);
        router.speech_start();
        assert_eq!(router.phase(), UtterancePhase::Capturing);
        router.speech_stop();
        assert_eq!(router.phase(), UtterancePhase::Captured);
        router.pass1_final(&[]);
        assert_eq!(router.phase(), UtterancePhase::Pass1Done);
        router.result(&[]);
        assert_eq!(router.phase(), UtterancePhase::Pass2Done);
        router.recognition_end(&[]);
        assert_eq!(router.phase(), UtterancePhase::Idle);
    }

    #[test]
    fn timestamps_land_under_dotted_time_keys() {
        let mut router = EventRouter::new(
            CenterNameLexicon::new(),
            test_wall_clock(1_700_000_000),
            CaptureSink::new(),
        );
        router.speech_ready();
        router.speech_start();
        router.speech_stop();
        let root = router.document().root();
        assert_eq!(root["TIME"]["LISTEN"], 1_700_000_000i64);
        assert_eq!(root["TIME"]["STARTREC"], 1_700_000_000i64);
        assert_eq!(root["TIME"]["ENDREC"], 1_700_000_000i64);
    }

    #[test]
    fn single_stream_input_is_flat() {
        let mut router = router();
        router.status_param(&InputParams {
            streams: vec![FeatureStream {
                mfcc_id: 0,
                frames: 299,
            }],
            period: 625.0,
            frameshift: 160.0,
        });
        let root = router.document().root();
        assert_eq!(root["INPUT"]["FRAMES"], 299);
        assert_eq!(root["INPUT"]["MSEC"], 2990);
    }

    #[test]
    fn multi_stream_input_is_an_array() {
        let mut router = router();
        router.status_param(&InputParams {
            streams: vec![
                FeatureStream {
                    mfcc_id: 0,
                    frames: 100,
                },
                FeatureStream {
                    mfcc_id: 1,
                    frames: 200,
                },
            ],
            period: 625.0,
            frameshift: 160.0,
        });
        let root = router.document().root();
        let input = root["INPUT"].as_array().expect("INPUT array");
        assert_eq!(input.len(), 2);
        assert_eq!(input[0]["MFCCID"], 0);
        assert_eq!(input[0]["FRAMES"], 100);
        assert_eq!(input[0]["MSEC"], 1000);
        assert_eq!(input[1]["MFCCID"], 1);
        assert_eq!(input[1]["MSEC"], 2000);
    }

    #[test]
    fn non_live_configurations_are_filtered_everywhere() {
        let mut dead = live_result(7, 0);
        dead.config.live = false;
        let results = [live_result(0, 0), dead];

        let mut router = router();
        router.pass1_final(&results);
        router.result(&results);
        router.recognition_end(&results);

        let doc: Value =
            serde_json::from_str(&router.sink().documents()[0]).unwrap();
        assert_eq!(doc["PASS1"].as_array().unwrap().len(), 1);
        assert_eq!(doc["RECOGOUT"].as_array().unwrap().len(), 1);
        assert_eq!(doc["result"].as_array().unwrap().len(), 1);
        assert_eq!(doc["PASS1"][0]["ID"], 0);
    }

    #[test]
    fn gmm_result_is_written_with_optional_score() {
        let mut with_score = router();
        with_score.result_gmm(&GmmResult {
            best_name: "adult".to_string(),
            cm_score: Some(0.88),
        });
        let root = with_score.document().root();
        assert_eq!(root["GMM"]["RESULT"], "adult");
        assert_eq!(root["GMM"]["CMSCORE"], 0.88);

        let mut without_score = router();
        without_score.result_gmm(&GmmResult {
            best_name: "noise".to_string(),
            cm_score: None,
        });
        let root = without_score.document().root();
        assert_eq!(root["GMM"]["RESULT"], "noise");
        assert!(root["GMM"].get("CMSCORE").is_none());
    }

    #[test]
    fn missing_best_sentence_is_empty_string() {
        let mut router = router();
        router.best_sentence(None);
        let root = router.document().root();
        assert_eq!(root["sentence"], "");
        assert_eq!(root["succeeded"], false);

        router.best_sentence(Some("hello world"));
        let root = router.document().root();
        assert_eq!(root["sentence"], "hello world");
        assert_eq!(root["succeeded"], true);
    }

    #[test]
    fn recognition_end_emits_and_resets() {
        let mut router = router();
        router.speech_ready();
        router.recognition_end(&[live_result(0, -1)]);

        assert_eq!(router.sink().documents().len(), 1);
        let doc: Value =
            serde_json::from_str(&router.sink().documents()[0]).unwrap();
        assert_eq!(doc["result"][0]["STATUS"], "RECOGFAIL");
        assert_eq!(doc["result"][0]["succeeded"], false);

        // prior utterance left nothing behind
        assert!(router.document().root().is_empty());
        assert_eq!(router.metrics().read().documents_emitted, 1);

        // the next utterance starts from a clean tree
        router.speech_start();
        assert!(router.document().root().get("TIME").is_some());
        assert!(router.document().root()["TIME"].get("LISTEN").is_none());
    }
}
