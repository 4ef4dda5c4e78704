//! Engine event hook interface
//!
//! The engine drives its consumers through a fixed set of named event slots,
//! invoked synchronously and in delivery order for one utterance at a time.
//! A consumer implements `EngineHooks`; the host attaches it to the engine's
//! dispatcher. Detached dispatchers swallow every event, which is how the
//! "output disabled" switch is realized.

use crate::types::{GmmResult, InputParams, ProcessResult};

/// One method per engine event slot.
///
/// Default implementations ignore the event, so a consumer only overrides
/// the slots it cares about. All methods take `&mut self`: delivery is
/// serialized per utterance and handlers own their state exclusively.
pub trait EngineHooks {
    /// Engine is ready and waiting for speech input.
    fn speech_ready(&mut self) {}

    /// Speech input triggered and capture started.
    fn speech_start(&mut self) {}

    /// Speech input ended.
    fn speech_stop(&mut self) {}

    /// First decoding pass is starting.
    fn pass1_begin(&mut self) {}

    /// Interim first-pass hypothesis update.
    fn pass1_interim(&mut self) {}

    /// Final first-pass result, one entry per configuration.
    fn pass1_final(&mut self, results: &[ProcessResult]) {
        let _ = results;
    }

    /// First decoding pass finished.
    fn pass1_end(&mut self) {}

    /// Input statistics for the captured segment.
    fn status_param(&mut self, params: &InputParams) {
        let _ = params;
    }

    /// Final (second-pass) recognition result, one entry per configuration.
    /// Also delivered when the utterance was rejected before the second pass.
    fn result(&mut self, results: &[ProcessResult]) {
        let _ = results;
    }

    /// GMM input classification result.
    fn result_gmm(&mut self, gmm: &GmmResult) {
        let _ = gmm;
    }

    /// Best final sentence string, `None` when recognition produced none.
    fn best_sentence(&mut self, text: Option<&str>) {
        let _ = text;
    }

    /// Decoder segmented the input (short-pause segmentation).
    fn segment_end(&mut self) {}

    /// All processing for the utterance is complete. Carries the final state
    /// of every configuration so consumers can summarize the utterance.
    fn recognition_end(&mut self, results: &[ProcessResult]) {
        let _ = results;
    }
}

/// Host-side attachment point for one hook consumer.
///
/// Mirrors the engine's callback registration: when no consumer is attached
/// every event is dropped, so disabling output is a matter of never calling
/// `attach`.
#[derive(Default)]
pub struct HookDispatcher {
    hooks: Option<Box<dyn EngineHooks>>,
}

impl HookDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a consumer; replaces any previous one.
    pub fn attach(&mut self, hooks: Box<dyn EngineHooks>) {
        tracing::debug!(target: "voxdoc::engine", "hook consumer attached");
        self.hooks = Some(hooks);
    }

    /// Detach the current consumer, if any.
    pub fn detach(&mut self) -> Option<Box<dyn EngineHooks>> {
        self.hooks.take()
    }

    pub fn is_attached(&self) -> bool {
        self.hooks.is_some()
    }

    pub fn speech_ready(&mut self) {
        if let Some(h) = self.hooks.as_mut() {
            h.speech_ready();
        }
    }

    pub fn speech_start(&mut self) {
        if let Some(h) = self.hooks.as_mut() {
            h.speech_start();
        }
    }

    pub fn speech_stop(&mut self) {
        if let Some(h) = self.hooks.as_mut() {
            h.speech_stop();
        }
    }

    pub fn pass1_begin(&mut self) {
        if let Some(h) = self.hooks.as_mut() {
            h.pass1_begin();
        }
    }

    pub fn pass1_interim(&mut self) {
        if let Some(h) = self.hooks.as_mut() {
            h.pass1_interim();
        }
    }

    pub fn pass1_final(&mut self, results: &[ProcessResult]) {
        if let Some(h) = self.hooks.as_mut() {
            h.pass1_final(results);
        }
    }

    pub fn pass1_end(&mut self) {
        if let Some(h) = self.hooks.as_mut() {
            h.pass1_end();
        }
    }

    pub fn status_param(&mut self, params: &InputParams) {
        if let Some(h) = self.hooks.as_mut() {
            h.status_param(params);
        }
    }

    pub fn result(&mut self, results: &[ProcessResult]) {
        if let Some(h) = self.hooks.as_mut() {
            h.result(results);
        }
    }

    pub fn result_gmm(&mut self, gmm: &GmmResult) {
        if let Some(h) = self.hooks.as_mut() {
            h.result_gmm(gmm);
        }
    }

    pub fn best_sentence(&mut self, text: Option<&str>) {
        if let Some(h) = self.hooks.as_mut() {
            h.best_sentence(text);
        }
    }

    pub fn segment_end(&mut self) {
        if let Some(h) = self.hooks.as_mut() {
            h.segment_end();
        }
    }

    pub fn recognition_end(&mut self, results: &[ProcessResult]) {
        if let Some(h) = self.hooks.as_mut() {
            h.recognition_end(results);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingHooks {
        calls: std::rc::Rc<std::cell::Cell<u32>>,
    }

    impl EngineHooks for CountingHooks {
        fn speech_ready(&mut self) {
            self.calls.set(self.calls.get() + 1);
        }
        fn recognition_end(&mut self, _results: &[ProcessResult]) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    #[test]
    fn detached_dispatcher_drops_events() {
        let mut dispatcher = HookDispatcher::new();
        assert!(!dispatcher.is_attached());
        // Must not panic with no consumer attached.
        dispatcher.speech_ready();
        dispatcher.recognition_end(&[]);
    }

    #[test]
    fn attached_consumer_receives_events() {
        let calls = std::rc::Rc::new(std::cell::Cell::new(0));
        let mut dispatcher = HookDispatcher::new();
        dispatcher.attach(Box::new(CountingHooks {
            calls: calls.clone(),
        }));
        dispatcher.speech_ready();
        dispatcher.recognition_end(&[]);
        assert_eq!(calls.get(), 2);

        dispatcher.detach();
        dispatcher.speech_ready();
        assert_eq!(calls.get(), 2);
    }
}
