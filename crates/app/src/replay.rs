//! Canned utterance replay
//!
//! Drives the hook dispatcher with the event sequence a live engine would
//! produce for one utterance, so the output path can be exercised without a
//! recognition engine attached.

use voxdoc_engine::{
    ConfidenceMode, FeatureStream, GmmResult, HookDispatcher, Hypothesis, InputParams, LmKind,
    ProcessConfig, ProcessResult, Word,
};

fn word(surface: &str, units: &[&str]) -> Word {
    Word {
        surface: surface.to_string(),
        class_label: surface.to_string(),
        units: units.iter().map(|u| u.to_string()).collect(),
        confidence: None,
    }
}

fn demo_results() -> Vec<ProcessResult> {
    vec![ProcessResult {
        config: ProcessConfig {
            id: 0,
            name: "_default".to_string(),
            live: true,
            lm_kind: LmKind::Statistical,
            mbr_enabled: false,
            confidence: ConfidenceMode::Disabled,
        },
        status: 0,
        sentences: vec![Hypothesis {
            score: 12.34,
            am_score: Some(-3050.25),
            lm_score: Some(-42.5),
            gram_id: None,
            mbr_score: None,
            words: vec![
                word("hello", &["h", "eh", "l", "ow"]),
                word("world", &["w", "er", "l", "d"]),
            ],
            alignments: vec![],
        }],
    }]
}

/// Replay one successful utterance through the dispatcher.
pub fn replay_utterance(dispatcher: &mut HookDispatcher) {
    let results = demo_results();

    dispatcher.speech_ready();
    dispatcher.speech_start();
    dispatcher.pass1_begin();
    dispatcher.pass1_interim();
    dispatcher.speech_stop();
    dispatcher.pass1_final(&results);
    dispatcher.pass1_end();
    dispatcher.status_param(&InputParams {
        streams: vec![FeatureStream {
            mfcc_id: 0,
            frames: 299,
        }],
        period: 625.0,
        frameshift: 160.0,
    });
    dispatcher.result(&results);
    dispatcher.result_gmm(&GmmResult {
        best_name: "adult".to_string(),
        cm_score: None,
    });
    dispatcher.best_sentence(Some("hello world"));
    dispatcher.segment_end();
    dispatcher.recognition_end(&results);
}
