//! Engine-facing interface layer for voxdoc
//!
//! The recognition engine itself is an external collaborator. This crate
//! defines the read-only snapshot types its events carry, the `EngineHooks`
//! trait a result consumer implements to receive those events, and the
//! phone-lexicon lookup used to render sub-word unit names.

pub mod hooks;
pub mod lexicon;
pub mod types;

pub use hooks::{EngineHooks, HookDispatcher};
pub use lexicon::{CenterNameLexicon, PhoneLexicon};
pub use types::*;
