//! Unsupported-feature diagnostics
//!
//! Some engine features have no defined document shape. Builders report them
//! through this side channel; the affected fields are omitted from the
//! document and the utterance proceeds.

use voxdoc_engine::AlignUnit;

/// A condition the serializer cannot represent in the output document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// Alignment data at a granularity other than word level.
    UnsupportedAlignment { unit: AlignUnit },
    /// Per-word confidence with multiple simultaneous confidence streams.
    UnsupportedConfidenceMode,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::UnsupportedAlignment { unit } => write!(
                f,
                "{:?}-level alignment is not supported for document output",
                unit
            ),
            Diagnostic::UnsupportedConfidenceMode => {
                write!(f, "multiple confidence streams are not supported for document output")
            }
        }
    }
}
