//! Recognition status resolution
//!
//! The engine reports the per-configuration outcome as a signed code: 0 is
//! success, negative values are rejections, failures or termination. The
//! mapping to display categories is total; codes this module does not know
//! resolve to `Unknown` rather than an error.

/// Engine status code for a successful recognition.
pub const STATUS_SUCCESS: i64 = 0;
/// Recognition ran but produced no result.
pub const STATUS_FAIL: i64 = -1;
/// Input rejected as too long.
pub const STATUS_REJECT_LONG: i64 = -4;
/// Input rejected as too short.
pub const STATUS_REJECT_SHORT: i64 = -5;
/// Input rejected by the GMM classifier.
pub const STATUS_REJECT_GMM: i64 = -6;
/// Result contained only pause words.
pub const STATUS_ONLY_SILENCE: i64 = -7;
/// Input terminated by an external request.
pub const STATUS_TERMINATE: i64 = -8;
/// Input rejected by the power threshold.
pub const STATUS_REJECT_POWER: i64 = -9;

/// Human-readable category of a recognition outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionStatus {
    Success,
    RejectedByPower,
    TerminatedByRequest,
    RejectedSilenceOnly,
    RejectedByGmm,
    RejectedTooShort,
    RejectedTooLong,
    RecognitionFailed,
    Unknown,
}

impl RecognitionStatus {
    /// Resolve an engine status code. Total: unmapped codes yield `Unknown`.
    pub fn from_code(code: i64) -> Self {
        match code {
            STATUS_SUCCESS => Self::Success,
            STATUS_REJECT_POWER => Self::RejectedByPower,
            STATUS_TERMINATE => Self::TerminatedByRequest,
            STATUS_ONLY_SILENCE => Self::RejectedSilenceOnly,
            STATUS_REJECT_GMM => Self::RejectedByGmm,
            STATUS_REJECT_SHORT => Self::RejectedTooShort,
            STATUS_REJECT_LONG => Self::RejectedTooLong,
            STATUS_FAIL => Self::RecognitionFailed,
            _ => Self::Unknown,
        }
    }

    /// Display string used in output documents. The wording is fixed for
    /// compatibility with existing consumers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::RejectedByPower => "REJECTED: by power",
            Self::TerminatedByRequest => "input terminated by request",
            Self::RejectedSilenceOnly => "REJECTED: result has pause words only",
            Self::RejectedByGmm => "REJECTED: by GMM",
            Self::RejectedTooShort => "REJECTED: too short input",
            Self::RejectedTooLong => "REJECTED: too long input",
            Self::RecognitionFailed => "RECOGFAIL",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Display string for an engine status code.
pub fn status_label(code: i64) -> &'static str {
    RecognitionStatus::from_code(code).label()
}
