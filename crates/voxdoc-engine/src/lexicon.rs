//! Phone-name lookup
//!
//! Words carry raw phonetic sub-unit names as the acoustic model knows them,
//! which for context-dependent models means triphone names like `k-a+b`.
//! Output documents use the canonical center name (`a`). The lexicon
//! subsystem owning the model provides the lookup; `CenterNameLexicon` is the
//! standard implementation for the `L-C+R` naming convention.

/// Lookup of the canonical display name of one phonetic sub-unit.
pub trait PhoneLexicon {
    /// Canonical center name for a raw sub-unit name.
    fn center_name(&self, raw: &str) -> String;
}

/// Extracts the center phone from `L-C+R` style context-dependent names.
///
/// `k-a+b` yields `a`, `a+b` yields `a`, `k-a` yields `a`, and a plain
/// monophone name passes through unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct CenterNameLexicon;

impl CenterNameLexicon {
    pub fn new() -> Self {
        Self
    }
}

impl PhoneLexicon for CenterNameLexicon {
    fn center_name(&self, raw: &str) -> String {
        let after_left = match raw.find('-') {
            Some(idx) => &raw[idx + 1..],
            None => raw,
        };
        let center = match after_left.find('+') {
            Some(idx) => &after_left[..idx],
            None => after_left,
        };
        center.to_string()
    }
}
