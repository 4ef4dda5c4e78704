use thiserror::Error;

/// Errors raised while emitting an utterance document.
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("Serialization failed: {0}")]
    Serialize(String),

    #[error("Output sink error: {0}")]
    Sink(#[from] std::io::Error),
}

/// Errors raised by document tree writes.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DocumentError {
    #[error("Dotted key {key:?} has an empty segment")]
    EmptyKeySegment { key: String },

    #[error("Key {key:?} already holds a non-array value")]
    NotAnArray { key: String },
}
