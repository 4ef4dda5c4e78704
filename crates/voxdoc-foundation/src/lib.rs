//! Foundation types for voxdoc
//!
//! Error taxonomy shared by the serializer crates and a wall-clock
//! abstraction so time-stamped document fields stay deterministic in tests.

pub mod clock;
pub mod error;

pub use clock::*;
pub use error::*;
