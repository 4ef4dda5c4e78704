//! Emit metrics

use std::sync::Arc;

use parking_lot::RwLock;

/// Counters for the document emission path.
#[derive(Debug, Clone, Default)]
pub struct EmitMetrics {
    /// Documents serialized and written to the sink.
    pub documents_emitted: u64,
    /// Serialization failures (document skipped).
    pub serialize_failures: u64,
    /// Sink write failures (document lost after serialization).
    pub sink_failures: u64,
    /// Unsupported-feature diagnostics reported by builders.
    pub unsupported_features: u64,
}

/// Shared handle so hosts can read counters while the router owns them.
pub type SharedEmitMetrics = Arc<RwLock<EmitMetrics>>;

/// Fresh shared metrics.
pub fn shared_metrics() -> SharedEmitMetrics {
    Arc::new(RwLock::new(EmitMetrics::default()))
}
