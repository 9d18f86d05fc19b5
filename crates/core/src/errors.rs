use thiserror::Error;

/// Unified error type for the entire nav-graph-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Series input ────────────────────────────────────────────────
    #[error("Invalid NAV date '{value}' at index {index}: {reason}")]
    InvalidDate {
        index: usize,
        value: String,
        reason: String,
    },

    #[error("Invalid NAV value {value} at index {index}: must be a finite number greater than zero")]
    InvalidNav { index: usize, value: f64 },

    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Configuration ───────────────────────────────────────────────
    #[error("Invalid chart dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Invalid graph settings: {0}")]
    InvalidSettings(String),

    #[error("Unknown period: '{0}' (expected one of 1M, 3M, 6M, 1Y, 3Y, 5Y, MAX)")]
    UnknownPeriod(String),

    // ── Gestures ────────────────────────────────────────────────────
    #[error("Gesture channel closed: the graph that owned it was dropped")]
    GestureChannelClosed,
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
