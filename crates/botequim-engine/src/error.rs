//! Engine error types.
//!
//! Only infrastructure failures cross the engine boundary as errors.
//! Domain rejections (table full, insufficient balance, pots full, trade
//! limit) surface as [`Notice`](botequim_core::Notice) events and a `false`
//! return — they are outcomes, not faults.

use botequim_store::StoreError;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Infrastructure failures within the session engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The store boundary failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The session document could not be serialized for the store.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
