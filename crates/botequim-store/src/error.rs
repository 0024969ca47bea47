//! Error types for the store boundary.

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Failures at the document store boundary.
///
/// These are infrastructure errors only — a write that the store accepts
/// but another client later overwrites is not an error in this model.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The whole-document replace could not be delivered.
    #[error("replace failed for '{path}': {reason}")]
    ReplaceFailed { path: String, reason: String },

    /// A subscription could not be established.
    #[error("subscribe failed for '{path}': {reason}")]
    SubscribeFailed { path: String, reason: String },

    /// The document could not be serialized for transport.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_name_the_offending_path() {
        let err = StoreError::ReplaceFailed {
            path: "TAB-0-0-0".into(),
            reason: "offline".into(),
        };
        assert!(err.to_string().contains("TAB-0-0-0"));
    }
}
