use super::BlobKind;

/// Errors that can occur while encoding or decoding a blob
#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    /// JSON serialization/deserialization error
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Blob decoded with the codec of another field kind
    #[error("Blob kind mismatch: expected {expected}, found {found}")]
    KindMismatch {
        /// Kind of the codec used
        expected: BlobKind,
        /// Kind the blob was encoded as
        found: BlobKind,
    },
}
