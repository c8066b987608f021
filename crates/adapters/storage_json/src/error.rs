//! Storage-specific error type wrapping IO and JSON errors.

use catpoint_domain::error::CatpointError;

/// Errors originating from the JSON storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the snapshot file failed.
    #[error("snapshot file error")]
    Io(#[from] std::io::Error),

    /// The snapshot could not be encoded or decoded.
    #[error("snapshot JSON error")]
    Json(#[from] serde_json::Error),
}

impl From<StorageError> for CatpointError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
