//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`CatpointError`] via `From` at the port boundary.

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum CatpointError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested item does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The repository failed to read or write.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The image classifier failed.
    #[error("classifier error")]
    Classifier(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A name field was empty.
    #[error("name must not be empty")]
    EmptyName,

    /// A sensor type string did not match any known type.
    #[error("unknown sensor type: {0}")]
    UnknownSensorType(String),
}

/// Lookup of a missing item.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of the missing item (e.g. `"Sensor"`).
    pub entity: &'static str,
    /// Human-readable identifier of the missing item.
    pub id: String,
}
