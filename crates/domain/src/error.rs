//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`PotHubError`]
//! via `#[from]`. Audit failures never appear here: they are logged by the
//! application layer and dropped.

/// Top-level error returned by every port and service.
#[derive(Debug, thiserror::Error)]
pub enum PotHubError {
    /// The request or value violates a domain invariant.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A caller-supplied identity is already taken.
    #[error("{0}")]
    Conflict(#[from] ConflictError),

    /// The backing store could not be reached or rejected the query.
    #[error("storage unavailable: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Invariant violations detected before touching storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("sensor id must not be empty")]
    EmptySensorId,

    #[error("device id must not be empty")]
    EmptyDeviceId,

    #[error("pot name must not be empty")]
    EmptyPotName,

    #[error("type must not be empty")]
    EmptyType,

    #[error("status must not be empty")]
    EmptyStatus,

    #[error("sensor value must be a finite number")]
    NonFiniteValue,

    #[error("invalid pot id `{0}`")]
    InvalidPotId(String),

    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

/// Raised when a create collides with an existing caller-supplied identity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} `{id}` already exists")]
pub struct ConflictError {
    pub entity: &'static str,
    pub id: String,
}
