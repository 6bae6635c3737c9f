use thiserror::Error;

/// Failures talking to the hosted document store.
#[derive(Debug, Error)]
pub enum DocumentStoreError {
    #[error("document not found")]
    NotFound,

    #[error("no authenticated user")]
    Unauthenticated,

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("session error: {0}")]
    Session(String),

    #[error("unexpected status {0}")]
    UnexpectedStatus(u16),
}

/// Failures talking to the identity provider.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("invalid credential: {0}")]
    InvalidCredential(String),

    #[error("refresh token no longer valid")]
    RefreshRejected,

    #[error("network error: {0}")]
    Network(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("unexpected status {0}")]
    UnexpectedStatus(u16),
}

/// Failures talking to object storage.
#[derive(Debug, Error)]
pub enum ObjectStorageError {
    #[error("no authenticated user")]
    Unauthenticated,

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("unexpected status {0}")]
    UnexpectedStatus(u16),
}
