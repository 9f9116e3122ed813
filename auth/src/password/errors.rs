use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// The stored hash is not a usable PHC string. This is a server-side
    /// data problem, never a client credential failure.
    #[error("Malformed password hash: {0}")]
    MalformedHash(String),
}
