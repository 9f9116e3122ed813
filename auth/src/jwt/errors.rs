use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    /// The signing secret is empty. Raised when the codec is built, so a
    /// misconfigured deployment fails at startup instead of per request.
    #[error("Signing secret is empty")]
    EmptySecret,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token is malformed: {0}")]
    TokenMalformed(String),

    #[error("Token is invalid: {0}")]
    TokenInvalid(String),
}

impl TokenError {
    /// Whether the failure was caused by the presented token rather than by
    /// the server's own configuration or signing step.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            TokenError::TokenExpired | TokenError::TokenMalformed(_) | TokenError::TokenInvalid(_)
        )
    }
}
