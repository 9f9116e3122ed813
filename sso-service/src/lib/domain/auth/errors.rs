use auth::PasswordError;
use auth::TokenError;
use thiserror::Error;

/// Error for user and refresh-token store operations.
///
/// Each variant names the operation that failed and keeps the driver's
/// message as the cause.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("failed to get user: {0}")]
    GetUser(String),

    #[error("failed to get token: {0}")]
    GetToken(String),

    #[error("failed to create token: {0}")]
    CreateToken(String),

    #[error("failed to update token: {0}")]
    UpdateToken(String),
}

/// Server-side failures. Never shown to callers in detail.
#[derive(Debug, Clone, Error)]
pub enum InternalError {
    #[error("failed to verify password: {0}")]
    Password(#[from] PasswordError),

    #[error("failed to generate tokens: {0}")]
    Token(TokenError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Classification used at the transport boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidCredentials,
    TokenExpired,
    TokenMalformed,
    TokenInvalid,
    Internal,
}

/// Top-level error for authentication flows
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Unknown nickname or wrong password. The two are deliberately
    /// indistinguishable.
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("no refresh token")]
    RefreshTokenNotFound,

    /// The refresh slot was rotated by a concurrent request between lookup
    /// and update.
    #[error("refresh token was superseded")]
    RefreshTokenSuperseded,

    #[error("invalid token: {0}")]
    InvalidToken(TokenError),

    #[error("internal error: {0}")]
    Internal(#[from] InternalError),
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials
            | AuthError::RefreshTokenNotFound
            | AuthError::RefreshTokenSuperseded => ErrorKind::InvalidCredentials,
            AuthError::InvalidToken(TokenError::TokenExpired) => ErrorKind::TokenExpired,
            AuthError::InvalidToken(TokenError::TokenMalformed(_)) => ErrorKind::TokenMalformed,
            AuthError::InvalidToken(_) => ErrorKind::TokenInvalid,
            AuthError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Whether the caller caused the failure.
    pub fn is_client_error(&self) -> bool {
        self.kind() != ErrorKind::Internal
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        if err.is_rejection() {
            AuthError::InvalidToken(err)
        } else {
            AuthError::Internal(InternalError::Token(err))
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        AuthError::Internal(InternalError::Store(err))
    }
}

impl From<PasswordError> for AuthError {
    fn from(err: PasswordError) -> Self {
        AuthError::Internal(InternalError::Password(err))
    }
}
