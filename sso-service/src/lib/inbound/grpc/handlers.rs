use tonic::Status;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::ErrorKind;

pub mod authenticate;
pub mod authorize;
pub mod is_authorized;
pub mod refresh;

/// Message returned for every server-side failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "oops, something went wrong";

impl From<AuthError> for Status {
    fn from(err: AuthError) -> Self {
        match err.kind() {
            ErrorKind::Internal => Status::internal(INTERNAL_ERROR_MESSAGE),
            ErrorKind::InvalidCredentials
            | ErrorKind::TokenExpired
            | ErrorKind::TokenMalformed
            | ErrorKind::TokenInvalid => Status::unauthenticated(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use auth::TokenError;
    use tonic::Code;

    use super::*;
    use crate::domain::auth::errors::StoreError;

    #[test]
    fn test_client_errors_map_to_unauthenticated() {
        let status = Status::from(AuthError::InvalidCredentials);
        assert_eq!(status.code(), Code::Unauthenticated);
        assert_eq!(status.message(), "invalid username or password");

        let status = Status::from(AuthError::RefreshTokenNotFound);
        assert_eq!(status.code(), Code::Unauthenticated);
        assert_eq!(status.message(), "no refresh token");

        let status = Status::from(AuthError::from(TokenError::TokenExpired));
        assert_eq!(status.code(), Code::Unauthenticated);
        assert!(status.message().contains("expired"));
    }

    #[test]
    fn test_internal_errors_hide_detail() {
        let status = Status::from(AuthError::from(StoreError::CreateToken(
            "password authentication failed for user \"sso\"".to_string(),
        )));

        assert_eq!(status.code(), Code::Internal);
        assert_eq!(status.message(), INTERNAL_ERROR_MESSAGE);
    }
}
