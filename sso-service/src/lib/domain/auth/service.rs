use std::sync::Arc;

use async_trait::async_trait;
use auth::CredentialVerifier;
use auth::TokenCodec;
use auth::TokenError;
use auth::TokenPair;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthenticateCommand;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::RefreshTokenRepository;
use crate::domain::auth::ports::UserRepository;

/// Domain service implementing the token lifecycle.
///
/// Stateless across calls: every flow reads and writes only through the
/// injected stores.
pub struct AuthService<UR, RR>
where
    UR: UserRepository,
    RR: RefreshTokenRepository,
{
    users: Arc<UR>,
    refresh_tokens: Arc<RR>,
    token_codec: Arc<TokenCodec>,
    credential_verifier: CredentialVerifier,
}

impl<UR, RR> AuthService<UR, RR>
where
    UR: UserRepository,
    RR: RefreshTokenRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `users` - User lookup implementation
    /// * `refresh_tokens` - Refresh slot persistence implementation
    /// * `token_codec` - Codec holding the signing secret
    /// * `credential_verifier` - Password hash verifier
    pub fn new(
        users: Arc<UR>,
        refresh_tokens: Arc<RR>,
        token_codec: Arc<TokenCodec>,
        credential_verifier: CredentialVerifier,
    ) -> Self {
        Self {
            users,
            refresh_tokens,
            token_codec,
            credential_verifier,
        }
    }
}

#[async_trait]
impl<UR, RR> AuthServicePort for AuthService<UR, RR>
where
    UR: UserRepository,
    RR: RefreshTokenRepository,
{
    async fn authenticate(&self, command: AuthenticateCommand) -> Result<TokenPair, AuthError> {
        let user = self
            .users
            .find_by_nickname(&command.nickname)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "failed to get user");
                AuthError::from(e)
            })?
            .ok_or_else(|| {
                tracing::debug!(nickname = %command.nickname, "unknown nickname");
                AuthError::InvalidCredentials
            })?;

        let is_valid = self
            .credential_verifier
            .verify(&command.password, &user.password_hash)
            .map_err(|e| {
                tracing::error!(error = %e, user_id = %user.id, "failed to verify password");
                AuthError::from(e)
            })?;

        if !is_valid {
            tracing::debug!(user_id = %user.id, "password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let tokens = self.token_codec.issue(user.id.0).map_err(|e| {
            tracing::error!(error = %e, user_id = %user.id, "failed to generate tokens");
            AuthError::from(e)
        })?;

        self.refresh_tokens
            .create(user.id, &tokens.refresh_token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, user_id = %user.id, "failed to create token");
                AuthError::from(e)
            })?;

        tracing::info!(user_id = %user.id, "user authenticated");

        Ok(tokens)
    }

    async fn authorize(&self, token: &str) -> Result<UserId, AuthError> {
        let claims = self.token_codec.parse(token).map_err(|e| {
            tracing::debug!(error = %e, "token rejected");
            AuthError::from(e)
        })?;

        Ok(UserId(claims.subject))
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        let record = self
            .refresh_tokens
            .find_by_value(refresh_token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "failed to get token by refresh token");
                AuthError::from(e)
            })?
            .ok_or(AuthError::RefreshTokenNotFound)?;

        let claims = self.token_codec.parse(refresh_token).map_err(|e| {
            tracing::debug!(
                error = %e,
                user_id = %record.user_id,
                "stored refresh token rejected"
            );
            AuthError::from(e)
        })?;

        if claims.subject != record.user_id.0 {
            tracing::warn!(
                user_id = %record.user_id,
                subject = claims.subject,
                "refresh token subject does not match slot owner"
            );
            return Err(AuthError::InvalidToken(TokenError::TokenInvalid(
                "subject does not match refresh token owner".to_string(),
            )));
        }

        let tokens = self.token_codec.reissue(&claims).map_err(|e| {
            tracing::error!(
                error = %e,
                user_id = %record.user_id,
                "failed to generate tokens when refresh token"
            );
            AuthError::from(e)
        })?;

        let rotated = self
            .refresh_tokens
            .rotate(record.user_id, refresh_token, &tokens.refresh_token)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    user_id = %record.user_id,
                    "failed to update token when refresh token"
                );
                AuthError::from(e)
            })?;

        if !rotated {
            tracing::warn!(user_id = %record.user_id, "refresh slot rotated concurrently");
            return Err(AuthError::RefreshTokenSuperseded);
        }

        Ok(tokens)
    }

    async fn is_authorized(&self, token: &str) -> bool {
        match self.token_codec.parse(token) {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(error = %e, "failed to validate jwt token");
                false
            }
        }
    }
}
