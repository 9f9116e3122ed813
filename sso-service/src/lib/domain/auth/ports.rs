use async_trait::async_trait;
use auth::TokenPair;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::StoreError;
use crate::domain::auth::models::AuthenticateCommand;
use crate::domain::auth::models::RefreshRecord;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;

/// Port for the token lifecycle operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify a username/password and issue a token pair.
    ///
    /// # Arguments
    /// * `command` - Nickname and plaintext password
    ///
    /// # Returns
    /// Fresh access/refresh token pair; the refresh token is stored as the
    /// user's current refresh slot
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown nickname or wrong password
    /// * `Internal` - Store failure, malformed stored hash, or signing failure
    async fn authenticate(&self, command: AuthenticateCommand) -> Result<TokenPair, AuthError>;

    /// Resolve a token to the user it was issued to.
    ///
    /// # Errors
    /// * `InvalidToken` - Expired, malformed, or badly signed token
    async fn authorize(&self, token: &str) -> Result<UserId, AuthError>;

    /// Exchange the current refresh token for a new pair, rotating the slot.
    ///
    /// # Errors
    /// * `RefreshTokenNotFound` - No slot holds this refresh token
    /// * `RefreshTokenSuperseded` - A concurrent refresh rotated the slot first
    /// * `InvalidToken` - The stored refresh token no longer validates
    /// * `Internal` - Store or signing failure
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError>;

    /// Best-effort token check. Any failure reads as `false`.
    async fn is_authorized(&self, token: &str) -> bool;
}

/// Read access to user identity records.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Retrieve user by nickname.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `GetUser` - Database operation failed
    async fn find_by_nickname(&self, nickname: &str) -> Result<Option<User>, StoreError>;
}

/// Persistence for the one-per-user refresh-token slot.
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync + 'static {
    /// Retrieve the slot currently holding exactly `refresh_token`.
    ///
    /// # Errors
    /// * `GetToken` - Database operation failed
    async fn find_by_value(&self, refresh_token: &str)
        -> Result<Option<RefreshRecord>, StoreError>;

    /// Create the user's slot holding `refresh_token`.
    ///
    /// A user who logs in again already owns a slot; its value is replaced.
    ///
    /// # Errors
    /// * `CreateToken` - Database operation failed
    async fn create(&self, user_id: UserId, refresh_token: &str) -> Result<(), StoreError>;

    /// Replace the slot value only if it still equals `current`.
    ///
    /// # Returns
    /// `true` if the slot was rotated, `false` if it no longer held `current`
    ///
    /// # Errors
    /// * `UpdateToken` - Database operation failed
    async fn rotate(
        &self,
        user_id: UserId,
        current: &str,
        replacement: &str,
    ) -> Result<bool, StoreError>;
}
