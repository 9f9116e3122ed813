use chrono::DateTime;
use chrono::Duration;
use chrono::TimeZone;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::TokenClaims;
use super::claims::TokenPair;
use super::errors::TokenError;

/// Access token lifetime (15 minutes).
pub const ACCESS_TOKEN_LIFETIME_SECS: i64 = 15 * 60;

/// Refresh token lifetime (7 days).
pub const REFRESH_TOKEN_LIFETIME_SECS: i64 = 7 * 24 * 60 * 60;

/// Signs and validates access/refresh tokens with a shared HMAC secret.
///
/// Tokens are compact JWS strings signed with HS256. Decoding only accepts
/// HS256, so a token whose header names any other algorithm is rejected
/// before its claims are looked at.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    access_lifetime: Duration,
    refresh_lifetime: Duration,
}

impl TokenCodec {
    /// Create a codec signing with `secret` and the default lifetimes.
    ///
    /// # Errors
    /// * `EmptySecret` - `secret` is empty
    pub fn new(secret: &[u8]) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::EmptySecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            access_lifetime: Duration::seconds(ACCESS_TOKEN_LIFETIME_SECS),
            refresh_lifetime: Duration::seconds(REFRESH_TOKEN_LIFETIME_SECS),
        })
    }

    /// Override the access and refresh token lifetimes.
    pub fn with_lifetimes(mut self, access: Duration, refresh: Duration) -> Self {
        self.access_lifetime = access;
        self.refresh_lifetime = refresh;
        self
    }

    /// Issue an access/refresh token pair for `subject`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing either token failed
    pub fn issue(&self, subject: i64) -> Result<TokenPair, TokenError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token pair as if the current time were `now`.
    pub fn issue_at(&self, subject: i64, now: DateTime<Utc>) -> Result<TokenPair, TokenError> {
        let access_token = self.encode(&TokenClaims::new(subject, now, self.access_lifetime))?;
        let refresh_token = self.encode(&TokenClaims::new(subject, now, self.refresh_lifetime))?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Issue the pair that replaces the refresh token described by `previous`.
    ///
    /// The new refresh token expires strictly after `previous`, so it never
    /// encodes to the same string as the token it replaces, even when both
    /// are issued within the same second.
    pub fn reissue(&self, previous: &TokenClaims) -> Result<TokenPair, TokenError> {
        self.reissue_at(previous, Utc::now())
    }

    /// Issue a replacement pair as if the current time were `now`.
    pub fn reissue_at(
        &self,
        previous: &TokenClaims,
        now: DateTime<Utc>,
    ) -> Result<TokenPair, TokenError> {
        let earliest = previous
            .expires_at
            .saturating_add(1)
            .saturating_sub(self.refresh_lifetime.num_seconds());

        let issued_at = match Utc.timestamp_opt(earliest, 0).single() {
            Some(earliest) if earliest > now => earliest,
            _ => now,
        };

        self.issue_at(previous.subject, issued_at)
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    /// * `TokenExpired` - The token's expiration time has passed
    /// * `TokenInvalid` - Bad signature or unexpected signing algorithm
    /// * `TokenMalformed` - Anything else that prevents decoding
    pub fn parse(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.parse_at(token, Utc::now())
    }

    /// Verify a token, checking expiry against `now`.
    ///
    /// The expiry check runs here after the signature has been accepted,
    /// independent of the leeway the JWT library applies to `exp`.
    pub fn parse_at(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, TokenError> {
        let validation = Validation::new(self.algorithm);

        let token_data = decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                ErrorKind::InvalidSignature
                | ErrorKind::InvalidAlgorithm
                | ErrorKind::ImmatureSignature => TokenError::TokenInvalid(e.to_string()),
                _ => TokenError::TokenMalformed(e.to_string()),
            })?;

        let claims = token_data.claims;
        if claims.is_expired(now) {
            return Err(TokenError::TokenExpired);
        }

        Ok(claims)
    }

    fn encode(&self, claims: &TokenClaims) -> Result<String, TokenError> {
        encode(&Header::new(self.algorithm), claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }
}
