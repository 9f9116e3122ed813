use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Payload signed into every access and refresh token.
///
/// Both token kinds share this shape and differ only in lifetime. Tokens
/// carrying any other claim are rejected when decoded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TokenClaims {
    /// User identifier the token was issued to
    #[serde(rename = "user_id")]
    pub subject: i64,

    /// Expiration time (Unix timestamp, seconds)
    #[serde(rename = "exp")]
    pub expires_at: i64,
}

impl TokenClaims {
    /// Create claims for `subject` that expire `lifetime` after `issued_at`.
    pub fn new(subject: i64, issued_at: DateTime<Utc>, lifetime: Duration) -> Self {
        Self {
            subject,
            expires_at: (issued_at + lifetime).timestamp(),
        }
    }

    /// Check if the token is expired at `now`.
    ///
    /// A token is no longer valid from the second named by `expires_at` on.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now.timestamp()
    }
}

/// Freshly issued access/refresh token pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_new_sets_expiration() {
        let issued_at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let claims = TokenClaims::new(42, issued_at, Duration::minutes(15));

        assert_eq!(claims.subject, 42);
        assert_eq!(claims.expires_at, 1_700_000_900);
    }

    #[test]
    fn test_is_expired() {
        let claims = TokenClaims {
            subject: 1,
            expires_at: 1000,
        };

        assert!(!claims.is_expired(Utc.timestamp_opt(999, 0).unwrap()));
        assert!(claims.is_expired(Utc.timestamp_opt(1000, 0).unwrap()));
        assert!(claims.is_expired(Utc.timestamp_opt(1001, 0).unwrap()));
    }

    #[test]
    fn test_wire_field_names() {
        let claims = TokenClaims {
            subject: 7,
            expires_at: 1234,
        };

        let json = serde_json::to_value(claims).unwrap();
        assert_eq!(json, serde_json::json!({ "user_id": 7, "exp": 1234 }));
    }

    #[test]
    fn test_rejects_extra_claims() {
        let result = serde_json::from_value::<TokenClaims>(serde_json::json!({
            "user_id": 7,
            "exp": 1234,
            "role": "admin"
        }));

        assert!(result.is_err());
    }
}
