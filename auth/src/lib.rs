//! Credential and token primitives for the single-sign-on service.
//!
//! - Password verification against stored Argon2 hashes
//! - Access/refresh token issuance and validation (HS256)
//!
//! The service crate composes these with its user and refresh-token stores.
//!
//! # Examples
//!
//! ## Password Verification
//! ```
//! use auth::CredentialVerifier;
//!
//! let verifier = CredentialVerifier::new();
//! let hash = verifier.hash("my_password").unwrap();
//! assert!(verifier.verify("my_password", &hash).unwrap());
//! assert!(!verifier.verify("not_my_password", &hash).unwrap());
//! ```
//!
//! ## Token Pairs
//! ```
//! use auth::TokenCodec;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//! let pair = codec.issue(42).unwrap();
//!
//! let claims = codec.parse(&pair.access_token).unwrap();
//! assert_eq!(claims.subject, 42);
//! ```

pub mod jwt;
pub mod password;

pub use jwt::TokenClaims;
pub use jwt::TokenCodec;
pub use jwt::TokenError;
pub use jwt::TokenPair;
pub use password::CredentialVerifier;
pub use password::PasswordError;
