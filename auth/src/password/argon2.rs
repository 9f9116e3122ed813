use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::Error as PasswordHashError;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Checks plaintext passwords against stored Argon2 hashes.
///
/// Stored hashes are PHC strings (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`).
/// The variant and cost parameters are read from the stored string, so hashes
/// produced with older parameters keep verifying.
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialVerifier;

impl CredentialVerifier {
    pub fn new() -> Self {
        Self
    }

    /// Verify a password against a stored hash.
    ///
    /// # Arguments
    /// * `password` - Plaintext password presented by the client
    /// * `encoded_hash` - Stored password hash in PHC string format
    ///
    /// # Returns
    /// `true` if the password matches, `false` if it does not
    ///
    /// # Errors
    /// * `MalformedHash` - The stored hash cannot be parsed or names an
    ///   unsupported algorithm or parameter set
    pub fn verify(&self, password: &str, encoded_hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(encoded_hash)
            .map_err(|e| PasswordError::MalformedHash(e.to_string()))?;

        // Without these the library reports a plain mismatch.
        if parsed_hash.salt.is_none() {
            return Err(PasswordError::MalformedHash("missing salt".to_string()));
        }
        if parsed_hash.hash.is_none() {
            return Err(PasswordError::MalformedHash("missing hash output".to_string()));
        }

        match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(e) => Err(PasswordError::MalformedHash(e.to_string())),
        }
    }

    /// Hash a plaintext password for storage.
    ///
    /// Uses Argon2id with default parameters and a random salt.
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }
}
