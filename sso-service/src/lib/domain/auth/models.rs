use std::fmt;

use chrono::DateTime;
use chrono::Utc;

/// User identity record.
///
/// Provisioned and mutated by user management; read-only here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub status: i32,
    pub nickname: String,
    pub password_hash: String,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The single refresh-token slot a user owns.
///
/// Created on the user's first login and overwritten on every rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshRecord {
    pub id: i64,
    pub user_id: UserId,
    pub refresh_token: String,
    pub updated_at: DateTime<Utc>,
}

/// Username/password login attempt.
#[derive(Debug, Clone)]
pub struct AuthenticateCommand {
    pub nickname: String,
    pub password: String,
}

impl AuthenticateCommand {
    pub fn new(nickname: String, password: String) -> Self {
        Self { nickname, password }
    }
}
