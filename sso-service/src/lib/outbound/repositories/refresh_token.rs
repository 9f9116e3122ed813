use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::auth::errors::StoreError;
use crate::domain::auth::models::RefreshRecord;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::RefreshTokenRepository;

#[derive(Debug, FromRow)]
struct RefreshTokenRow {
    id: i64,
    user_id: i64,
    refresh_token: String,
    updated_at: DateTime<Utc>,
}

impl From<RefreshTokenRow> for RefreshRecord {
    fn from(row: RefreshTokenRow) -> Self {
        Self {
            id: row.id,
            user_id: UserId(row.user_id),
            refresh_token: row.refresh_token,
            updated_at: row.updated_at,
        }
    }
}

/// Refresh slots stored in `user_tokens`, one row per user.
pub struct PostgresRefreshTokenRepository {
    pool: PgPool,
}

impl PostgresRefreshTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RefreshTokenRepository for PostgresRefreshTokenRepository {
    async fn find_by_value(
        &self,
        refresh_token: &str,
    ) -> Result<Option<RefreshRecord>, StoreError> {
        let row = sqlx::query_as::<_, RefreshTokenRow>(
            r#"
            SELECT id, user_id, refresh_token, updated_at
            FROM user_tokens
            WHERE refresh_token = $1
            "#,
        )
        .bind(refresh_token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::GetToken(e.to_string()))?;

        Ok(row.map(RefreshRecord::from))
    }

    async fn create(&self, user_id: UserId, refresh_token: &str) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO user_tokens (user_id, refresh_token)
            VALUES ($1, $2)
            ON CONFLICT (user_id)
            DO UPDATE SET refresh_token = EXCLUDED.refresh_token, updated_at = now()
            "#,
        )
        .bind(user_id.0)
        .bind(refresh_token)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::CreateToken(e.to_string()))?;

        Ok(())
    }

    async fn rotate(
        &self,
        user_id: UserId,
        current: &str,
        replacement: &str,
    ) -> Result<bool, StoreError> {
        // Compare-and-swap: a concurrent rotation changes refresh_token and
        // makes this update match no row.
        let result = sqlx::query(
            r#"
            UPDATE user_tokens
            SET refresh_token = $1, updated_at = now()
            WHERE user_id = $2 AND refresh_token = $3
            "#,
        )
        .bind(replacement)
        .bind(user_id.0)
        .bind(current)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::UpdateToken(e.to_string()))?;

        Ok(result.rows_affected() == 1)
    }
}
