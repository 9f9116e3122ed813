use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::auth::errors::StoreError;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::UserRepository;

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    status: i32,
    nickname: String,
    password: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId(row.id),
            status: row.status,
            nickname: row.nickname,
            password_hash: row.password,
        }
    }
}

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_nickname(&self, nickname: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, status, nickname, password
            FROM users
            WHERE nickname = $1
            "#,
        )
        .bind(nickname)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::GetUser(e.to_string()))?;

        Ok(row.map(User::from))
    }
}
