use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use crate::error::RepoError;

use super::services::NewUser;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Newest first; id breaks ties since timestamps can collide.
pub async fn list(db: &PgPool) -> Result<Vec<User>, RepoError> {
    let rows = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, phone, message, created_at, updated_at
        FROM users
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn get(db: &PgPool, id: i64) -> Result<User, RepoError> {
    let row = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, phone, message, created_at, updated_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    row.ok_or(RepoError::NotFound)
}

pub async fn create(db: &PgPool, user: &NewUser) -> Result<User, RepoError> {
    let row = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, email, phone, message)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, email, phone, message, created_at, updated_at
        "#,
    )
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.phone)
    .bind(&user.message)
    .fetch_one(db)
    .await
    .map_err(RepoError::from_write)?;
    Ok(row)
}

/// Full-record replacement in one statement; the returned-row count is the
/// authoritative existence check, so there is no pre-read to race against a
/// concurrent delete.
pub async fn update(db: &PgPool, id: i64, user: &NewUser) -> Result<User, RepoError> {
    let row = sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET name = $1, email = $2, phone = $3, message = $4, updated_at = now()
        WHERE id = $5
        RETURNING id, name, email, phone, message, created_at, updated_at
        "#,
    )
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.phone)
    .bind(&user.message)
    .bind(id)
    .fetch_optional(db)
    .await
    .map_err(RepoError::from_write)?;
    row.ok_or(RepoError::NotFound)
}

pub async fn delete(db: &PgPool, id: i64) -> Result<(), RepoError> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn user_serializes_timestamps_as_rfc3339() {
        let user = User {
            id: 1,
            name: "Ann Lee".into(),
            email: "ann@example.com".into(),
            phone: None,
            message: None,
            created_at: datetime!(2026-01-15 09:30:00 UTC),
            updated_at: datetime!(2026-01-15 09:30:00 UTC),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains(r#""id":1"#));
        assert!(json.contains(r#""email":"ann@example.com""#));
        assert!(json.contains("2026-01-15T09:30:00Z"));
    }
}
