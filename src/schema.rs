use anyhow::Context;
use sqlx::PgPool;
use tracing::info;

/// Idempotent schema bootstrap. Runs on every start, never alters an existing
/// table; the unique constraint on `email` is what the repository relies on
/// for duplicate detection.
pub async fn ensure_schema(db: &PgPool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            phone TEXT,
            message TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(db)
    .await
    .context("create users table")?;

    info!("database schema ready");
    Ok(())
}
