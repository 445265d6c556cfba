use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Idempotent schema setup, run once at startup.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS analyses (
            id UUID PRIMARY KEY,
            user_id UUID NOT NULL,
            filename TEXT NOT NULL,
            ats_score INTEGER NOT NULL,
            keywords_matched INTEGER NOT NULL,
            total_keywords INTEGER NOT NULL,
            breakdown JSONB NOT NULL,
            job_description TEXT NOT NULL,
            resume_text TEXT NOT NULL,
            hr_evaluation TEXT NOT NULL,
            ats_evaluation TEXT NOT NULL,
            enhanced_resume TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_analyses_user_created \
         ON analyses (user_id, created_at DESC)",
    )
    .execute(pool)
    .await?;

    info!("Database schema ready");
    Ok(())
}
