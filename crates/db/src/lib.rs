//! Storage gateway for the article service.
//!
//! Owns the PostgreSQL connection pool, the `articles` schema, and the
//! repository that maps rows to [`models::article::Article`].

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod store;

pub use store::{ArticleStore, PgArticleStore};

pub type DbPool = sqlx::PgPool;

/// Pool size used when the caller has no preference.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 20;

const CREATE_ARTICLES_TABLE: &str = "CREATE TABLE IF NOT EXISTS articles (
    id BIGSERIAL NOT NULL PRIMARY KEY,
    title TEXT,
    description TEXT,
    content TEXT
)";

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the `articles` table if it does not exist yet.
///
/// Callers treat a failure here as fatal: the service cannot run without
/// its table.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_ARTICLES_TABLE).execute(pool).await?;
    tracing::debug!("articles table ready");
    Ok(())
}
