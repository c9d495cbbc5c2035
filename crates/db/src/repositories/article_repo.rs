//! Repository for the `articles` table.

use article_core::types::DbId;
use sqlx::{FromRow, PgPool};

use crate::models::article::{Article, ArticleListing, CreateArticle};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, content";

/// Provides create, read and delete operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Insert a new article, returning the created row with its generated id.
    pub async fn create(pool: &PgPool, input: &CreateArticle) -> Result<Article, sqlx::Error> {
        let query = format!(
            "INSERT INTO articles (title, description, content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Find an article by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = $1");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every article ordered by id.
    ///
    /// Rows that fail to decode are logged and counted in
    /// [`ArticleListing::skipped`] instead of failing the whole read.
    pub async fn list(pool: &PgPool) -> Result<ArticleListing, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles ORDER BY id");
        let rows = sqlx::query(&query).fetch_all(pool).await?;

        let mut listing = ArticleListing {
            articles: Vec::with_capacity(rows.len()),
            skipped: 0,
        };
        for row in &rows {
            match Article::from_row(row) {
                Ok(article) => listing.articles.push(article),
                Err(err) => {
                    tracing::warn!(error = %err, "Skipping undecodable article row");
                    listing.skipped += 1;
                }
            }
        }
        Ok(listing)
    }

    /// Permanently delete an article by id. Returns the number of rows removed;
    /// a missing id is not an error.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
