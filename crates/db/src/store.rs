//! The storage seam the HTTP layer talks to.

use article_core::types::DbId;
use async_trait::async_trait;

use crate::models::article::{Article, ArticleListing, CreateArticle};
use crate::repositories::ArticleRepo;
use crate::DbPool;

/// Article persistence operations used by request handlers.
///
/// Errors are passed through from the driver unmodified.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Check that the backing store is reachable.
    async fn health_check(&self) -> Result<(), sqlx::Error>;

    /// Persist a new article; the store assigns its id.
    async fn create(&self, input: &CreateArticle) -> Result<Article, sqlx::Error>;

    /// Fetch one article, `None` when no row has this id.
    async fn get(&self, id: DbId) -> Result<Option<Article>, sqlx::Error>;

    /// Best-effort read of every article.
    async fn list(&self) -> Result<ArticleListing, sqlx::Error>;

    /// Remove an article. Returns rows affected; zero is a successful no-op.
    async fn delete(&self, id: DbId) -> Result<u64, sqlx::Error>;
}

/// [`ArticleStore`] backed by a PostgreSQL pool.
#[derive(Clone)]
pub struct PgArticleStore {
    pool: DbPool,
}

impl PgArticleStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleStore for PgArticleStore {
    async fn health_check(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }

    async fn create(&self, input: &CreateArticle) -> Result<Article, sqlx::Error> {
        ArticleRepo::create(&self.pool, input).await
    }

    async fn get(&self, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        ArticleRepo::find_by_id(&self.pool, id).await
    }

    async fn list(&self) -> Result<ArticleListing, sqlx::Error> {
        ArticleRepo::list(&self.pool).await
    }

    async fn delete(&self, id: DbId) -> Result<u64, sqlx::Error> {
        ArticleRepo::hard_delete(&self.pool, id).await
    }
}
