#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use article_api::config::ServerConfig;
use article_api::router::build_app_router;
use article_api::state::AppState;
use article_core::types::DbId;
use article_db::models::article::{Article, ArticleListing, CreateArticle};
use article_db::ArticleStore;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// [`ArticleStore`] kept in memory, with switches to simulate storage faults.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<BTreeMap<DbId, Article>>,
    next_id: AtomicI64,
    /// Rows reported as undecodable by every listing.
    broken_rows: Mutex<usize>,
    failing: AtomicBool,
    /// Latency added to every call.
    delay: Mutex<Option<Duration>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make every subsequent call fail with a driver error.
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// Make every subsequent call sleep for `delay` first.
    pub fn slow_down(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    pub fn add_broken_rows(&self, count: usize) {
        *self.broken_rows.lock().unwrap() += count;
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    async fn check(&self) -> Result<(), sqlx::Error> {
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            Err(sqlx::Error::Protocol("connection reset by peer".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ArticleStore for MemoryStore {
    async fn health_check(&self) -> Result<(), sqlx::Error> {
        self.check().await
    }

    async fn create(&self, input: &CreateArticle) -> Result<Article, sqlx::Error> {
        self.check().await?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let article = Article {
            id,
            title: input.title.clone(),
            description: input.description.clone(),
            content: input.content.clone(),
        };
        self.rows.lock().unwrap().insert(id, article.clone());
        Ok(article)
    }

    async fn get(&self, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        self.check().await?;
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn list(&self) -> Result<ArticleListing, sqlx::Error> {
        self.check().await?;
        Ok(ArticleListing {
            articles: self.rows.lock().unwrap().values().cloned().collect(),
            skipped: *self.broken_rows.lock().unwrap(),
        })
    }

    async fn delete(&self, id: DbId) -> Result<u64, sqlx::Error> {
        self.check().await?;
        Ok(u64::from(self.rows.lock().unwrap().remove(&id).is_some()))
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig::from_lookup(|key| match key {
        "DATABASE_URL" => Some("postgres://unused/articles".to_string()),
        "HOST" => Some("127.0.0.1".to_string()),
        "PORT" => Some("0".to_string()),
        _ => None,
    })
    .unwrap()
}

/// Build the full application router over `store`, mirroring `main.rs`.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    build_test_app_with_config(store, &test_config())
}

pub fn build_test_app_with_config(store: Arc<MemoryStore>, config: &ServerConfig) -> Router {
    build_app_router(AppState::new(store), config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    request(app, Method::GET, uri).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    request(app, Method::DELETE, uri).await
}

pub async fn request(app: Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, Some("application/json"), body.to_string()).await
}

pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<String>,
) -> Response<Body> {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header(CONTENT_TYPE, ct);
    }
    let request = builder.body(Body::from(body.into())).unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
