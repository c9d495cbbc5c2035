//! Handlers for the article resource.

use article_core::error::CoreError;
use article_db::models::article::{Article, CreateArticle};
use axum::extract::State;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::article_id::ArticleId;
use crate::middleware::json_body::JsonBody;
use crate::state::AppState;

/// Set on list responses when some rows could not be decoded; carries the count.
pub const SKIPPED_ROWS_HEADER: HeaderName = HeaderName::from_static("x-skipped-rows");

/// GET {prefix}/list
///
/// Best-effort listing: undecodable rows are left out and reported through
/// [`SKIPPED_ROWS_HEADER`].
pub async fn list(State(state): State<AppState>) -> AppResult<Response> {
    let listing = state.store.list().await?;

    let mut response = Json(listing.articles).into_response();
    if listing.skipped > 0 {
        tracing::warn!(skipped = listing.skipped, "Article list is partial");
        response
            .headers_mut()
            .insert(SKIPPED_ROWS_HEADER, HeaderValue::from(listing.skipped));
    }
    Ok(response)
}

/// POST {prefix}/article
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateArticle>,
) -> AppResult<StatusCode> {
    let article = state
        .store
        .create(&input)
        .await
        .map_err(AppError::storage("fail to create"))?;
    tracing::info!(article_id = article.id, "Article created");
    Ok(StatusCode::CREATED)
}

/// GET {prefix}/article/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ArticleId(id): ArticleId,
) -> AppResult<Json<Article>> {
    let article = state
        .store
        .get(id)
        .await
        .map_err(AppError::storage("could not read id"))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Article",
            id,
        }))?;
    Ok(Json(article))
}

/// DELETE {prefix}/article/{id}
///
/// Deleting an id that does not exist still answers 200.
pub async fn delete(
    State(state): State<AppState>,
    ArticleId(id): ArticleId,
) -> AppResult<StatusCode> {
    let removed = state.store.delete(id).await?;
    tracing::debug!(article_id = id, removed, "Article delete");
    Ok(StatusCode::OK)
}

/// GET|DELETE {prefix}/article/ -- the id segment is empty.
pub async fn missing_id() -> AppError {
    AppError::Core(CoreError::Validation("missing article id".into()))
}
