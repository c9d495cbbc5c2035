//! Route definitions for articles.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::article;
use crate::state::AppState;

/// Article routes.
///
/// ```text
/// GET    /list           -> list
/// POST   /article        -> create
/// GET    /article/{id}   -> get_by_id
/// DELETE /article/{id}   -> delete
/// GET    /article/       -> missing_id (400)
/// DELETE /article/       -> missing_id (400)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/list", get(article::list))
        .route("/article", post(article::create))
        .route(
            "/article/",
            get(article::missing_id).delete(article::missing_id),
        )
        .route(
            "/article/{id}",
            get(article::get_by_id).delete(article::delete),
        )
}
