pub mod article;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the article route tree, mounted under the configured prefix.
///
/// Route hierarchy:
///
/// ```text
/// /list                 GET
/// /article              POST
/// /article/{id}         GET, DELETE
/// ```
///
/// Any other method on these paths answers 405.
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(article::router())
}
