//! Path extractor for the `{id}` segment of `/article/{id}`.

use article_core::error::CoreError;
use article_core::types::DbId;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::error::AppError;

/// Article id taken from the request path.
///
/// An empty or non-numeric segment is rejected with 400 before any storage
/// call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleId(pub DbId);

impl<S> FromRequestParts<S> for ArticleId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        parse_article_id(&raw).map(ArticleId)
    }
}

/// Parse a raw path segment into an article id.
pub fn parse_article_id(raw: &str) -> Result<DbId, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CoreError::Validation("missing article id".into()).into());
    }
    raw.parse::<DbId>()
        .map_err(|_| CoreError::Validation(format!("invalid article id: {raw}")).into())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parses_numeric_ids() {
        assert_eq!(parse_article_id("42").unwrap(), 42);
        assert_eq!(parse_article_id(" 7 ").unwrap(), 7);
    }

    #[test]
    fn rejects_empty_and_non_numeric_ids() {
        assert_matches!(
            parse_article_id(""),
            Err(AppError::Core(CoreError::Validation(msg))) if msg == "missing article id"
        );
        assert_matches!(
            parse_article_id("abc"),
            Err(AppError::Core(CoreError::Validation(_)))
        );
    }
}
