//! JSON body extractor that insists on an `application/json` content type.
//!
//! Axum's own `Json` answers 415 for a wrong content type and 422 for a body
//! of the wrong shape; this API reports every body problem as 400. A `null`
//! body decodes to `T::default()`. Trailing data after the first value is
//! rejected.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Decoded JSON request body.
///
/// ```ignore
/// async fn create(JsonBody(input): JsonBody<CreateArticle>) -> AppResult<StatusCode> {
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Err(AppError::BadRequest(
                "expected Content-Type: application/json".into(),
            ));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(format!("could not read body: {}", e.body_text())))?;

        let value = serde_json::from_slice::<Option<T>>(&bytes)
            .map_err(|e| AppError::BadRequest(format!("could not decode json: {e}")))?;

        Ok(Self(value.unwrap_or_default()))
    }
}

/// True when the media type is `application/json`, ignoring parameters such
/// as `charset`.
pub fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers_with(content_type: Option<&'static str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(ct) = content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(ct));
        }
        headers
    }

    #[test]
    fn accepts_plain_and_parameterized_json() {
        assert!(has_json_content_type(&headers_with(Some("application/json"))));
        assert!(has_json_content_type(&headers_with(Some(
            "application/json; charset=utf-8"
        ))));
    }

    #[test]
    fn rejects_other_or_missing_types() {
        assert!(!has_json_content_type(&headers_with(None)));
        assert!(!has_json_content_type(&headers_with(Some("text/plain"))));
        assert!(!has_json_content_type(&headers_with(Some(
            "application/vnd.api+json"
        ))));
    }
}
