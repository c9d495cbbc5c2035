use article_core::error::CoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Every variant renders as a plain-text body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `article_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage failure whose message is reported to the client, prefixed
    /// with what the handler was doing.
    #[error("{action}: {source}")]
    Storage {
        action: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// A storage failure reported to the client with a generic message.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Wrap a storage error so its message reaches the client.
    pub fn storage(action: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| AppError::Storage { action, source }
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const GENERIC_INTERNAL: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            },

            // --- Database errors ---
            AppError::Storage { action, source } => {
                tracing::error!(error = %source, action, "Storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_INTERNAL.to_string())
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        (status, message).into_response()
    }
}
