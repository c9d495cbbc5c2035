//! Request handlers.
//!
//! Handlers delegate to the [`article_db::ArticleStore`] held in
//! [`AppState`](crate::state::AppState) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod article;
