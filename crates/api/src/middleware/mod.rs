//! Request extractors shared by the article handlers.
//!
//! - [`json_body::JsonBody`] -- Strict `application/json` body decoding.
//! - [`article_id::ArticleId`] -- Parses the `{id}` path segment.

pub mod article_id;
pub mod json_body;
