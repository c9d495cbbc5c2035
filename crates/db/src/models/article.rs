//! Article entity model and DTOs.

use article_core::types::DbId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sqlx::FromRow;

/// An article row from the `articles` table.
///
/// The id is serialized as a string so clients never depend on its
/// numeric width.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Article {
    #[serde(serialize_with = "serialize_id")]
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub content: String,
}

/// DTO for creating a new article.
///
/// Missing or `null` fields become the empty string. Any `id` sent by the
/// client is ignored; storage assigns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CreateArticle {
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub content: String,
}

/// Result of a best-effort listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleListing {
    /// Rows that decoded successfully, in id order.
    pub articles: Vec<Article>,
    /// Number of rows dropped because they could not be decoded.
    pub skipped: usize,
}

fn serialize_id<S: Serializer>(id: &DbId, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(id)
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
