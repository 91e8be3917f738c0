use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored post. Rows are append-only: once written, `id` and
/// `created_at` never change and nothing deletes them.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Projection for the list view: everything but `content`.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: i32,
    pub title: String,
    pub created_at: DateTime<Utc>,
}
