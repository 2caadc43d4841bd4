//! Database models for posts.

use serde::Serialize;

/// A stored row from the `manage_post` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Post {
    /// Auto-increment row ID, never reused.
    pub id: i64,
    /// Post title.
    pub title_post: Option<String>,
    /// Post body; may embed markup.
    pub content_post: Option<String>,
    /// Cover image URL.
    pub url_image_post: Option<String>,
    /// Insertion time as stored by SQLite (`YYYY-MM-DD HH:MM:SS`, UTC).
    pub created_at: Option<String>,
}

/// Validated input for a new post. All fields are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Cover image URL.
    pub image_url: String,
}
