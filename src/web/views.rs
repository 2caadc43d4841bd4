//! Page templates and the view models that feed them.
//!
//! Data shaping (fallback image, date formatting, detail links) happens
//! here; markup lives in `templates/`.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use chrono::NaiveDateTime;

use crate::storage::Post;

/// Image shown for posts stored without a cover URL.
pub const FALLBACK_IMAGE_URL: &str = "https://files.catbox.moe/uuahyi.jpg";

/// Inline message shown on the gallery when posts cannot be loaded.
pub const GALLERY_LOAD_ERROR: &str = "Lỗi tải tài liệu";

/// Storage format of `created_at` (SQLite `CURRENT_TIMESTAMP`).
const STORED_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats a stored timestamp as `DD/MM/YYYY`, or `N/A` when it is
/// absent or unparsable.
#[must_use]
pub fn format_upload_date(created_at: Option<&str>) -> String {
    created_at
        .and_then(|raw| NaiveDateTime::parse_from_str(raw, STORED_TIMESTAMP_FORMAT).ok())
        .map_or_else(|| "N/A".to_string(), |ts| ts.format("%d/%m/%Y").to_string())
}

fn image_or_fallback(url: Option<&str>) -> String {
    match url {
        Some(u) if !u.is_empty() => u.to_string(),
        _ => FALLBACK_IMAGE_URL.to_string(),
    }
}

/// One gallery card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    /// Relative link to the detail page.
    pub detail_link: String,
    /// Post title.
    pub title: String,
    /// Cover image, or [`FALLBACK_IMAGE_URL`].
    pub image_url: String,
    /// Creation date as `DD/MM/YYYY` or `N/A`.
    pub upload_date: String,
}

impl PostCard {
    /// Shapes a stored post for the gallery.
    #[must_use]
    pub fn from_post(post: &Post) -> Self {
        Self {
            detail_link: format!("tailieu?id={}", post.id),
            title: post.title_post.clone().unwrap_or_default(),
            image_url: image_or_fallback(post.url_image_post.as_deref()),
            upload_date: format_upload_date(post.created_at.as_deref()),
        }
    }
}

/// Fields of the single-post page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDetail {
    /// Post title.
    pub title: String,
    /// Post body, rendered unescaped.
    pub content: String,
    /// Cover image, or [`FALLBACK_IMAGE_URL`].
    pub image_url: String,
    /// Stored timestamp, verbatim.
    pub created_at: String,
    /// Creation date as `DD/MM/YYYY` or `N/A`.
    pub upload_date: String,
}

impl From<Post> for PostDetail {
    fn from(post: Post) -> Self {
        let upload_date = format_upload_date(post.created_at.as_deref());
        Self {
            title: post.title_post.unwrap_or_default(),
            content: post.content_post.unwrap_or_default(),
            image_url: image_or_fallback(post.url_image_post.as_deref()),
            created_at: post.created_at.unwrap_or_default(),
            upload_date,
        }
    }
}

/// Landing page.
#[derive(Debug, Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

/// Static countdown page.
#[derive(Debug, Template)]
#[template(path = "countdown.html")]
pub struct CountdownTemplate;

/// Admin dashboard shell; data is loaded client-side from `/get_posts`.
#[derive(Debug, Template)]
#[template(path = "admin/index.html")]
pub struct AdminTemplate;

/// Admin login form; posts to `/admin/login`.
#[derive(Debug, Template)]
#[template(path = "admin/login.html")]
pub struct LoginTemplate;

/// Gallery of all posts.
#[derive(Debug, Template)]
#[template(path = "document.html")]
pub struct DocumentTemplate {
    /// Cards, newest first.
    pub cards: Vec<PostCard>,
    /// Inline error replacing the cards when loading failed.
    pub error: Option<String>,
}

impl DocumentTemplate {
    /// Gallery listing `posts` in the given order.
    #[must_use]
    pub fn with_posts(posts: &[Post]) -> Self {
        Self {
            cards: posts.iter().map(PostCard::from_post).collect(),
            error: None,
        }
    }

    /// Gallery showing the load error instead of cards.
    #[must_use]
    pub fn load_failed() -> Self {
        Self {
            cards: Vec::new(),
            error: Some(GALLERY_LOAD_ERROR.to_string()),
        }
    }
}

/// Single-post page.
#[derive(Debug, Template)]
#[template(path = "tailieu.html")]
pub struct DetailTemplate {
    /// The post being shown.
    pub post: PostDetail,
}

/// Renders `template` into an HTML response. A rendering failure is
/// logged and answered with a bare `500`.
pub fn render_template<T: Template>(template: &T) -> Response {
    match template.render() {
        Ok(body) => Html(body).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "template rendering failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Template rendering failed").into_response()
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn post(id: i64, image: Option<&str>, created_at: Option<&str>) -> Post {
        Post {
            id,
            title_post: Some(format!("Post {id}")),
            content_post: Some("<b>body</b>".to_string()),
            url_image_post: image.map(str::to_string),
            created_at: created_at.map(str::to_string),
        }
    }

    #[test]
    fn upload_date_formats() {
        assert_eq!(format_upload_date(Some("2024-03-07 15:04:05")), "07/03/2024");
        assert_eq!(format_upload_date(None), "N/A");
        assert_eq!(format_upload_date(Some("yesterday")), "N/A");
        assert_eq!(format_upload_date(Some("")), "N/A");
    }

    #[test]
    fn card_uses_fallback_image() {
        assert_eq!(
            PostCard::from_post(&post(1, Some(""), None)).image_url,
            FALLBACK_IMAGE_URL
        );
        assert_eq!(
            PostCard::from_post(&post(1, None, None)).image_url,
            FALLBACK_IMAGE_URL
        );
        assert_eq!(
            PostCard::from_post(&post(1, Some("https://x/y.png"), None)).image_url,
            "https://x/y.png"
        );
    }

    #[test]
    fn card_links_to_detail() {
        let card = PostCard::from_post(&post(42, None, Some("2023-12-31 23:59:59")));
        assert_eq!(card.detail_link, "tailieu?id=42");
        assert_eq!(card.title, "Post 42");
        assert_eq!(card.upload_date, "31/12/2023");
    }

    #[test]
    fn gallery_renders_cards_and_escapes_titles() {
        let mut p = post(7, None, Some("2024-01-02 03:04:05"));
        p.title_post = Some("<script>".to_string());
        let Ok(html) = DocumentTemplate::with_posts(&[p]).render() else {
            panic!("render");
        };
        assert!(html.contains("tailieu?id=7"));
        assert!(html.contains("02/01/2024"));
        assert!(html.contains(FALLBACK_IMAGE_URL));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn gallery_renders_inline_error() {
        let Ok(html) = DocumentTemplate::load_failed().render() else {
            panic!("render");
        };
        assert!(html.contains(GALLERY_LOAD_ERROR));
    }

    #[test]
    fn detail_renders_content_unescaped() {
        let template = DetailTemplate {
            post: PostDetail::from(post(3, Some("https://x/y.png"), None)),
        };
        let Ok(html) = template.render() else {
            panic!("render");
        };
        assert!(html.contains("<b>body</b>"));
        assert!(html.contains("Post 3"));
        assert!(html.contains("https://x/y.png"));
    }
}
