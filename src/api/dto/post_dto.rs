//! Post DTOs for submission and listing.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::common_dto::{RequestBody, required_field};
use crate::error::ApiError;
use crate::storage::{NewPost, Post};

/// Request body for `POST /submit_post`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitPostRequest {
    /// Post title. Required, non-empty.
    #[serde(default)]
    #[schema(value_type = String)]
    pub title_post: Option<Value>,
    /// Post body. Required, non-empty.
    #[serde(default)]
    #[schema(value_type = String)]
    pub content_post: Option<Value>,
    /// Cover image URL. Required, non-empty.
    #[serde(default)]
    #[schema(value_type = String)]
    pub url_image_post: Option<Value>,
}

impl RequestBody for SubmitPostRequest {
    type Output = NewPost;

    const UNREADABLE: &'static str = "No data provided";

    fn validate(self) -> Result<NewPost, ApiError> {
        Ok(NewPost {
            title: required_field(self.title_post, "title_post")?,
            content: required_field(self.content_post, "content_post")?,
            image_url: required_field(self.url_image_post, "url_image_post")?,
        })
    }
}

/// A post as returned by `GET /get_posts`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PostDto {
    /// Post identifier.
    pub id: i64,
    /// Post title.
    pub title_post: Option<String>,
    /// Post body.
    pub content_post: Option<String>,
    /// Cover image URL.
    pub url_image_post: Option<String>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title_post: post.title_post,
            content_post: post.content_post,
            url_image_post: post.url_image_post,
        }
    }
}

/// Response body for `GET /get_posts`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PostListResponse {
    /// Always `"ok"`.
    pub status: String,
    /// All posts, newest first.
    pub posts: Vec<PostDto>,
}

impl PostListResponse {
    /// Wraps `posts` in an `"ok"` envelope, preserving order.
    #[must_use]
    pub fn ok(posts: Vec<Post>) -> Self {
        Self {
            status: "ok".to_string(),
            posts: posts.into_iter().map(PostDto::from).collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn parse(json: &str) -> SubmitPostRequest {
        let Ok(req) = serde_json::from_str(json) else {
            panic!("parse {json}");
        };
        req
    }

    fn bad_request_message(json: &str) -> String {
        let Err(ApiError::BadRequest(msg)) = parse(json).validate() else {
            panic!("expected bad request for {json}");
        };
        msg
    }

    #[test]
    fn complete_body_validates() {
        let Ok(post) =
            parse(r#"{"title_post":"A","content_post":"B","url_image_post":"C"}"#).validate()
        else {
            panic!("expected valid post");
        };
        assert_eq!(post.title, "A");
        assert_eq!(post.content, "B");
        assert_eq!(post.image_url, "C");
    }

    #[test]
    fn empty_title_is_rejected() {
        assert_eq!(
            bad_request_message(r#"{"title_post":"","content_post":"B","url_image_post":"C"}"#),
            "Missing required field: title_post"
        );
    }

    #[test]
    fn fields_are_checked_in_order() {
        assert_eq!(
            bad_request_message(r#"{"url_image_post":"C"}"#),
            "Missing required field: title_post"
        );
        assert_eq!(
            bad_request_message(r#"{"title_post":"A","url_image_post":""}"#),
            "Missing required field: content_post"
        );
        assert_eq!(
            bad_request_message(r#"{"title_post":"A","content_post":"B"}"#),
            "Missing required field: url_image_post"
        );
    }

    #[test]
    fn non_string_field_is_named() {
        assert_eq!(
            bad_request_message(r#"{"title_post":5,"content_post":"B","url_image_post":"C"}"#),
            "Missing required field: title_post"
        );
        assert_eq!(
            bad_request_message(r#"{"title_post":"A","content_post":null,"url_image_post":"C"}"#),
            "Missing required field: content_post"
        );
    }

    #[test]
    fn list_response_keeps_order_and_drops_timestamp() {
        let posts = vec![
            Post {
                id: 2,
                title_post: Some("newer".into()),
                content_post: None,
                url_image_post: None,
                created_at: Some("2024-01-02 00:00:00".into()),
            },
            Post {
                id: 1,
                title_post: Some("older".into()),
                content_post: None,
                url_image_post: None,
                created_at: None,
            },
        ];
        let Ok(json) = serde_json::to_value(PostListResponse::ok(posts)) else {
            panic!("serialize");
        };
        assert_eq!(json["status"], "ok");
        assert_eq!(json["posts"][0]["id"], 2);
        assert_eq!(json["posts"][1]["title_post"], "older");
        assert!(json["posts"][0].get("created_at").is_none());
    }
}
