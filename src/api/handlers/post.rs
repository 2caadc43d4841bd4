//! Post endpoints: create and list. Both require an admin session; the
//! guard is applied where the routes are mounted.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{PostListResponse, StatusMessage, SubmitPostRequest, Validated};
use crate::app_state::AppState;
use crate::error::{ApiError, ErrorResponse};

/// `POST /submit_post` — Create a post.
///
/// # Errors
///
/// Returns [`ApiError::BadRequest`] on a missing or empty field and
/// [`ApiError::Storage`] if the insert fails.
#[utoipa::path(
    post,
    path = "/submit_post",
    tag = "Posts",
    summary = "Create a post",
    description = "Inserts a post. `title_post`, `content_post` and `url_image_post` must all be non-empty.",
    request_body = SubmitPostRequest,
    responses(
        (status = 200, description = "Post created", body = StatusMessage),
        (status = 400, description = "Missing or empty field", body = ErrorResponse),
        (status = 401, description = "No admin session", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn submit_post(
    State(state): State<AppState>,
    Validated(new_post): Validated<SubmitPostRequest>,
) -> Result<Json<StatusMessage>, ApiError> {
    let mut conn = state.posts.acquire().await?;
    let post_id = conn.insert(&new_post).await?;

    tracing::info!(post_id, title = %new_post.title, "post created");
    Ok(Json(StatusMessage::ok("Post created successfully")))
}

/// `GET /get_posts` — List all posts, newest first.
///
/// # Errors
///
/// Returns [`ApiError::Storage`] if the query fails.
#[utoipa::path(
    get,
    path = "/get_posts",
    tag = "Posts",
    summary = "List posts",
    description = "Returns every post ordered by id, descending. No pagination.",
    responses(
        (status = 200, description = "All posts", body = PostListResponse),
        (status = 401, description = "No admin session", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn get_posts(State(state): State<AppState>) -> Result<Json<PostListResponse>, ApiError> {
    let mut conn = state.posts.acquire().await?;
    let posts = conn.list_all().await?;
    Ok(Json(PostListResponse::ok(posts)))
}

/// Post routes. Mount behind [`crate::auth::require_admin`].
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/submit_post", post(submit_post))
        .route("/get_posts", get(get_posts))
}
