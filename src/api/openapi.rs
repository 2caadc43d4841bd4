//! OpenAPI description of the JSON endpoints.

use utoipa::OpenApi;

use super::dto::{
    LoginRequest, LoginResponse, PostDto, PostListResponse, StatusMessage, SubmitPostRequest,
};
use super::handlers::{auth, post, system};
use crate::error::ErrorResponse;

/// OpenAPI document root.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "postboard", description = "Post management JSON API"),
    paths(
        auth::admin_login,
        post::submit_post,
        post::get_posts,
        system::health_handler,
    ),
    components(schemas(
        LoginRequest,
        LoginResponse,
        SubmitPostRequest,
        StatusMessage,
        PostDto,
        PostListResponse,
        ErrorResponse,
        system::HealthResponse,
    )),
    tags(
        (name = "Auth", description = "Admin session"),
        (name = "Posts", description = "Post creation and listing"),
        (name = "System", description = "Operational endpoints"),
    )
)]
pub struct ApiDoc;
