//! Admin login endpoint.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use axum_extra::extract::cookie::SignedCookieJar;

use crate::api::dto::{LoginRequest, LoginResponse, Validated};
use crate::app_state::AppState;
use crate::error::{ApiError, ErrorResponse};

/// `POST /admin/login` — Exchange the admin password for a session.
///
/// # Errors
///
/// Returns [`ApiError::BadRequest`] when the password field is missing
/// and [`ApiError::InvalidCredentials`] when it does not match.
#[utoipa::path(
    post,
    path = "/admin/login",
    tag = "Auth",
    summary = "Admin login",
    description = "Checks the shared admin password. On success the response sets a signed `session` cookie.",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 400, description = "Password field missing", body = ErrorResponse),
        (status = 401, description = "Wrong password", body = ErrorResponse),
    )
)]
pub async fn admin_login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Validated(password): Validated<LoginRequest>,
) -> Result<(SignedCookieJar, Json<LoginResponse>), ApiError> {
    let jar = state.auth.login(jar, &password)?;
    Ok((jar, Json(LoginResponse::redirect_to("/admin"))))
}

/// Login routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/admin/login", post(admin_login))
}
