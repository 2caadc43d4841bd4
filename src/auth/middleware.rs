//! Per-request admin context and the guard for privileged JSON routes.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Request};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::SignedCookieJar;

use crate::app_state::AppState;
use crate::error::ApiError;

/// Authentication context of the current request.
///
/// Extraction never fails: requests without a valid session simply come
/// out unauthenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminSession {
    authenticated: bool,
}

impl AdminSession {
    /// Returns `true` if the request carries a valid admin session.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::from_headers(&parts.headers, state.auth.key().clone());
        Ok(Self {
            authenticated: state.auth.is_authenticated(&jar),
        })
    }
}

/// Rejects requests without an admin session with `401` before the
/// handler (and its body extractor) runs.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] for unauthenticated requests.
pub async fn require_admin(
    session: AdminSession,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !session.is_authenticated() {
        tracing::debug!(path = %request.uri().path(), "unauthenticated request to admin endpoint");
        return Err(ApiError::Unauthorized);
    }
    Ok(next.run(request).await)
}
