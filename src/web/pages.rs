//! Page handlers.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::SignedCookieJar;
use serde::Deserialize;

use super::views::{
    AdminTemplate, CountdownTemplate, DetailTemplate, DocumentTemplate, IndexTemplate,
    LoginTemplate, PostDetail, render_template,
};
use crate::app_state::AppState;
use crate::auth::AdminSession;
use crate::error::StorageError;
use crate::storage::Post;

/// Query string of `/tailieu`.
#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    /// Post ID; kept as text so malformed values redirect instead of
    /// failing extraction.
    #[serde(default)]
    pub id: Option<String>,
}

/// `GET /` — Landing page.
pub async fn index() -> Response {
    render_template(&IndexTemplate)
}

/// `GET /countdown` — Static page.
pub async fn countdown() -> Response {
    render_template(&CountdownTemplate)
}

/// `GET /admin` — Admin shell, or a redirect to `/login`.
pub async fn admin(session: AdminSession) -> Response {
    if !session.is_authenticated() {
        return Redirect::to("/login").into_response();
    }
    render_template(&AdminTemplate)
}

/// `GET /login` — Login form, or a redirect to `/admin` when already
/// logged in.
pub async fn login(session: AdminSession) -> Response {
    if session.is_authenticated() {
        return Redirect::to("/admin").into_response();
    }
    render_template(&LoginTemplate)
}

/// `GET /admin/logout` — Drop the session and go back to `/login`.
pub async fn logout(State(state): State<AppState>, jar: SignedCookieJar) -> Response {
    (state.auth.logout(jar), Redirect::to("/login")).into_response()
}

/// `GET /document` — Gallery of every post, newest first.
pub async fn document(State(state): State<AppState>) -> Response {
    let template = match load_all(&state).await {
        Ok(posts) => DocumentTemplate::with_posts(&posts),
        Err(err) => {
            tracing::error!(error = %err, "failed to load posts for gallery");
            DocumentTemplate::load_failed()
        }
    };
    render_template(&template)
}

/// `GET /tailieu?id=<id>` — Single post. Any miss or failure redirects to
/// `/document`.
pub async fn detail(
    State(state): State<AppState>,
    query: Result<Query<DetailQuery>, QueryRejection>,
) -> Response {
    let id = query
        .ok()
        .and_then(|Query(q)| q.id)
        .and_then(|raw| raw.trim().parse::<i64>().ok());
    let Some(id) = id else {
        return Redirect::to("/document").into_response();
    };

    match load_one(&state, id).await {
        Ok(Some(post)) => render_template(&DetailTemplate {
            post: PostDetail::from(post),
        }),
        Ok(None) => Redirect::to("/document").into_response(),
        Err(err) => {
            tracing::error!(post_id = id, error = %err, "failed to load post");
            Redirect::to("/document").into_response()
        }
    }
}

async fn load_all(state: &AppState) -> Result<Vec<Post>, StorageError> {
    let mut conn = state.posts.acquire().await?;
    conn.list_all().await
}

async fn load_one(state: &AppState, id: i64) -> Result<Option<Post>, StorageError> {
    let mut conn = state.posts.acquire().await?;
    conn.get_by_id(id).await
}
