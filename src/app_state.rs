//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use crate::auth::AuthGate;
use crate::storage::PostRepository;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Post storage; handlers acquire one connection per request.
    pub posts: PostRepository,
    /// Admin password check and session cookie handling.
    pub auth: Arc<AuthGate>,
}

impl AppState {
    /// Creates the state from its parts.
    #[must_use]
    pub fn new(posts: PostRepository, auth: AuthGate) -> Self {
        Self {
            posts,
            auth: Arc::new(auth),
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.auth.key().clone()
    }
}
