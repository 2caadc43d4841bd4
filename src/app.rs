//! Router assembly.

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::AppState;
use crate::web;

/// Builds the complete application: pages, JSON endpoints and request
/// tracing, bound to `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes())
        .merge(api::build_router(&state))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
