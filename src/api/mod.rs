//! JSON API layer: route handlers, DTOs, OpenAPI document and router
//! composition.

pub mod dto;
pub mod handlers;
pub mod openapi;

use axum::Router;
use axum::middleware;

use crate::app_state::AppState;
use crate::auth::require_admin;

/// Builds the JSON router. `/submit_post` and `/get_posts` sit behind
/// [`require_admin`].
pub fn build_router(state: &AppState) -> Router<AppState> {
    let admin_only = handlers::post::routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .merge(handlers::auth::routes())
        .merge(admin_only)
        .merge(handlers::system::routes())
}
