//! HTML pages: public site, gallery, post detail and the admin shell.
//!
//! Page routes never surface raw errors. Missing sessions and missing
//! posts turn into redirects; storage failures into inline messages.

pub mod pages;
pub mod views;

use axum::Router;
use axum::routing::get;

use crate::app_state::AppState;

/// Page routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/admin", get(pages::admin))
        .route("/login", get(pages::login))
        .route("/admin/logout", get(pages::logout))
        .route("/document", get(pages::document))
        .route("/tailieu", get(pages::detail))
        .route("/countdown", get(pages::countdown))
}
