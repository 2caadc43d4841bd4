//! # postboard
//!
//! Small content-management backend: a public site with a post gallery,
//! a password-gated admin area, and JSON endpoints to create and list
//! posts stored in SQLite.
//!
//! ## Architecture
//!
//! ```text
//! Browser
//!     │
//!     ├── Pages (web/)          ── askama templates
//!     ├── JSON endpoints (api/) ── require_admin guard
//!     │
//!     ├── AuthGate (auth/)      ── signed session cookie
//!     │
//!     └── PostRepository (storage/) ── SQLite `manage_post`
//! ```

pub mod api;
pub mod app;
pub mod app_state;
pub mod auth;
pub mod config;
pub mod error;
pub mod storage;
pub mod web;

pub use app::build_router;
