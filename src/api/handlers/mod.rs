//! JSON endpoint handlers organized by resource.

pub mod auth;
pub mod post;
pub mod system;
