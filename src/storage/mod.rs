//! Storage layer: the `manage_post` table on SQLite.
//!
//! [`PostRepository`] owns the connection pool and the schema;
//! [`PostConnection`] is a per-request handle carrying the post
//! operations. The connection goes back to the pool when the handle is
//! dropped, on success and failure paths alike.

pub mod models;
pub mod sqlite;

pub use models::{NewPost, Post};
pub use sqlite::{PostConnection, PostRepository};
