//! Data Transfer Objects for JSON request/response serialization.
//!
//! Request bodies are parsed and validated once, at the extractor
//! boundary, by [`Validated`]; handlers only ever see the checked result.

pub mod auth_dto;
pub mod common_dto;
pub mod post_dto;

pub use auth_dto::*;
pub use common_dto::*;
pub use post_dto::*;
