//! Admin login DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::common_dto::{RequestBody, present};
use crate::error::ApiError;

/// Request body for `POST /admin/login`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Admin password, compared exactly. A present value that is not a
    /// string never matches.
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = String)]
    pub password: Option<Value>,
}

impl RequestBody for LoginRequest {
    type Output = String;

    const UNREADABLE: &'static str = "Missing password";

    fn validate(self) -> Result<String, ApiError> {
        match self.password {
            None => Err(ApiError::BadRequest(Self::UNREADABLE.to_string())),
            Some(Value::String(password)) => Ok(password),
            Some(_) => Err(ApiError::InvalidCredentials),
        }
    }
}

/// Response body for a successful login.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Always `"ok"`.
    pub status: String,
    /// Where the client should navigate next.
    pub redirect: String,
}

impl LoginResponse {
    /// Success body pointing at `target`.
    #[must_use]
    pub fn redirect_to(target: &str) -> Self {
        Self {
            status: "ok".to_string(),
            redirect: target.to_string(),
        }
    }
}
