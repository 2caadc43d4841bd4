//! Shared response shapes and the validating body extractor.

use std::fmt::Debug;

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::error::ApiError;

/// `{"status": "ok", "message": ...}` success body.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatusMessage {
    /// Always `"ok"`.
    pub status: String,
    /// Human-readable outcome.
    pub message: String,
}

impl StatusMessage {
    /// Builds an `"ok"` body with the given message.
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: message.into(),
        }
    }
}

/// A JSON request body with its own validation rules.
pub trait RequestBody: DeserializeOwned + Send {
    /// Result of successful validation.
    type Output: Debug + Send;

    /// Message reported when the body is absent, not a JSON object, or
    /// an empty object.
    const UNREADABLE: &'static str;

    /// Checks the parsed body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::BadRequest`] naming the offending field.
    fn validate(self) -> Result<Self::Output, ApiError>;
}

/// Extractor yielding the validated form of a [`RequestBody`].
///
/// The body must be a non-empty JSON object; anything else is answered
/// with [`RequestBody::UNREADABLE`]. Field checks are left to
/// [`RequestBody::validate`].
#[derive(Debug)]
pub struct Validated<T: RequestBody>(pub T::Output);

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: RequestBody,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let unreadable = || ApiError::BadRequest(T::UNREADABLE.to_string());

        let Json(fields) = Json::<Map<String, Value>>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "unreadable request body");
                unreadable()
            })?;
        if fields.is_empty() {
            return Err(unreadable());
        }

        let body = serde_json::from_value::<T>(Value::Object(fields)).map_err(|err| {
            tracing::debug!(error = %err, "request body does not fit its shape");
            unreadable()
        })?;
        body.validate().map(Self)
    }
}

/// Deserializes a field so that an explicit `null` stays distinguishable
/// from an absent key. Pair with `#[serde(default)]`.
///
/// # Errors
///
/// Fails only if the input is not valid JSON.
pub fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Returns the value of a required text field, rejecting absent, empty
/// and non-string values.
///
/// # Errors
///
/// Returns [`ApiError::BadRequest`] with `Missing required field: <name>`.
pub fn required_field(value: Option<Value>, name: &str) -> Result<String, ApiError> {
    match value {
        Some(Value::String(v)) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::BadRequest(format!(
            "Missing required field: {name}"
        ))),
    }
}
