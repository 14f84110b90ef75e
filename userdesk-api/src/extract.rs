/// Request extractors that reject bad input with `ApiError`
///
/// Axum's stock `Path` and `Json` extractors answer with plain-text
/// rejections. These wrappers keep every client error in the same
/// `ErrorResponse` shape and make sure a bad id never reaches a handler.

use crate::error::ApiError;
use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde_json::Value;

/// Numeric user id taken from the `:id` path segment
///
/// Only an optional `-` followed by ASCII digits is accepted, and the value
/// must fit in 64 bits. Anything else is rejected with 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        parse_id(&raw).map(UserId).ok_or_else(|| {
            ApiError::BadRequest("Validation failed (numeric string is expected)".to_string())
        })
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Untyped JSON request body
///
/// Schema checks happen afterwards in `userdesk_shared::validation`, so this
/// only rejects bodies that are not JSON at all.
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        Ok(JsonBody(value))
    }
}
