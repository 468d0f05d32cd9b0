//! Gateway-injected identity headers extractor.

use axum::Json;
use axum::extract::FromRequestParts;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

/// User identity injected by the gateway via `x-emmaus-user-id` and
/// `x-emmaus-user-role` headers.
///
/// Extraction failure means "not authenticated" (no valid session behind the
/// gateway) and rejects with 401 `AUTHENTICATION_REQUIRED`. Role enforcement
/// (403, insufficient privilege) is done by handlers after extraction.
#[derive(Debug, Clone)]
pub struct IdentityHeaders {
    pub user_id: Uuid,
    pub user_role: u8,
}

/// Rejection emitted when the identity headers are missing or malformed.
#[derive(Debug)]
pub struct AuthenticationRequired;

impl IntoResponse for AuthenticationRequired {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "kind": "AUTHENTICATION_REQUIRED",
            "message": "authentication required",
        });
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

impl<S> FromRequestParts<S> for IdentityHeaders
where
    S: Send + Sync,
{
    type Rejection = AuthenticationRequired;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // Extract values synchronously and return a 'static async move block to
    // avoid capturing `parts` across the await boundary.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let user_id = parts
            .headers
            .get("x-emmaus-user-id")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<Uuid>().ok());

        let user_role = parts
            .headers
            .get("x-emmaus-user-role")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u8>().ok());

        async move {
            let user_id = user_id.ok_or(AuthenticationRequired)?;
            let user_role = user_role.ok_or(AuthenticationRequired)?;
            Ok(Self { user_id, user_role })
        }
    }
}
