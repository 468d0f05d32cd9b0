use axum::http::StatusCode;

/// `GET /healthz`: liveness. Answers as long as the process is up, so the
/// gateway never routes to a dead instance.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// `GET /readyz`: readiness. Emmaus services hold their database connection
/// from startup, so a process that answers at all is ready to serve; a
/// service with heavier warm-up should shadow this route with its own.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
