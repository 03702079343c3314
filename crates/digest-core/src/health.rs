use axum::http::StatusCode;

/// Liveness probe (`GET /healthz`): the process is up and serving.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Readiness probe (`GET /readyz`). Always ready here; a service with real
/// startup work mounts its own handler instead.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
