//! Liveness probe: `GET /healthz`.

use axum::http::StatusCode;

/// Always 200; does not touch the downstream API.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
