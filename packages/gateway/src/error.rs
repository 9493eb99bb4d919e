//! Error types shared across the gateway.
//!
//! None of these ever reach an upstream caller as-is: downstream failures
//! are collapsed into [`Outcome::ErrorInternal`](crate::Outcome) by the
//! mediator, and everything else is rendered through [`problem_response`].

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bonus_api::ProblemJson;

/// Boxed error source carried by [`ClientError::Transport`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors a [`BonusApiClient`](crate::BonusApiClient) call can fail with.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response (connect, timeout, reset).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Transport(Box::new(e))
    }
}

/// Render an `application/problem+json` response.
pub fn problem_response(status: StatusCode, title: &str, detail: impl Into<String>) -> Response {
    let body = ProblemJson::new(status.as_u16(), title, detail);
    (
        status,
        [(header::CONTENT_TYPE, "application/problem+json")],
        Json(body),
    )
        .into_response()
}
