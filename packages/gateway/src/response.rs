//! HTTP rendering of [`Outcome`].
//!
//! | Variant | Status | Body |
//! |---------|--------|------|
//! | `SuccessJson` | 200 | payload |
//! | `SuccessRedirectToResource` | 201 + `Location` | payload |
//! | `SuccessAccepted` | 202 | empty |
//! | `ErrorValidation` | 400 | problem+json |
//! | `ErrorForbiddenNotAuthorized` | 403 | problem+json |
//! | `ErrorNotFound` | 404 | problem+json |
//! | `ErrorInternal` | 500 | problem+json |

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{error::problem_response, mediator::Outcome};

pub const FORBIDDEN_TITLE: &str = "You are not allowed here";
pub const FORBIDDEN_DETAIL: &str =
    "You do not have enough permission to complete the operation you requested";
pub const NOT_FOUND_TITLE: &str = "Not found";
pub const NOT_FOUND_DETAIL: &str = "The requested resource was not found";
pub const INTERNAL_TITLE: &str = "Internal server error";

impl<T: Serialize> IntoResponse for Outcome<T> {
    fn into_response(self) -> Response {
        match self {
            Outcome::SuccessJson(value) => (StatusCode::OK, Json(value)).into_response(),
            Outcome::SuccessRedirectToResource { value, location } => (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(value),
            )
                .into_response(),
            Outcome::SuccessAccepted => StatusCode::ACCEPTED.into_response(),
            Outcome::ErrorValidation { title, detail } => {
                problem_response(StatusCode::BAD_REQUEST, &title, detail)
            }
            Outcome::ErrorForbiddenNotAuthorized => {
                problem_response(StatusCode::FORBIDDEN, FORBIDDEN_TITLE, FORBIDDEN_DETAIL)
            }
            Outcome::ErrorNotFound => {
                problem_response(StatusCode::NOT_FOUND, NOT_FOUND_TITLE, NOT_FOUND_DETAIL)
            }
            Outcome::ErrorInternal(detail) => {
                problem_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_TITLE, detail)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use bonus_api::{InstanceId, ProblemJson};
    use http_body_util::BodyExt;

    async fn body_json(resp: Response) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn content_type(resp: &Response) -> &str {
        resp.headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn success_json_is_200_with_payload() {
        let resp = Outcome::SuccessJson(InstanceId::new("X")).into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(content_type(&resp), "application/json");
        assert_eq!(body_json(resp).await, serde_json::json!({ "id": "X" }));
    }

    #[tokio::test]
    async fn redirect_is_201_with_location() {
        let resp = Outcome::SuccessRedirectToResource {
            value: InstanceId::new("X"),
            location: "resource-url".into(),
        }
        .into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(resp.headers()[header::LOCATION], "resource-url");
        assert_eq!(body_json(resp).await, serde_json::json!({ "id": "X" }));
    }

    #[tokio::test]
    async fn accepted_is_202_without_body() {
        let resp = Outcome::<InstanceId>::SuccessAccepted.into_response();
        assert_eq!(resp.status(), StatusCode::ACCEPTED);
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn errors_are_problem_json() {
        let cases = [
            (
                Outcome::<InstanceId>::ErrorValidation {
                    title: "Bonus already exists".into(),
                    detail: "d".into(),
                },
                StatusCode::BAD_REQUEST,
                "Bonus already exists",
            ),
            (
                Outcome::ErrorForbiddenNotAuthorized,
                StatusCode::FORBIDDEN,
                FORBIDDEN_TITLE,
            ),
            (Outcome::ErrorNotFound, StatusCode::NOT_FOUND, NOT_FOUND_TITLE),
            (
                Outcome::internal("boom"),
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_TITLE,
            ),
        ];

        for (outcome, status, title) in cases {
            let resp = outcome.into_response();
            assert_eq!(resp.status(), status);
            assert_eq!(content_type(&resp), "application/problem+json");
            let problem: ProblemJson = serde_json::from_value(body_json(resp).await).unwrap();
            assert_eq!(problem.status, Some(status.as_u16()));
            assert_eq!(problem.title.as_deref(), Some(title));
        }
    }

    #[tokio::test]
    async fn internal_detail_reaches_the_body() {
        let resp = Outcome::<InstanceId>::internal("unhandled API response status [123]")
            .into_response();
        let json = body_json(resp).await;
        assert_eq!(json["detail"], "unhandled API response status [123]");
    }
}
