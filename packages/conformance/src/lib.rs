//! Shared helpers for the bonus gateway conformance test suite.
//!
//! Provides two in-process servers, each bound to an ephemeral port on
//! `127.0.0.1`:
//!
//! - [`spawn_mock_bonus_api`]: a stand-in for the remote bonus API that
//!   answers every request with a configurable [`MockReply`] and records
//!   what it received.
//! - [`spawn_gateway`]: a real gateway wired to a downstream URL through
//!   [`HttpBonusClient`], exactly as the binary wires it.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use bonus_gateway::{build_router, client::http::API_KEY_HEADER, BonusService, HttpBonusClient};
use serde_json::Value;

/// API key the gateway under test sends downstream.
pub const API_KEY: &str = "conformance-key";

/// What the mock bonus API answers with.
#[derive(Debug, Clone)]
pub struct MockReply {
    pub status: u16,
    pub location: Option<String>,
    pub body: Option<Value>,
    /// Sleep before answering.
    pub delay: Option<Duration>,
}

impl MockReply {
    pub fn status(status: u16) -> Self {
        Self {
            status,
            location: None,
            body: None,
            delay: None,
        }
    }

    pub fn json(status: u16, body: Value) -> Self {
        Self {
            body: Some(body),
            ..Self::status(status)
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// A request as the mock bonus API received it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceivedRequest {
    pub method: Method,
    /// Raw (still percent-encoded) path.
    pub path: String,
    pub api_key: Option<String>,
}

/// Shared state of the mock bonus API.
pub struct MockBonusApi {
    reply: Mutex<MockReply>,
    received: Mutex<Vec<ReceivedRequest>>,
}

impl MockBonusApi {
    /// Replace the reply used for subsequent requests.
    pub fn set_reply(&self, reply: MockReply) {
        *self.reply.lock().unwrap_or_else(|p| p.into_inner()) = reply;
    }

    /// Every request received so far, in order.
    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.received
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }
}

async fn answer(
    State(mock): State<Arc<MockBonusApi>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    mock.received
        .lock()
        .unwrap_or_else(|p| p.into_inner())
        .push(ReceivedRequest {
            method,
            path: uri.path().to_string(),
            api_key: headers
                .get(API_KEY_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
        });

    let reply = mock.reply.lock().unwrap_or_else(|p| p.into_inner()).clone();
    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }

    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut response = match reply.body {
        Some(body) => (status, Json(body)).into_response(),
        None => status.into_response(),
    };
    if let Some(location) = reply.location.and_then(|l| l.parse().ok()) {
        response.headers_mut().insert(header::LOCATION, location);
    }
    response
}

/// Start a mock bonus API and return `(api_base_url, mock)`.
///
/// The base URL ends in `/api/v1`, mirroring a real deployment. The mock
/// initially answers `500` with no body.
///
/// # Panics
///
/// Panics if the TCP listener cannot be bound.
pub async fn spawn_mock_bonus_api() -> (String, Arc<MockBonusApi>) {
    let mock = Arc::new(MockBonusApi {
        reply: Mutex::new(MockReply::status(500)),
        received: Mutex::new(Vec::new()),
    });

    let router = Router::new()
        .fallback(answer)
        .with_state(Arc::clone(&mock));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("get local addr");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("mock bonus API error");
    });

    (format!("http://{addr}/api/v1"), mock)
}

/// Start a gateway that talks to `api_url` and return its base URL.
///
/// # Panics
///
/// Panics if the TCP listener cannot be bound.
pub async fn spawn_gateway(api_url: &str) -> String {
    spawn_gateway_with_timeout(api_url, Duration::from_secs(5)).await
}

/// Like [`spawn_gateway`], with an explicit downstream request timeout.
pub async fn spawn_gateway_with_timeout(api_url: &str, timeout: Duration) -> String {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("build downstream HTTP client");
    let bonus_client = HttpBonusClient::new(client, api_url, API_KEY);
    let router = build_router(BonusService::new(Arc::new(bonus_client)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("get local addr");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("conformance gateway error");
    });

    format!("http://{addr}")
}
