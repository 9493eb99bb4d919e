//! `reqwest`-backed implementation of [`BonusApiClient`].

use std::time::Duration;

use async_trait::async_trait;
use bonus_api::{
    BonusActivation, BonusActivationParams, EligibilityCheck, FiscalCodeParams, InstanceId,
    PaginatedBonusActivationsCollection,
};
use reqwest::{Client, RequestBuilder};
use tracing::debug;

use super::{BonusApiClient, CallEnvelope};
use crate::{config::GatewayConfig, error::ClientError};

/// Header carrying the API key on every downstream request.
pub const API_KEY_HEADER: &str = "X-Functions-Key";

/// Talks to the remote bonus API over HTTP.
///
/// Holds a cloneable [`reqwest::Client`] (which pools connections
/// internally), so one instance serves every handler task.
#[derive(Clone)]
pub struct HttpBonusClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HttpBonusClient {
    /// Create a client from a pre-configured `reqwest::Client`.
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Build a client with the timeout, base URL and key from `config`.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.api_timeout_secs))
            .build()?;
        Ok(Self::new(client, &config.api_url, &config.api_key))
    }

    /// `{base}/bonus/vacanze/{segments...}`, each segment percent-encoded.
    fn url(&self, segments: &[&str]) -> String {
        let mut url = format!("{}/bonus/vacanze", self.base_url);
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url
    }

    async fn send<T>(
        &self,
        request: RequestBuilder,
    ) -> Result<CallEnvelope<T>, ClientError> {
        let response = request.header(API_KEY_HEADER, &self.api_key).send().await?;

        let status = response.status().as_u16();
        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.bytes().await?;

        debug!(status, bytes = body.len(), "bonus API responded");
        Ok(CallEnvelope::decode(status, headers, &body))
    }
}

#[async_trait]
impl BonusApiClient for HttpBonusClient {
    async fn start_bonus_eligibility_check(
        &self,
        params: FiscalCodeParams,
    ) -> Result<CallEnvelope<InstanceId>, ClientError> {
        let url = self.url(&["eligibility", params.fiscal_code.as_str()]);
        self.send(self.client.post(url)).await
    }

    async fn get_bonus_eligibility_check(
        &self,
        params: FiscalCodeParams,
    ) -> Result<CallEnvelope<EligibilityCheck>, ClientError> {
        let url = self.url(&["eligibility", params.fiscal_code.as_str()]);
        self.send(self.client.get(url)).await
    }

    async fn get_latest_bonus_activation_by_id(
        &self,
        params: BonusActivationParams,
    ) -> Result<CallEnvelope<BonusActivation>, ClientError> {
        let url = self.url(&[
            "activations",
            params.fiscal_code.as_str(),
            &params.bonus_id,
        ]);
        self.send(self.client.get(url)).await
    }

    async fn get_all_bonus_activations(
        &self,
        params: FiscalCodeParams,
    ) -> Result<CallEnvelope<PaginatedBonusActivationsCollection>, ClientError> {
        let url = self.url(&["activations", params.fiscal_code.as_str()]);
        self.send(self.client.get(url)).await
    }

    async fn start_bonus_activation_procedure(
        &self,
        params: FiscalCodeParams,
    ) -> Result<CallEnvelope<InstanceId>, ClientError> {
        let url = self.url(&["activations", params.fiscal_code.as_str()]);
        self.send(self.client.post(url)).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{
        extract::Path,
        http::{HeaderMap, StatusCode},
        response::IntoResponse,
        routing::{get, post},
        Json, Router,
    };
    use bonus_api::FiscalCode;
    use tokio::net::TcpListener;

    use crate::client::EnvelopeValue;

    fn raw_json<T: std::fmt::Debug>(value: EnvelopeValue<T>) -> serde_json::Value {
        match value {
            EnvelopeValue::Raw(body) => serde_json::from_slice(&body).unwrap(),
            other => panic!("expected a raw body, got {other:?}"),
        }
    }

    fn fiscal_code() -> FiscalCode {
        "XUZTCT88A51Y311X".parse().unwrap()
    }

    /// Spawn a loopback axum server and return its base URL.
    async fn spawn_mock_server(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/api/v1")
    }

    async fn created(Path(fc): Path<String>, headers: HeaderMap) -> impl IntoResponse {
        let key = headers
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        (
            StatusCode::CREATED,
            [("Location", format!("/eligibility/{fc}"))],
            Json(serde_json::json!({ "id": key })),
        )
    }

    #[tokio::test]
    async fn post_sends_api_key_and_reads_location() {
        let app = Router::new().route("/api/v1/bonus/vacanze/eligibility/{fc}", post(created));
        let base = spawn_mock_server(app).await;

        let client = HttpBonusClient::new(Client::new(), format!("{base}/"), "k3y");
        let env = client
            .start_bonus_eligibility_check(FiscalCodeParams::new(fiscal_code()))
            .await
            .unwrap();

        assert_eq!(env.status, 201);
        assert_eq!(env.location(), Some("/eligibility/XUZTCT88A51Y311X"));
        assert_eq!(raw_json(env.value), serde_json::json!({ "id": "k3y" }));
    }

    #[tokio::test]
    async fn bonus_id_is_percent_encoded() {
        async fn echo(Path((fc, id)): Path<(String, String)>) -> impl IntoResponse {
            Json(serde_json::json!({ "id": format!("{fc}|{id}"), "status": "ACTIVE" }))
        }
        let app = Router::new().route(
            "/api/v1/bonus/vacanze/activations/{fc}/{id}",
            get(echo),
        );
        let base = spawn_mock_server(app).await;

        let client = HttpBonusClient::new(Client::new(), base, "k");
        let env = client
            .get_latest_bonus_activation_by_id(BonusActivationParams::new(fiscal_code(), "a/b c"))
            .await
            .unwrap();

        assert_eq!(raw_json(env.value)["id"], "XUZTCT88A51Y311X|a/b c");
    }

    #[tokio::test]
    async fn server_error_body_is_passed_on() {
        async fn boom() -> impl IntoResponse {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "title": "oops", "detail": "db down" })),
            )
        }
        let app = Router::new().route("/api/v1/bonus/vacanze/activations/{fc}", get(boom));
        let base = spawn_mock_server(app).await;

        let client = HttpBonusClient::new(Client::new(), base, "k");
        let env = client
            .get_all_bonus_activations(FiscalCodeParams::new(fiscal_code()))
            .await
            .unwrap();

        assert_eq!(env.status, 500);
        assert_eq!(raw_json(env.value)["detail"], "db down");
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        // Bind then drop to get a port nothing listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpBonusClient::new(Client::new(), format!("http://{addr}"), "k");
        let err = client
            .get_bonus_eligibility_check(FiscalCodeParams::new(fiscal_code()))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }
}
