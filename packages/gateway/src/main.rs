//! `bonus-gateway`: HTTP gateway in front of the remote bonus API.
//!
//! # Quick start
//!
//! ```sh
//! BONUS_API_URL=https://bonus.example.com/api/v1 BONUS_API_KEY=... bonus-gateway
//!
//! # Custom bind address and downstream timeout:
//! BONUS_GATEWAY_BIND=127.0.0.1:8080 BONUS_API_TIMEOUT_SECS=5 bonus-gateway
//! ```
//!
//! # Environment variables
//!
//! See [`bonus_gateway::config::GatewayConfig`] for the full list.

use std::process::ExitCode;
use std::sync::Arc;

use bonus_gateway::{build_router, BonusService, GatewayConfig, HttpBonusClient};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bonus_gateway=info,tower_http=debug".into()),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("bonus-gateway: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = GatewayConfig::from_env()?;

    let client = HttpBonusClient::from_config(&config)?;
    tracing::info!(
        "downstream: {} (timeout = {}s)",
        config.api_url,
        config.api_timeout_secs
    );

    let app = build_router(BonusService::new(Arc::new(client)));

    tracing::info!("listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
