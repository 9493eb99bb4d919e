//! Assembles the Axum [`Router`] from all handler modules.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{activations, eligibility, health, AppState},
    service::BonusService,
};

/// Build the complete application router with shared state.
pub fn build_router(bonus: BonusService) -> Router {
    let state = AppState { bonus };

    Router::new()
        .route("/healthz", get(health::healthz))
        // Eligibility
        .route(
            "/api/v1/bonus/vacanze/eligibility",
            post(eligibility::start).get(eligibility::get),
        )
        // Activations
        .route(
            "/api/v1/bonus/vacanze/activations",
            post(activations::start).get(activations::list),
        )
        .route(
            "/api/v1/bonus/vacanze/activations/{bonus_id}",
            get(activations::get_by_id),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
