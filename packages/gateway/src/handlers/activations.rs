//! Bonus activation handlers: `/api/v1/bonus/vacanze/activations`.

use axum::extract::{Path, State};
use bonus_api::{BonusActivation, InstanceId, PaginatedBonusActivationsCollection};

use crate::{mediator::Outcome, middleware::identity::RequireUser};

use super::AppState;

/// `POST /api/v1/bonus/vacanze/activations`: start the activation procedure.
///
/// 201 with the procedure's location, 202 if one is already running, 403 if
/// the caller may not activate a bonus.
pub async fn start(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Outcome<InstanceId> {
    state.bonus.start_bonus_activation_procedure(&user).await
}

/// `GET /api/v1/bonus/vacanze/activations`: list the caller's activations.
///
/// 404 when the caller has none.
pub async fn list(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Outcome<PaginatedBonusActivationsCollection> {
    state.bonus.get_all_bonus_activations(&user).await
}

/// `GET /api/v1/bonus/vacanze/activations/{bonus_id}`: latest state of one activation.
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(bonus_id): Path<String>,
) -> Outcome<BonusActivation> {
    state
        .bonus
        .get_latest_bonus_activation_by_id(&user, &bonus_id)
        .await
}
