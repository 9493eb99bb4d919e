//! Eligibility check handlers: `/api/v1/bonus/vacanze/eligibility`.

use axum::extract::State;
use bonus_api::{EligibilityCheck, InstanceId};

use crate::{mediator::Outcome, middleware::identity::RequireUser};

use super::AppState;

/// `POST /api/v1/bonus/vacanze/eligibility`: start the caller's eligibility check.
///
/// 201 with the check's location, 202 if one is already running, 400 if the
/// caller already holds a bonus.
pub async fn start(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Outcome<InstanceId> {
    state.bonus.start_bonus_eligibility_check(&user).await
}

/// `GET /api/v1/bonus/vacanze/eligibility`: read the caller's eligibility check.
pub async fn get(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Outcome<EligibilityCheck> {
    state.bonus.get_bonus_eligibility_check(&user).await
}
