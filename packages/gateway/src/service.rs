//! Bonus service: one mediated operation per remote endpoint.
//!
//! Each operation builds its downstream request from the caller's fiscal
//! code (plus the bonus id where the endpoint addresses one activation),
//! runs it through [`shield`], and dispatches the envelope on the
//! operation's [`MappingTable`].
//!
//! # Status tables
//!
//! | Operation | 200 | 201 | 202 | 403 | 404 | 500 |
//! |-----------|-----|-----|-----|-----|-----|-----|
//! | start eligibility check | | redirect | accepted | validation | | internal |
//! | get eligibility check | json | | | | | internal |
//! | get activation by id | json | | | | | internal |
//! | list activations | json | | | | not found | internal |
//! | start activation procedure | | redirect | accepted | forbidden | | internal |
//!
//! A 403 means different things on the two `start` endpoints: on the
//! eligibility check it reports that the caller already holds a bonus, on
//! the activation procedure that the caller may not activate one. Each table
//! states its own rule.

use std::sync::Arc;

use bonus_api::{
    BonusActivation, BonusActivationParams, EligibilityCheck, FiscalCodeParams, InstanceId,
    PaginatedBonusActivationsCollection,
};

use crate::{
    client::BonusApiClient,
    mediator::{shield, MappingTable, Outcome, StatusRule},
    user::User,
};

pub static START_BONUS_ELIGIBILITY_CHECK: MappingTable = MappingTable::new(
    "startBonusEligibilityCheck",
    &[
        (201, StatusRule::RedirectToResource),
        (202, StatusRule::Accepted),
        (
            403,
            StatusRule::Validation {
                title: "Bonus already exists",
                detail: "A bonus already exists for the current user",
            },
        ),
        (500, StatusRule::Internal),
    ],
);

pub static GET_BONUS_ELIGIBILITY_CHECK: MappingTable = MappingTable::new(
    "getBonusEligibilityCheck",
    &[(200, StatusRule::Json), (500, StatusRule::Internal)],
);

pub static GET_LATEST_BONUS_ACTIVATION_BY_ID: MappingTable = MappingTable::new(
    "getLatestBonusActivationById",
    &[(200, StatusRule::Json), (500, StatusRule::Internal)],
);

pub static GET_ALL_BONUS_ACTIVATIONS: MappingTable = MappingTable::new(
    "getAllBonusActivations",
    &[
        (200, StatusRule::Json),
        (404, StatusRule::NotFound),
        (500, StatusRule::Internal),
    ],
);

pub static START_BONUS_ACTIVATION_PROCEDURE: MappingTable = MappingTable::new(
    "startBonusActivationProcedure",
    &[
        (201, StatusRule::RedirectToResource),
        (202, StatusRule::Accepted),
        (403, StatusRule::ForbiddenNotAuthorized),
        (500, StatusRule::Internal),
    ],
);

/// Mediates calls to the remote bonus API.
///
/// Cheap to clone: the only state is the shared client.
#[derive(Clone)]
pub struct BonusService {
    client: Arc<dyn BonusApiClient>,
}

impl BonusService {
    pub fn new(client: Arc<dyn BonusApiClient>) -> Self {
        Self { client }
    }

    /// Start the asynchronous eligibility check for `user`.
    pub async fn start_bonus_eligibility_check(&self, user: &User) -> Outcome<InstanceId> {
        let params = FiscalCodeParams::new(user.fiscal_code.clone());
        shield(&START_BONUS_ELIGIBILITY_CHECK, || {
            self.client.start_bonus_eligibility_check(params)
        })
        .await
    }

    /// Read back the result of `user`'s eligibility check.
    pub async fn get_bonus_eligibility_check(&self, user: &User) -> Outcome<EligibilityCheck> {
        let params = FiscalCodeParams::new(user.fiscal_code.clone());
        shield(&GET_BONUS_ELIGIBILITY_CHECK, || {
            self.client.get_bonus_eligibility_check(params)
        })
        .await
    }

    /// Read the latest state of one of `user`'s bonus activations.
    pub async fn get_latest_bonus_activation_by_id(
        &self,
        user: &User,
        bonus_id: &str,
    ) -> Outcome<BonusActivation> {
        let params = BonusActivationParams::new(user.fiscal_code.clone(), bonus_id);
        shield(&GET_LATEST_BONUS_ACTIVATION_BY_ID, || {
            self.client.get_latest_bonus_activation_by_id(params)
        })
        .await
    }

    /// List the bonus activations `user` takes part in.
    pub async fn get_all_bonus_activations(
        &self,
        user: &User,
    ) -> Outcome<PaginatedBonusActivationsCollection> {
        let params = FiscalCodeParams::new(user.fiscal_code.clone());
        shield(&GET_ALL_BONUS_ACTIVATIONS, || {
            self.client.get_all_bonus_activations(params)
        })
        .await
    }

    /// Start the asynchronous bonus activation procedure for `user`.
    pub async fn start_bonus_activation_procedure(&self, user: &User) -> Outcome<InstanceId> {
        let params = FiscalCodeParams::new(user.fiscal_code.clone());
        shield(&START_BONUS_ACTIVATION_PROCEDURE, || {
            self.client.start_bonus_activation_procedure(params)
        })
        .await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
