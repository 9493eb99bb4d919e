//! HTTP request handlers for the bonus gateway.
//!
//! Each submodule covers one resource. Handlers extract the caller, call
//! the matching [`BonusService`] operation, and return its [`Outcome`]
//! directly; the status/body mapping lives in [`crate::response`].
//!
//! [`Outcome`]: crate::Outcome

pub mod activations;
pub mod eligibility;
pub mod health;

use crate::service::BonusService;

/// Shared application state threaded through all Axum handlers via [`axum::extract::State`].
#[derive(Clone)]
pub struct AppState {
    pub bonus: BonusService,
}
