//! Request and response types for the remote bonus API.
//!
//! This crate encodes the wire contract of the downstream bonus service as
//! Rust types. The gateway decodes a downstream response body into one of
//! these whenever the outcome carries it, so a payload that reaches a
//! handler has already been validated against its shape.
//!
//! # Endpoints covered
//!
//! | Method | Path | Type |
//! |--------|------|------|
//! | POST | `/bonus/vacanze/eligibility/{fiscal_code}` | [`FiscalCodeParams`] → [`InstanceId`] |
//! | GET | `/bonus/vacanze/eligibility/{fiscal_code}` | [`FiscalCodeParams`] → [`EligibilityCheck`] |
//! | GET | `/bonus/vacanze/activations/{fiscal_code}/{bonus_id}` | [`BonusActivationParams`] → [`BonusActivation`] |
//! | GET | `/bonus/vacanze/activations/{fiscal_code}` | [`FiscalCodeParams`] → [`PaginatedBonusActivationsCollection`] |
//! | POST | `/bonus/vacanze/activations/{fiscal_code}` | [`FiscalCodeParams`] → [`InstanceId`] |
//!
//! Error responses carry a [`ProblemJson`] body.

pub mod activation;
pub mod eligibility;
pub mod fiscal_code;
pub mod instance;
pub mod params;
pub mod problem;

pub use activation::{
    BonusActivation, BonusActivationItem, BonusActivationStatus,
    PaginatedBonusActivationsCollection,
};
pub use eligibility::{DsuRequest, EligibilityCheck, EligibilityCheckStatus, FamilyMember};
pub use fiscal_code::{FiscalCode, FiscalCodeError};
pub use instance::InstanceId;
pub use params::{BonusActivationParams, FiscalCodeParams};
pub use problem::ProblemJson;
