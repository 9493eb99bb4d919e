//! Request parameters for the downstream calls.
//!
//! Each downstream call is keyed by the caller's fiscal code and, where the
//! endpoint addresses a single resource, by that resource's identifier.
//! Nothing else is sent.

use serde::{Deserialize, Serialize};

use crate::FiscalCode;

/// Parameters for every endpoint addressed by the caller alone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FiscalCodeParams {
    pub fiscal_code: FiscalCode,
}

impl FiscalCodeParams {
    pub fn new(fiscal_code: FiscalCode) -> Self {
        Self { fiscal_code }
    }
}

/// Parameters for `GET /bonus/vacanze/activations/{fiscal_code}/{bonus_id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BonusActivationParams {
    pub fiscal_code: FiscalCode,
    pub bonus_id: String,
}

impl BonusActivationParams {
    pub fn new(fiscal_code: FiscalCode, bonus_id: impl Into<String>) -> Self {
        Self {
            fiscal_code,
            bonus_id: bonus_id.into(),
        }
    }
}
