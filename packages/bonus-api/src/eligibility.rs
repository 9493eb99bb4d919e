//! Eligibility check types: `POST/GET /bonus/vacanze/eligibility/{fiscal_code}`.
//!
//! An eligibility check is an asynchronous procedure on the remote side:
//! starting one yields an [`InstanceId`](crate::InstanceId) and a resource
//! location, and the result is later read back as an [`EligibilityCheck`].

use serde::{Deserialize, Serialize};

use crate::FiscalCode;

/// Result of a completed eligibility check.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EligibilityCheckStatus {
    /// The family unit is entitled to the bonus.
    Eligible,
    /// The family unit is not entitled to the bonus.
    Ineligible,
    /// The check could not be completed.
    Failure,
    /// A member of the family unit already holds a bonus.
    Conflict,
}

/// A member of the caller's family unit, as reported by the income statement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FamilyMember {
    pub fiscal_code: FiscalCode,
    pub name: String,
    pub surname: String,
}

/// The income statement (DSU) the eligibility check was evaluated against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DsuRequest {
    pub request_id: u64,
    pub dsu_protocol_id: String,
    /// ISO 8601 timestamp of the income statement.
    pub dsu_created_at: String,
    #[serde(default)]
    pub has_discrepancies: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isee_type: Option<String>,
}

/// Response body for `GET /bonus/vacanze/eligibility/{fiscal_code}`.
///
/// ```json
/// {
///   "id": "01EAFXS3JPMXGAAVW6XCGKS0B7",
///   "status": "ELIGIBLE",
///   "family_members": [],
///   "max_amount": 150,
///   "max_tax_benefit": 30
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EligibilityCheck {
    pub id: String,
    pub status: EligibilityCheckStatus,

    #[serde(default)]
    pub family_members: Vec<FamilyMember>,

    /// Maximum bonus amount in euros.
    pub max_amount: u32,

    /// Maximum tax benefit in euros.
    pub max_tax_benefit: u32,

    /// ISO 8601 timestamp after which the check must be repeated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_before: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dsu_request: Option<DsuRequest>,
}
