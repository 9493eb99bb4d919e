//! Bonus activation types: `/bonus/vacanze/activations/{fiscal_code}[/{bonus_id}]`.

use serde::{Deserialize, Serialize};

use crate::{DsuRequest, FiscalCode};

/// Lifecycle state of a bonus activation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BonusActivationStatus {
    Processing,
    Active,
    Cancelled,
    Failed,
}

/// Response body for `GET /bonus/vacanze/activations/{fiscal_code}/{bonus_id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BonusActivation {
    pub id: String,
    pub status: BonusActivationStatus,

    /// Fiscal code of the family member who requested the bonus.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant_fiscal_code: Option<FiscalCode>,

    /// Redeemable bonus code, present once the activation is `ACTIVE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dsu_request: Option<DsuRequest>,
}

/// A single entry of [`PaginatedBonusActivationsCollection`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BonusActivationItem {
    pub id: String,
    /// Whether the caller is the applicant of this activation.
    pub is_applicant: bool,
    pub status: BonusActivationStatus,
}

/// Response body for `GET /bonus/vacanze/activations/{fiscal_code}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginatedBonusActivationsCollection {
    pub items: Vec<BonusActivationItem>,

    /// Link to the next page; absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_decodes_items() {
        let json = r#"{"items": [{"id": "itemid", "is_applicant": true, "status": "ACTIVE"}]}"#;
        let page: PaginatedBonusActivationsCollection = serde_json::from_str(json).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].status, BonusActivationStatus::Active);
        assert!(page.next.is_none());
    }

    #[test]
    fn activation_omits_absent_fields() {
        let activation = BonusActivation {
            id: "aBonusId".into(),
            status: BonusActivationStatus::Processing,
            applicant_fiscal_code: None,
            code: None,
            created_at: None,
            dsu_request: None,
        };
        let json = serde_json::to_value(&activation).unwrap();
        assert_eq!(json, serde_json::json!({"id": "aBonusId", "status": "PROCESSING"}));
    }
}
