//! The authenticated caller on whose behalf downstream calls are made.

use bonus_api::FiscalCode;

/// Caller context handed to every [`BonusService`](crate::BonusService)
/// operation. Only `fiscal_code` is ever sent downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub fiscal_code: FiscalCode,
    pub name: Option<String>,
    pub family_name: Option<String>,
}

impl User {
    pub fn new(fiscal_code: FiscalCode) -> Self {
        Self {
            fiscal_code,
            name: None,
            family_name: None,
        }
    }
}
