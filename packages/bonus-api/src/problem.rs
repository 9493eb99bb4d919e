//! RFC 7807 problem details, used for every error body.

use serde::{Deserialize, Serialize};

/// An `application/problem+json` body.
///
/// All fields are optional on the wire; the downstream API is free to send
/// `{}` for a bare 500.
///
/// ```json
/// { "title": "Internal server error", "status": 500, "detail": "database unavailable" }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemJson {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub problem_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl ProblemJson {
    /// Construct a problem with a status, title and detail.
    pub fn new(status: u16, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            problem_type: None,
            title: Some(title.into()),
            status: Some(status),
            detail: Some(detail.into()),
            instance: None,
        }
    }
}
