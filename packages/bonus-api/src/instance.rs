//! Identifier of a long-running procedure started on the remote side.

use serde::{Deserialize, Serialize};

/// Body of a `201 Created` response from the procedure-start endpoints.
///
/// ```json
/// { "id": "01EAFXS3JPMXGAAVW6XCGKS0B7" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstanceId {
    pub id: String,
}

impl InstanceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
