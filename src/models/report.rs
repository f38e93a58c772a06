//! Partial-failure reports returned by bulk operations

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, ErrorCode};

/// Why one item of a batch was not processed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemFailure {
    pub id: String,
    pub code: ErrorCode,
    pub reason: String,
}

/// Outcome of a batch: processed ids and per-item failures
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BulkReport {
    pub succeeded: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed: Vec<ItemFailure>,
}

impl BulkReport {
    pub fn success(&mut self, id: impl Into<String>) {
        self.succeeded.push(id.into());
    }

    pub fn failure(&mut self, id: impl Into<String>, error: &AppError) {
        self.failed.push(ItemFailure {
            id: id.into(),
            code: error.code(),
            reason: error.message().to_string(),
        });
    }
}
