//! Per-item history ledger

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Kind of transition recorded in an item's history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum HistoryAction {
    CheckOut,
    CheckIn,
    ReportBroken,
    Maintenance,
}

impl std::fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            HistoryAction::CheckOut => "check_out",
            HistoryAction::CheckIn => "check_in",
            HistoryAction::ReportBroken => "report_broken",
            HistoryAction::Maintenance => "maintenance",
        };
        write!(f, "{}", label)
    }
}

/// One immutable entry of an item's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntry {
    pub action: HistoryAction,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_order: Option<String>,
}

impl HistoryEntry {
    pub fn new(
        action: HistoryAction,
        timestamp: DateTime<Utc>,
        details: Option<String>,
        work_order: Option<String>,
    ) -> Self {
        Self {
            action,
            timestamp,
            details,
            work_order,
        }
    }
}
