//! Check-out / check-in request and report types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{
    report::{BulkReport, ItemFailure},
    system::{SlotOutcome, SlotSelection},
};

/// Check out a single item
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CheckOutRequest {
    #[validate(length(min = 1, message = "Work order is required"))]
    pub work_order: String,
    #[validate(length(min = 1, message = "Holder name is required"))]
    pub holder_name: String,
}

/// Check in a single item
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CheckInRequest {
    pub notes: Option<String>,
    #[serde(default)]
    pub is_broken: bool,
}

/// Return a broken item to service
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct RepairRequest {
    pub notes: Option<String>,
}

/// Check out every slot of a system, optionally swapping items
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SystemCheckoutRequest {
    #[validate(length(min = 1, message = "Work order is required"))]
    pub work_order: String,
    #[validate(length(min = 1, message = "Holder name is required"))]
    pub holder_name: String,
    #[validate(length(min = 1, message = "At least one item is required"))]
    pub items: Vec<SlotSelection>,
}

/// Return everything checked out under a work order
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct WorkOrderCheckInRequest {
    /// Per-item reports keyed by equipment id; missing items use the default
    #[serde(default)]
    pub reports: HashMap<String, CheckInRequest>,
}

/// Result of a system checkout
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SystemCheckoutReport {
    pub succeeded: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed: Vec<ItemFailure>,
    /// Slots that were checked out, with the concrete item used
    pub slots: Vec<SlotOutcome>,
}

impl SystemCheckoutReport {
    pub fn new(report: BulkReport, slots: Vec<SlotOutcome>) -> Self {
        Self {
            succeeded: report.succeeded,
            failed: report.failed,
            slots,
        }
    }
}
