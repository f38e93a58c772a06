//! System (color group) models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A named color group used to bundle equipment into a virtual kit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SystemColor {
    pub name: String,
    /// Display color, e.g. `#1e88e5`
    pub color: String,
}

/// Create system request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateSystem {
    #[validate(length(min = 1, max = 64, message = "System name must be 1-64 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 32, message = "System color must be 1-32 characters"))]
    pub color: String,
}

/// System with membership counts
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SystemSummary {
    pub name: String,
    pub color: String,
    /// Items tagged with this system
    pub member_count: usize,
    /// Tagged items currently available
    pub available_count: usize,
}

/// Which item fills one slot of a system checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SlotSelection {
    /// Item originally belonging to the kit
    pub original_id: String,
    /// Same-category available item to take instead
    #[serde(default)]
    pub replacement_id: Option<String>,
}

impl SlotSelection {
    pub fn original(id: impl Into<String>) -> Self {
        Self {
            original_id: id.into(),
            replacement_id: None,
        }
    }

    pub fn swapped(id: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            original_id: id.into(),
            replacement_id: Some(replacement.into()),
        }
    }
}

/// Resolved slot: the concrete item that was checked out for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SlotOutcome {
    pub original_id: String,
    pub equipment_id: String,
    pub substituted: bool,
}
