//! Equipment model and its lifecycle transitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::history::{HistoryAction, HistoryEntry};
use crate::error::{AppError, AppResult};

/// Lifecycle status of a physical item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentStatus {
    #[default]
    Available,
    CheckedOut,
    Broken,
}

impl std::fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EquipmentStatus::Available => "available",
            EquipmentStatus::CheckedOut => "checked_out",
            EquipmentStatus::Broken => "broken",
        };
        write!(f, "{}", label)
    }
}

/// Equipment record
///
/// `work_order`, `checked_out_by` and `checked_out_at` are set exactly when
/// `status` is `checked_out`. Fields are only changed through the transition
/// methods below and [`Equipment::apply_update`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Equipment {
    /// Scan-derived unique identifier
    pub id: String,
    pub name: String,
    pub category: String,
    /// Color group this item belongs to
    pub system_color: Option<String>,
    pub status: EquipmentStatus,
    pub work_order: Option<String>,
    pub checked_out_by: Option<String>,
    pub checked_out_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    /// Newest first
    pub history: Vec<HistoryEntry>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

/// Create equipment request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEquipment {
    #[validate(length(min = 1, message = "Equipment id is required"))]
    pub id: String,
    #[validate(length(min = 1, message = "Equipment name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Equipment category is required"))]
    pub category: String,
    #[serde(default, alias = "systemColor")]
    pub system_color: Option<String>,
}

impl CreateEquipment {
    /// Trim surrounding whitespace from every text field
    pub fn normalized(self) -> Self {
        Self {
            id: self.id.trim().to_string(),
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            system_color: non_blank(self.system_color),
        }
    }
}

/// Update equipment request
///
/// `system_color` distinguishes "absent" (keep) from `null` (clear).
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateEquipment {
    pub name: Option<String>,
    pub category: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>, nullable)]
    pub system_color: Option<Option<String>>,
}

/// Filters for listing equipment
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct EquipmentQuery {
    pub status: Option<EquipmentStatus>,
    pub category: Option<String>,
    pub system_color: Option<String>,
    pub work_order: Option<String>,
}

impl EquipmentQuery {
    pub fn matches(&self, equipment: &Equipment) -> bool {
        self.status.map_or(true, |s| equipment.status == s)
            && self.category.as_ref().map_or(true, |c| &equipment.category == c)
            && self
                .system_color
                .as_ref()
                .map_or(true, |c| equipment.system_color.as_ref() == Some(c))
            && self
                .work_order
                .as_ref()
                .map_or(true, |w| equipment.work_order.as_ref() == Some(w))
    }
}

/// Registry totals by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct StatusCounts {
    pub total: usize,
    pub available: usize,
    pub checked_out: usize,
    pub broken: usize,
}

impl StatusCounts {
    pub fn tally<'a>(items: impl IntoIterator<Item = &'a Equipment>) -> Self {
        items.into_iter().fold(Self::default(), |mut counts, e| {
            counts.total += 1;
            match e.status {
                EquipmentStatus::Available => counts.available += 1,
                EquipmentStatus::CheckedOut => counts.checked_out += 1,
                EquipmentStatus::Broken => counts.broken += 1,
            }
            counts
        })
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn require_non_blank(value: &str, field: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

impl Equipment {
    /// Build a fresh, available record with an empty history
    pub fn new(data: CreateEquipment, now: DateTime<Utc>) -> Self {
        Self {
            id: data.id,
            name: data.name,
            category: data.category,
            system_color: data.system_color,
            status: EquipmentStatus::Available,
            work_order: None,
            checked_out_by: None,
            checked_out_at: None,
            notes: None,
            history: Vec::new(),
            created_at: now,
            modified_at: now,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == EquipmentStatus::Available
    }

    pub fn is_checked_out(&self) -> bool {
        self.status == EquipmentStatus::CheckedOut
    }

    fn record(&mut self, entry: HistoryEntry) {
        self.history.insert(0, entry);
    }

    fn invalid_transition(&self, operation: &str) -> AppError {
        AppError::InvalidTransition(format!(
            "Cannot {} equipment {}: status is {}",
            operation, self.id, self.status
        ))
    }

    /// available -> checked_out
    pub fn check_out(
        &mut self,
        work_order: &str,
        holder_name: &str,
        details: Option<String>,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        let work_order = require_non_blank(work_order, "Work order")?;
        let holder_name = require_non_blank(holder_name, "Holder name")?;
        if !self.is_available() {
            return Err(self.invalid_transition("check out"));
        }

        let details = details.unwrap_or_else(|| format!("Checked out to {}", holder_name));
        self.status = EquipmentStatus::CheckedOut;
        self.work_order = Some(work_order.clone());
        self.checked_out_by = Some(holder_name);
        self.checked_out_at = Some(now);
        self.modified_at = now;
        self.record(HistoryEntry::new(
            HistoryAction::CheckOut,
            now,
            Some(details),
            Some(work_order),
        ));
        Ok(())
    }

    /// checked_out -> available, or broken when `is_broken`
    pub fn check_in(
        &mut self,
        notes: Option<String>,
        is_broken: bool,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        if !self.is_checked_out() {
            return Err(self.invalid_transition("check in"));
        }

        let notes = non_blank(notes);
        let (status, action) = if is_broken {
            (EquipmentStatus::Broken, HistoryAction::ReportBroken)
        } else {
            (EquipmentStatus::Available, HistoryAction::CheckIn)
        };

        let work_order = self.work_order.take();
        self.status = status;
        self.checked_out_by = None;
        self.checked_out_at = None;
        if notes.is_some() {
            self.notes = notes.clone();
        }
        self.modified_at = now;
        self.record(HistoryEntry::new(action, now, notes, work_order));
        Ok(())
    }

    /// broken -> available
    pub fn repair(&mut self, notes: Option<String>, now: DateTime<Utc>) -> AppResult<()> {
        if self.status != EquipmentStatus::Broken {
            return Err(self.invalid_transition("repair"));
        }

        let notes = non_blank(notes);
        self.status = EquipmentStatus::Available;
        if notes.is_some() {
            self.notes = notes.clone();
        }
        self.modified_at = now;
        self.record(HistoryEntry::new(
            HistoryAction::Maintenance,
            now,
            Some(notes.unwrap_or_else(|| "Repaired".to_string())),
            None,
        ));
        Ok(())
    }

    /// Edit name, category or system tag. Identity and status are untouched.
    pub fn apply_update(&mut self, data: UpdateEquipment, now: DateTime<Utc>) -> AppResult<()> {
        if let Some(name) = data.name {
            self.name = require_non_blank(&name, "Equipment name")?;
        }
        if let Some(category) = data.category {
            self.category = require_non_blank(&category, "Equipment category")?;
        }
        if let Some(system_color) = data.system_color {
            self.system_color = non_blank(system_color);
        }
        self.modified_at = now;
        Ok(())
    }
}
