//! Check-out / check-in service

use std::collections::HashMap;

use chrono::Utc;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        checkout::{CheckInRequest, CheckOutRequest, SystemCheckoutReport, SystemCheckoutRequest},
        equipment::{require_non_blank, Equipment, EquipmentQuery},
        report::BulkReport,
        system::SlotSelection,
    },
    repository::{equipment::modify_in, Repository},
};

use super::substitution;

#[derive(Clone)]
pub struct LifecycleService {
    repository: Repository,
    default_check_in_note: String,
}

impl LifecycleService {
    pub fn new(repository: Repository, default_check_in_note: String) -> Self {
        Self {
            repository,
            default_check_in_note,
        }
    }

    /// Check out a single available item
    pub async fn check_out(&self, id: &str, request: &CheckOutRequest) -> AppResult<Equipment> {
        request.validate()?;
        let now = Utc::now();
        let equipment = self
            .repository
            .equipment
            .modify(id, |e| {
                e.check_out(&request.work_order, &request.holder_name, None, now)?;
                Ok(e.clone())
            })
            .await?;

        tracing::info!(
            equipment = %id,
            work_order = %request.work_order,
            holder = %request.holder_name,
            "Equipment checked out"
        );
        Ok(equipment)
    }

    /// Check in a checked-out item, optionally reporting it broken
    pub async fn check_in(&self, id: &str, request: CheckInRequest) -> AppResult<Equipment> {
        let now = Utc::now();
        let is_broken = request.is_broken;
        let equipment = self
            .repository
            .equipment
            .modify(id, |e| {
                e.check_in(request.notes, is_broken, now)?;
                Ok(e.clone())
            })
            .await?;

        if is_broken {
            tracing::warn!(equipment = %id, "Equipment checked in broken");
        } else {
            tracing::info!(equipment = %id, "Equipment checked in");
        }
        Ok(equipment)
    }

    /// Return a broken item to service
    pub async fn repair(&self, id: &str, notes: Option<String>) -> AppResult<Equipment> {
        let now = Utc::now();
        let equipment = self
            .repository
            .equipment
            .modify(id, |e| {
                e.repair(notes, now)?;
                Ok(e.clone())
            })
            .await?;

        tracing::info!(equipment = %id, "Equipment repaired");
        Ok(equipment)
    }

    /// Check out the listed items as one system, retagging each with `system_color`
    pub async fn check_out_system(
        &self,
        system_color: &str,
        ids: &[String],
        work_order: &str,
        holder_name: &str,
    ) -> AppResult<SystemCheckoutReport> {
        let request = SystemCheckoutRequest {
            work_order: work_order.to_string(),
            holder_name: holder_name.to_string(),
            items: ids.iter().map(SlotSelection::original).collect(),
        };
        self.check_out_system_with_swaps(system_color, &request).await
    }

    /// System checkout where any slot may be filled by a same-category spare
    pub async fn check_out_system_with_swaps(
        &self,
        system_color: &str,
        request: &SystemCheckoutRequest,
    ) -> AppResult<SystemCheckoutReport> {
        request.validate()?;
        let system_color = require_non_blank(system_color, "System color")?;
        let work_order = require_non_blank(&request.work_order, "Work order")?;
        let holder_name = require_non_blank(&request.holder_name, "Holder name")?;

        let now = Utc::now();
        let result = self
            .repository
            .equipment
            .with_store_mut(|store| {
                let mut report = BulkReport::default();
                let mut slots = Vec::with_capacity(request.items.len());

                for (original_id, planned) in substitution::plan(store, &request.items) {
                    let slot = match planned {
                        Ok(slot) => slot,
                        Err(err) => {
                            report.failure(original_id, &err);
                            continue;
                        }
                    };
                    let details = substitution::history_details(&system_color, &slot);
                    let outcome = modify_in(store, &slot.equipment_id, |e| {
                        e.check_out(&work_order, &holder_name, Some(details), now)?;
                        e.system_color = Some(system_color.clone());
                        Ok(())
                    });
                    match outcome {
                        Ok(()) => {
                            report.success(slot.equipment_id.clone());
                            slots.push(slot);
                        }
                        Err(err) => report.failure(slot.equipment_id.clone(), &err),
                    }
                }

                SystemCheckoutReport::new(report, slots)
            })
            .await;

        tracing::info!(
            system = %system_color,
            work_order = %work_order,
            succeeded = result.succeeded.len(),
            failed = result.failed.len(),
            swapped = result.slots.iter().filter(|s| s.substituted).count(),
            "System checked out"
        );
        Ok(result)
    }

    /// Check in everything still out under `work_order`
    ///
    /// Items without an entry in `reports` are returned in working order with
    /// the default note. Fails with `NotFound` when nothing is out under the
    /// work order.
    pub async fn check_in_by_work_order(
        &self,
        work_order: &str,
        mut reports: HashMap<String, CheckInRequest>,
    ) -> AppResult<BulkReport> {
        let work_order = require_non_blank(work_order, "Work order")?;
        let default_note = format!("{} {}", self.default_check_in_note, work_order);
        let now = Utc::now();

        let report = self
            .repository
            .equipment
            .with_store_mut(|store| {
                let active: Vec<String> = store
                    .values()
                    .filter(|e| {
                        e.is_checked_out() && e.work_order.as_deref() == Some(work_order.as_str())
                    })
                    .map(|e| e.id.clone())
                    .collect();
                if active.is_empty() {
                    return Err(AppError::NotFound(format!(
                        "No equipment checked out under work order {}",
                        work_order
                    )));
                }

                let mut report = BulkReport::default();
                for id in active {
                    let item = reports.remove(&id).unwrap_or_else(|| CheckInRequest {
                        notes: Some(default_note.clone()),
                        is_broken: false,
                    });
                    match modify_in(store, &id, |e| e.check_in(item.notes, item.is_broken, now)) {
                        Ok(()) => report.success(id),
                        Err(err) => report.failure(id, &err),
                    }
                }
                Ok(report)
            })
            .await?;

        for stale in reports.keys() {
            tracing::warn!(
                equipment = %stale,
                work_order = %work_order,
                "Ignoring report for item not out under work order"
            );
        }
        tracing::info!(
            work_order = %work_order,
            returned = report.succeeded.len(),
            "Work order checked in"
        );
        Ok(report)
    }

    /// Items currently out under a work order
    pub async fn list_by_work_order(&self, work_order: &str) -> AppResult<Vec<Equipment>> {
        let work_order = require_non_blank(work_order, "Work order")?;
        let query = EquipmentQuery {
            work_order: Some(work_order.clone()),
            ..Default::default()
        };
        let items = self.repository.equipment.list(&query).await;
        if items.is_empty() {
            return Err(AppError::NotFound(format!(
                "No equipment checked out under work order {}",
                work_order
            )));
        }
        Ok(items)
    }

    /// Available same-category items that could replace `id` in a system checkout
    pub async fn replacement_candidates(&self, id: &str) -> AppResult<Vec<Equipment>> {
        self.repository
            .equipment
            .with_store(|store| {
                let original = store
                    .get(id)
                    .ok_or_else(|| crate::repository::equipment::not_found(id))?;
                Ok(substitution::replacement_candidates(store, original)
                    .into_iter()
                    .cloned()
                    .collect())
            })
            .await
    }
}
