//! Item substitution for system checkout
//!
//! A system checkout names one item per slot. For each slot the caller may
//! keep the original or swap in another item of the same category that is
//! currently available. Planning runs against one snapshot of the store and
//! yields, in input order, either the concrete item for each slot or the
//! reason that slot was rejected.

use std::collections::HashSet;

use crate::{
    error::{AppError, AppResult},
    models::{
        equipment::Equipment,
        system::{SlotOutcome, SlotSelection},
    },
    repository::equipment::{not_found, EquipmentMap},
};

/// Available items that may stand in for `original`, ordered by name
pub fn replacement_candidates<'a>(
    store: &'a EquipmentMap,
    original: &Equipment,
) -> Vec<&'a Equipment> {
    let mut candidates: Vec<&Equipment> = store
        .values()
        .filter(|e| e.id != original.id && e.category == original.category && e.is_available())
        .collect();
    candidates.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
    candidates
}

/// One slot of a system checkout after planning, keyed by its original id
pub type PlannedSlot = (String, AppResult<SlotOutcome>);

fn resolve_slot(store: &EquipmentMap, selection: &SlotSelection) -> AppResult<SlotOutcome> {
    let original = store
        .get(&selection.original_id)
        .ok_or_else(|| not_found(&selection.original_id))?;

    let Some(replacement_id) = selection.replacement_id.as_deref() else {
        return Ok(SlotOutcome {
            original_id: original.id.clone(),
            equipment_id: original.id.clone(),
            substituted: false,
        });
    };

    if replacement_id == original.id {
        return Err(AppError::Validation(format!(
            "Equipment {} cannot replace itself",
            original.id
        )));
    }
    let replacement = store.get(replacement_id).ok_or_else(|| not_found(replacement_id))?;
    if replacement.category != original.category {
        return Err(AppError::Validation(format!(
            "Equipment {} ({}) cannot replace {} ({})",
            replacement.id, replacement.category, original.id, original.category
        )));
    }
    if !replacement.is_available() {
        return Err(AppError::InvalidTransition(format!(
            "Replacement {} is {}",
            replacement.id, replacement.status
        )));
    }

    Ok(SlotOutcome {
        original_id: original.id.clone(),
        equipment_id: replacement.id.clone(),
        substituted: true,
    })
}

/// Resolve every slot in input order; a bad slot is rejected alone
pub fn plan(store: &EquipmentMap, selections: &[SlotSelection]) -> Vec<PlannedSlot> {
    let mut taken: HashSet<String> = HashSet::new();

    selections
        .iter()
        .map(|selection| {
            let resolved = resolve_slot(store, selection).and_then(|slot| {
                if taken.insert(slot.equipment_id.clone()) {
                    Ok(slot)
                } else {
                    Err(AppError::Conflict(format!(
                        "Equipment {} is already used by another slot",
                        slot.equipment_id
                    )))
                }
            });
            (selection.original_id.clone(), resolved)
        })
        .collect()
}

/// History text for an item checked out as part of a system
pub fn history_details(system_color: &str, slot: &SlotOutcome) -> String {
    if slot.substituted {
        format!(
            "Checked out with system {}, replacing {}",
            system_color, slot.original_id
        )
    } else {
        format!("Checked out with system {}", system_color)
    }
}
