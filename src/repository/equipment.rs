//! Equipment store

use std::sync::Arc;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipment, Equipment, EquipmentQuery, UpdateEquipment},
};

/// Equipment keyed by id, in insertion order
pub type EquipmentMap = IndexMap<String, Equipment>;

pub(crate) fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Equipment {} not found", id))
}

fn sort_by_name(rows: &mut [Equipment]) {
    rows.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
}

#[derive(Clone, Default)]
pub struct EquipmentRepository {
    store: Arc<RwLock<EquipmentMap>>,
}

impl EquipmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// List equipment matching the query, ordered by name
    pub async fn list(&self, query: &EquipmentQuery) -> Vec<Equipment> {
        let store = self.store.read().await;
        let mut rows: Vec<Equipment> = store
            .values()
            .filter(|e| query.matches(e))
            .cloned()
            .collect();
        sort_by_name(&mut rows);
        rows
    }

    /// Get equipment by ID
    pub async fn get_by_id(&self, id: &str) -> AppResult<Equipment> {
        self.store
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Create equipment; the id must not be registered yet
    pub async fn create(&self, data: CreateEquipment, now: DateTime<Utc>) -> AppResult<Equipment> {
        let mut store = self.store.write().await;
        insert_new(&mut store, data, now)
    }

    /// Update mutable fields
    pub async fn update(
        &self,
        id: &str,
        data: UpdateEquipment,
        now: DateTime<Utc>,
    ) -> AppResult<Equipment> {
        self.modify(id, |e| {
            e.apply_update(data, now)?;
            Ok(e.clone())
        })
        .await
    }

    /// Delete equipment and its history
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.store
            .write()
            .await
            .shift_remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    /// Run `f` against a copy of one record and commit it only on success
    pub async fn modify<T, F>(&self, id: &str, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut Equipment) -> AppResult<T>,
    {
        let mut store = self.store.write().await;
        modify_in(&mut store, id, f)
    }

    /// Run `f` with exclusive access to the whole store
    pub async fn with_store_mut<T, F>(&self, f: F) -> T
    where
        F: FnOnce(&mut EquipmentMap) -> T,
    {
        let mut store = self.store.write().await;
        f(&mut store)
    }

    /// Run `f` with shared access to the whole store
    pub async fn with_store<T, F>(&self, f: F) -> T
    where
        F: FnOnce(&EquipmentMap) -> T,
    {
        let store = self.store.read().await;
        f(&store)
    }
}

pub(crate) fn insert_new(
    store: &mut EquipmentMap,
    data: CreateEquipment,
    now: DateTime<Utc>,
) -> AppResult<Equipment> {
    if store.contains_key(&data.id) {
        return Err(AppError::Conflict(format!("Equipment {} already exists", data.id)));
    }
    let equipment = Equipment::new(data, now);
    store.insert(equipment.id.clone(), equipment.clone());
    Ok(equipment)
}

pub(crate) fn modify_in<T, F>(store: &mut EquipmentMap, id: &str, f: F) -> AppResult<T>
where
    F: FnOnce(&mut Equipment) -> AppResult<T>,
{
    let slot = store.get_mut(id).ok_or_else(|| not_found(id))?;
    let mut draft = slot.clone();
    let out = f(&mut draft)?;
    *slot = draft;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::equipment::EquipmentStatus;

    fn create(id: &str, name: &str) -> CreateEquipment {
        CreateEquipment {
            id: id.to_string(),
            name: name.to_string(),
            category: "C".to_string(),
            system_color: None,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_id() {
        let repo = EquipmentRepository::new();
        repo.create(create("X1", "N"), Utc::now()).await.unwrap();
        let err = repo.create(create("X1", "Other"), Utc::now()).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(repo.get_by_id("X1").await.unwrap().name, "N");
    }

    #[tokio::test]
    async fn test_create_delete_get_round_trip() {
        let repo = EquipmentRepository::new();
        repo.create(create("X1", "N"), Utc::now()).await.unwrap();
        repo.delete("X1").await.unwrap();
        assert!(matches!(repo.get_by_id("X1").await, Err(AppError::NotFound(_))));
        assert!(matches!(repo.delete("X1").await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_name() {
        let repo = EquipmentRepository::new();
        repo.create(create("B", "Zeta"), Utc::now()).await.unwrap();
        repo.create(create("A", "Alpha"), Utc::now()).await.unwrap();

        let names: Vec<String> = repo
            .list(&EquipmentQuery::default())
            .await
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Alpha", "Zeta"]);
    }

    #[tokio::test]
    async fn test_failed_modify_leaves_record_untouched() {
        let repo = EquipmentRepository::new();
        repo.create(create("X1", "N"), Utc::now()).await.unwrap();

        let update = UpdateEquipment {
            name: Some("Renamed".into()),
            category: Some("   ".into()),
            system_color: None,
        };
        let err = repo.update("X1", update, Utc::now()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let stored = repo.get_by_id("X1").await.unwrap();
        assert_eq!(stored.name, "N");
        assert_eq!(stored.status, EquipmentStatus::Available);
    }
}
