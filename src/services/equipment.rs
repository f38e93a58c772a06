//! Equipment registry service

use chrono::Utc;
use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        equipment::{CreateEquipment, Equipment, EquipmentQuery, StatusCounts, UpdateEquipment},
        history::HistoryEntry,
        report::BulkReport,
    },
    repository::{equipment::insert_new, Repository},
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &EquipmentQuery) -> Vec<Equipment> {
        self.repository.equipment.list(query).await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Equipment> {
        self.repository.equipment.get_by_id(id).await
    }

    /// Register a new item
    pub async fn create(&self, data: CreateEquipment) -> AppResult<Equipment> {
        let data = data.normalized();
        data.validate()?;
        let equipment = self.repository.equipment.create(data, Utc::now()).await?;
        tracing::info!(
            equipment = %equipment.id,
            category = %equipment.category,
            "Equipment created"
        );
        Ok(equipment)
    }

    pub async fn update(&self, id: &str, data: UpdateEquipment) -> AppResult<Equipment> {
        self.repository.equipment.update(id, data, Utc::now()).await
    }

    /// Remove an item and its history
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.repository.equipment.delete(id).await?;
        tracing::info!(equipment = %id, "Equipment deleted");
        Ok(())
    }

    pub async fn status_counts(&self) -> StatusCounts {
        self.repository
            .equipment
            .with_store(|store| StatusCounts::tally(store.values()))
            .await
    }

    /// History of an item, newest first
    pub async fn history(&self, id: &str) -> AppResult<Vec<HistoryEntry>> {
        Ok(self.get_by_id(id).await?.history)
    }

    /// Create every request that is valid and not a duplicate
    pub async fn import(&self, rows: Vec<CreateEquipment>) -> BulkReport {
        let now = Utc::now();
        let report = self
            .repository
            .equipment
            .with_store_mut(|store| {
                let mut report = BulkReport::default();
                for row in rows {
                    let row = row.normalized();
                    let id = row.id.clone();
                    let created = row
                        .validate()
                        .map_err(Into::into)
                        .and_then(|_| insert_new(store, row, now));
                    match created {
                        Ok(_) => report.success(id),
                        Err(err) => report.failure(id, &err),
                    }
                }
                report
            })
            .await;

        tracing::info!(
            created = report.succeeded.len(),
            rejected = report.failed.len(),
            "Equipment import finished"
        );
        report
    }
}
