//! System catalog service

use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        equipment::{Equipment, EquipmentQuery},
        system::{CreateSystem, SystemColor, SystemSummary},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct SystemsService {
    repository: Repository,
}

impl SystemsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Systems with member and available counts
    pub async fn list(&self) -> Vec<SystemSummary> {
        let systems = self.repository.systems.list().await;
        self.repository
            .equipment
            .with_store(|store| {
                systems
                    .into_iter()
                    .map(|system| {
                        let members = store
                            .values()
                            .filter(|e| e.system_color.as_deref() == Some(system.name.as_str()));
                        let (member_count, available_count) =
                            members.fold((0, 0), |(all, free), e| {
                                (all + 1, free + usize::from(e.is_available()))
                            });
                        SystemSummary {
                            name: system.name,
                            color: system.color,
                            member_count,
                            available_count,
                        }
                    })
                    .collect()
            })
            .await
    }

    pub async fn create(&self, data: CreateSystem) -> AppResult<SystemColor> {
        let data = CreateSystem {
            name: data.name.trim().to_string(),
            color: data.color.trim().to_string(),
        };
        data.validate()?;
        let system = self
            .repository
            .systems
            .create(SystemColor {
                name: data.name,
                color: data.color,
            })
            .await?;
        tracing::info!(system = %system.name, "System created");
        Ok(system)
    }

    /// Remove a system from the catalog; item tags are left as they are
    pub async fn delete(&self, name: &str) -> AppResult<()> {
        self.repository.systems.delete(name).await?;
        tracing::info!(system = %name, "System deleted");
        Ok(())
    }

    /// Items tagged with a system
    pub async fn members(&self, name: &str) -> Vec<Equipment> {
        let query = EquipmentQuery {
            system_color: Some(name.to_string()),
            ..Default::default()
        };
        self.repository.equipment.list(&query).await
    }
}
