//! System catalog store

use std::sync::Arc;

use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::{
    config::SystemSeed,
    error::{AppError, AppResult},
    models::system::SystemColor,
};

#[derive(Clone, Default)]
pub struct SystemsRepository {
    store: Arc<RwLock<IndexMap<String, SystemColor>>>,
}

impl SystemsRepository {
    pub fn seeded(seeds: &[SystemSeed]) -> Self {
        let store = seeds
            .iter()
            .map(|s| {
                (
                    s.name.clone(),
                    SystemColor {
                        name: s.name.clone(),
                        color: s.color.clone(),
                    },
                )
            })
            .collect();
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// List systems in catalog order
    pub async fn list(&self) -> Vec<SystemColor> {
        self.store.read().await.values().cloned().collect()
    }

    pub async fn create(&self, system: SystemColor) -> AppResult<SystemColor> {
        let mut store = self.store.write().await;
        if store.contains_key(&system.name) {
            return Err(AppError::Conflict(format!(
                "System {} already exists",
                system.name
            )));
        }
        store.insert(system.name.clone(), system.clone());
        Ok(system)
    }

    pub async fn delete(&self, name: &str) -> AppResult<()> {
        self.store
            .write()
            .await
            .shift_remove(name)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("System {} not found", name)))
    }
}
