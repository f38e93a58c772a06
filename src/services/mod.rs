//! Business logic services

pub mod equipment;
pub mod lifecycle;
pub mod scan;
pub mod substitution;
pub mod systems;

use crate::{config::TrackerConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
    pub lifecycle: lifecycle::LifecycleService,
    pub systems: systems::SystemsService,
    pub scan: scan::ScanService,
}

impl Services {
    /// Create all services sharing the given repository
    pub fn new(repository: Repository, tracker_config: &TrackerConfig) -> Self {
        Self {
            equipment: equipment::EquipmentService::new(repository.clone()),
            lifecycle: lifecycle::LifecycleService::new(
                repository.clone(),
                tracker_config.default_check_in_note.clone(),
            ),
            systems: systems::SystemsService::new(repository.clone()),
            scan: scan::ScanService::new(repository),
        }
    }
}
