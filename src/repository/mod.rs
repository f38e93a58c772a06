//! In-memory registry
//!
//! The repository is an explicit handle: cloning it shares the same stores.
//! Every method takes the store lock once, so each call is a single atomic
//! read-modify-write.

pub mod equipment;
pub mod systems;

use crate::config::SystemSeed;

/// Main repository struct holding the in-memory stores
#[derive(Clone, Default)]
pub struct Repository {
    pub equipment: equipment::EquipmentRepository,
    pub systems: systems::SystemsRepository,
}

impl Repository {
    /// Create a repository with the system catalog seeded from configuration
    pub fn new(systems: &[SystemSeed]) -> Self {
        Self {
            equipment: equipment::EquipmentRepository::new(),
            systems: systems::SystemsRepository::seeded(systems),
        }
    }
}
