//! Data models for the equipment tracker

pub mod checkout;
pub mod equipment;
pub mod history;
pub mod report;
pub mod scan;
pub mod system;

// Re-export commonly used types
pub use equipment::{
    CreateEquipment, Equipment, EquipmentQuery, EquipmentStatus, StatusCounts, UpdateEquipment,
};
pub use history::{HistoryAction, HistoryEntry};
pub use report::{BulkReport, ItemFailure};
pub use scan::{ScanPayload, ScanResolution};
pub use system::{SlotOutcome, SlotSelection, SystemColor, SystemSummary};
