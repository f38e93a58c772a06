//! Scan payloads produced by the external scanner

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::equipment::{non_blank, CreateEquipment, Equipment};
use crate::error::{AppError, AppResult};

/// JSON record encoded in a label
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScannedRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, alias = "systemColor")]
    pub system_color: Option<String>,
}

/// Decoded scan: either a bare identifier or a full record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanPayload {
    Id(String),
    Record(ScannedRecord),
}

impl ScanPayload {
    pub fn parse(raw: &str) -> AppResult<Self> {
        let raw = raw.trim();
        if raw.starts_with('{') {
            let record: ScannedRecord = serde_json::from_str(raw)
                .map_err(|e| AppError::Validation(format!("Invalid scan payload: {}", e)))?;
            if record.id.trim().is_empty() {
                return Err(AppError::Validation("Scan payload has no id".to_string()));
            }
            return Ok(ScanPayload::Record(ScannedRecord {
                id: record.id.trim().to_string(),
                ..record
            }));
        }
        if raw.is_empty() {
            return Err(AppError::Validation("Scan payload is empty".to_string()));
        }
        Ok(ScanPayload::Id(raw.to_string()))
    }

    pub fn id(&self) -> &str {
        match self {
            ScanPayload::Id(id) => id,
            ScanPayload::Record(record) => &record.id,
        }
    }

    /// Create request pre-filled from whatever the label carried
    pub fn draft(&self) -> CreateEquipment {
        match self {
            ScanPayload::Id(id) => CreateEquipment {
                id: id.clone(),
                name: String::new(),
                category: String::new(),
                system_color: None,
            },
            ScanPayload::Record(record) => CreateEquipment {
                id: record.id.clone(),
                name: record.name.clone().unwrap_or_default(),
                category: record.category.clone().unwrap_or_default(),
                system_color: non_blank(record.system_color.clone()),
            },
        }
    }
}

/// Scan request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct ScanRequest {
    /// Raw decoded label text
    pub code: String,
}

/// Result of resolving a scan against the registry
#[derive(Debug, Serialize, ToSchema)]
pub struct ScanResolution {
    pub id: String,
    /// Present when the id is registered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<Equipment>,
    /// Present when the id is unknown, ready to submit as a create request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<CreateEquipment>,
}
