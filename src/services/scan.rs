//! Scan resolution service

use crate::{
    error::{AppError, AppResult},
    models::scan::{ScanPayload, ScanResolution},
    repository::Repository,
};

#[derive(Clone)]
pub struct ScanService {
    repository: Repository,
}

impl ScanService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Look up a scanned label; unknown ids come back with a create draft
    pub async fn resolve(&self, raw: &str) -> AppResult<ScanResolution> {
        let payload = ScanPayload::parse(raw)?;
        let id = payload.id().to_string();

        match self.repository.equipment.get_by_id(&id).await {
            Ok(equipment) => Ok(ScanResolution {
                id,
                equipment: Some(equipment),
                draft: None,
            }),
            Err(AppError::NotFound(_)) => {
                tracing::debug!(equipment = %id, "Scanned unknown equipment");
                Ok(ScanResolution {
                    id,
                    equipment: None,
                    draft: Some(payload.draft()),
                })
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::equipment::CreateEquipment;

    #[tokio::test]
    async fn test_resolve_known_and_unknown() {
        let repository = Repository::default();
        repository
            .equipment
            .create(
                CreateEquipment {
                    id: "EQ-1".into(),
                    name: "Meter".into(),
                    category: "Meters".into(),
                    system_color: None,
                },
                Utc::now(),
            )
            .await
            .unwrap();
        let service = ScanService::new(repository);

        let known = service.resolve("EQ-1").await.unwrap();
        assert!(known.equipment.is_some());
        assert!(known.draft.is_none());

        let unknown = service
            .resolve(r#"{"id":"EQ-2","name":"Hose","category":"Hoses"}"#)
            .await
            .unwrap();
        assert!(unknown.equipment.is_none());
        assert_eq!(unknown.draft.unwrap().name, "Hose");
    }
}
