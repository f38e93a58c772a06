//! Equipment registry endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        equipment::{CreateEquipment, Equipment, EquipmentQuery, UpdateEquipment},
        history::HistoryEntry,
        report::BulkReport,
    },
};

use super::AdminPin;

/// List equipment
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    params(
        ("status" = Option<String>, Query, description = "available, checked_out or broken"),
        ("category" = Option<String>, Query, description = "Filter by category"),
        ("system_color" = Option<String>, Query, description = "Filter by system tag"),
        ("work_order" = Option<String>, Query, description = "Filter by work order")
    ),
    responses(
        (status = 200, description = "Equipment list", body = Vec<Equipment>)
    )
)]
pub async fn list_equipment(
    State(state): State<crate::AppState>,
    Query(query): Query<EquipmentQuery>,
) -> Json<Vec<Equipment>> {
    Json(state.services.equipment.list(&query).await)
}

/// Get equipment by ID
#[utoipa::path(
    get,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = String, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment details", body = Equipment),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.get_by_id(&id).await?;
    Ok(Json(equipment))
}

/// Create equipment
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    request_body = CreateEquipment,
    responses(
        (status = 201, description = "Equipment created", body = Equipment),
        (status = 400, description = "Missing required field"),
        (status = 409, description = "Equipment id already registered")
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateEquipment>,
) -> AppResult<(StatusCode, Json<Equipment>)> {
    let equipment = state.services.equipment.create(data).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Import a batch of equipment
#[utoipa::path(
    post,
    path = "/equipment/import",
    tag = "equipment",
    security(("admin_pin" = [])),
    request_body = Vec<CreateEquipment>,
    responses(
        (status = 200, description = "Import report", body = BulkReport)
    )
)]
pub async fn import_equipment(
    State(state): State<crate::AppState>,
    _admin: AdminPin,
    Json(rows): Json<Vec<CreateEquipment>>,
) -> Json<BulkReport> {
    Json(state.services.equipment.import(rows).await)
}

/// Update equipment
#[utoipa::path(
    put,
    path = "/equipment/{id}",
    tag = "equipment",
    security(("admin_pin" = [])),
    params(("id" = String, Path, description = "Equipment ID")),
    request_body = UpdateEquipment,
    responses(
        (status = 200, description = "Equipment updated", body = Equipment),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn update_equipment(
    State(state): State<crate::AppState>,
    _admin: AdminPin,
    Path(id): Path<String>,
    Json(data): Json<UpdateEquipment>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.update(&id, data).await?;
    Ok(Json(equipment))
}

/// Delete equipment
#[utoipa::path(
    delete,
    path = "/equipment/{id}",
    tag = "equipment",
    security(("admin_pin" = [])),
    params(("id" = String, Path, description = "Equipment ID")),
    responses(
        (status = 204, description = "Equipment deleted"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn delete_equipment(
    State(state): State<crate::AppState>,
    _admin: AdminPin,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.equipment.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get the history of an item, newest first
#[utoipa::path(
    get,
    path = "/equipment/{id}/history",
    tag = "equipment",
    params(("id" = String, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "History entries", body = Vec<HistoryEntry>),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn get_history(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<HistoryEntry>>> {
    let history = state.services.equipment.history(&id).await?;
    Ok(Json(history))
}
