//! System catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        equipment::Equipment,
        system::{CreateSystem, SystemColor, SystemSummary},
    },
};

use super::AdminPin;

/// List systems with membership counts
#[utoipa::path(
    get,
    path = "/systems",
    tag = "systems",
    responses(
        (status = 200, description = "System list", body = Vec<SystemSummary>)
    )
)]
pub async fn list_systems(State(state): State<crate::AppState>) -> Json<Vec<SystemSummary>> {
    Json(state.services.systems.list().await)
}

/// Create a system
#[utoipa::path(
    post,
    path = "/systems",
    tag = "systems",
    security(("admin_pin" = [])),
    request_body = CreateSystem,
    responses(
        (status = 201, description = "System created", body = SystemColor),
        (status = 409, description = "System already exists")
    )
)]
pub async fn create_system(
    State(state): State<crate::AppState>,
    _admin: AdminPin,
    Json(data): Json<CreateSystem>,
) -> AppResult<(StatusCode, Json<SystemColor>)> {
    let system = state.services.systems.create(data).await?;
    Ok((StatusCode::CREATED, Json(system)))
}

/// Delete a system
#[utoipa::path(
    delete,
    path = "/systems/{name}",
    tag = "systems",
    security(("admin_pin" = [])),
    params(("name" = String, Path, description = "System name")),
    responses(
        (status = 204, description = "System deleted"),
        (status = 404, description = "System not found")
    )
)]
pub async fn delete_system(
    State(state): State<crate::AppState>,
    _admin: AdminPin,
    Path(name): Path<String>,
) -> AppResult<StatusCode> {
    state.services.systems.delete(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Items tagged with a system
#[utoipa::path(
    get,
    path = "/systems/{name}/equipment",
    tag = "systems",
    params(("name" = String, Path, description = "System name")),
    responses(
        (status = 200, description = "Tagged items", body = Vec<Equipment>)
    )
)]
pub async fn list_members(
    State(state): State<crate::AppState>,
    Path(name): Path<String>,
) -> Json<Vec<Equipment>> {
    Json(state.services.systems.members(&name).await)
}
