//! Check-out / check-in endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{
        checkout::{
            CheckInRequest, CheckOutRequest, RepairRequest, SystemCheckoutReport,
            SystemCheckoutRequest, WorkOrderCheckInRequest,
        },
        equipment::Equipment,
        report::BulkReport,
    },
};

use super::AdminPin;

/// Check out an available item
#[utoipa::path(
    post,
    path = "/equipment/{id}/check-out",
    tag = "lifecycle",
    params(("id" = String, Path, description = "Equipment ID")),
    request_body = CheckOutRequest,
    responses(
        (status = 200, description = "Equipment checked out", body = Equipment),
        (status = 404, description = "Equipment not found"),
        (status = 422, description = "Equipment is not available")
    )
)]
pub async fn check_out(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(request): Json<CheckOutRequest>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.lifecycle.check_out(&id, &request).await?;
    Ok(Json(equipment))
}

/// Check in a checked-out item
#[utoipa::path(
    post,
    path = "/equipment/{id}/check-in",
    tag = "lifecycle",
    params(("id" = String, Path, description = "Equipment ID")),
    request_body = CheckInRequest,
    responses(
        (status = 200, description = "Equipment checked in", body = Equipment),
        (status = 404, description = "Equipment not found"),
        (status = 422, description = "Equipment is not checked out")
    )
)]
pub async fn check_in(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(request): Json<CheckInRequest>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.lifecycle.check_in(&id, request).await?;
    Ok(Json(equipment))
}

/// Return a broken item to service
#[utoipa::path(
    post,
    path = "/equipment/{id}/repair",
    tag = "lifecycle",
    security(("admin_pin" = [])),
    params(("id" = String, Path, description = "Equipment ID")),
    request_body = RepairRequest,
    responses(
        (status = 200, description = "Equipment repaired", body = Equipment),
        (status = 403, description = "Invalid admin PIN"),
        (status = 422, description = "Equipment is not broken")
    )
)]
pub async fn repair(
    State(state): State<crate::AppState>,
    _admin: AdminPin,
    Path(id): Path<String>,
    Json(request): Json<RepairRequest>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.lifecycle.repair(&id, request.notes).await?;
    Ok(Json(equipment))
}

/// Available replacements for an item in a system checkout
#[utoipa::path(
    get,
    path = "/equipment/{id}/replacements",
    tag = "lifecycle",
    params(("id" = String, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Same-category available items", body = Vec<Equipment>),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn list_replacements(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Equipment>>> {
    let candidates = state.services.lifecycle.replacement_candidates(&id).await?;
    Ok(Json(candidates))
}

/// Check out a whole system, with optional swaps
#[utoipa::path(
    post,
    path = "/systems/{name}/check-out",
    tag = "lifecycle",
    params(("name" = String, Path, description = "System color")),
    request_body = SystemCheckoutRequest,
    responses(
        (status = 200, description = "Per-item outcome", body = SystemCheckoutReport),
        (status = 400, description = "Missing work order, holder or items")
    )
)]
pub async fn check_out_system(
    State(state): State<crate::AppState>,
    Path(name): Path<String>,
    Json(request): Json<SystemCheckoutRequest>,
) -> AppResult<Json<SystemCheckoutReport>> {
    let report = state
        .services
        .lifecycle
        .check_out_system_with_swaps(&name, &request)
        .await?;
    Ok(Json(report))
}

/// Items currently out under a work order
#[utoipa::path(
    get,
    path = "/work-orders/{work_order}",
    tag = "lifecycle",
    params(("work_order" = String, Path, description = "Work order reference")),
    responses(
        (status = 200, description = "Checked-out items", body = Vec<Equipment>),
        (status = 404, description = "Nothing out under this work order")
    )
)]
pub async fn list_work_order(
    State(state): State<crate::AppState>,
    Path(work_order): Path<String>,
) -> AppResult<Json<Vec<Equipment>>> {
    let items = state.services.lifecycle.list_by_work_order(&work_order).await?;
    Ok(Json(items))
}

/// Check in everything out under a work order
#[utoipa::path(
    post,
    path = "/work-orders/{work_order}/check-in",
    tag = "lifecycle",
    params(("work_order" = String, Path, description = "Work order reference")),
    request_body = WorkOrderCheckInRequest,
    responses(
        (status = 200, description = "Per-item outcome", body = BulkReport),
        (status = 404, description = "Nothing out under this work order")
    )
)]
pub async fn check_in_work_order(
    State(state): State<crate::AppState>,
    Path(work_order): Path<String>,
    Json(request): Json<WorkOrderCheckInRequest>,
) -> AppResult<Json<BulkReport>> {
    let report = state
        .services
        .lifecycle
        .check_in_by_work_order(&work_order, request.reports)
        .await?;
    Ok(Json(report))
}
