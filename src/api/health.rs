//! Health check endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{models::equipment::StatusCounts, AppState};

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Serialize, ToSchema)]
pub struct ReadinessResponse {
    pub status: String,
    /// Equipment totals by status
    pub equipment: StatusCounts,
    /// Systems in the catalog
    pub systems: usize,
}

/// Readiness check endpoint, reporting what the registry holds
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready", body = ReadinessResponse)
    )
)]
pub async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let equipment = state.services.equipment.status_counts().await;
    let systems = state.services.systems.list().await.len();
    Json(ReadinessResponse {
        status: "ready".to_string(),
        equipment,
        systems,
    })
}
