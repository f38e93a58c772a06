//! Scanner endpoint

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::scan::{ScanRequest, ScanResolution},
};

/// Resolve a scanned label
#[utoipa::path(
    post,
    path = "/scan",
    tag = "scan",
    request_body = ScanRequest,
    responses(
        (status = 200, description = "Registered item or create draft", body = ScanResolution),
        (status = 400, description = "Unreadable payload")
    )
)]
pub async fn resolve_scan(
    State(state): State<crate::AppState>,
    Json(request): Json<ScanRequest>,
) -> AppResult<Json<ScanResolution>> {
    let resolution = state.services.scan.resolve(&request.code).await?;
    Ok(Json(resolution))
}
