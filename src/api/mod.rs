//! API handlers for the equipment tracker REST endpoints

pub mod equipment;
pub mod health;
pub mod lifecycle;
pub mod openapi;
pub mod scan;
pub mod systems;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// Header carrying the local admin PIN
pub const ADMIN_PIN_HEADER: &str = "x-admin-pin";

/// Extractor gating admin-only routes behind the configured PIN
///
/// When no PIN is configured every request passes.
pub struct AdminPin;

#[async_trait]
impl FromRequestParts<AppState> for AdminPin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.config.tracker.admin_pin.as_deref() else {
            return Ok(AdminPin);
        };

        let provided = parts
            .headers
            .get(ADMIN_PIN_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authorization("Admin PIN required".to_string()))?;

        if provided != expected {
            tracing::warn!("Rejected admin request with wrong PIN");
            return Err(AppError::Authorization("Invalid admin PIN".to_string()));
        }

        Ok(AdminPin)
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Equipment registry
        .route("/equipment", get(equipment::list_equipment).post(equipment::create_equipment))
        .route("/equipment/import", post(equipment::import_equipment))
        .route(
            "/equipment/:id",
            get(equipment::get_equipment)
                .put(equipment::update_equipment)
                .delete(equipment::delete_equipment),
        )
        .route("/equipment/:id/history", get(equipment::get_history))
        .route("/equipment/:id/replacements", get(lifecycle::list_replacements))
        // Lifecycle
        .route("/equipment/:id/check-out", post(lifecycle::check_out))
        .route("/equipment/:id/check-in", post(lifecycle::check_in))
        .route("/equipment/:id/repair", post(lifecycle::repair))
        .route("/work-orders/:work_order", get(lifecycle::list_work_order))
        .route("/work-orders/:work_order/check-in", post(lifecycle::check_in_work_order))
        // Systems
        .route("/systems", get(systems::list_systems).post(systems::create_system))
        .route("/systems/:name", axum::routing::delete(systems::delete_system))
        .route("/systems/:name/equipment", get(systems::list_members))
        .route("/systems/:name/check-out", post(lifecycle::check_out_system))
        // Scanner
        .route("/scan", post(scan::resolve_scan))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
