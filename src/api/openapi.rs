//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{equipment, health, lifecycle, scan, systems, ADMIN_PIN_HEADER};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Equipment Tracker API",
        version = "1.0.0",
        description = "Equipment check-out / check-in REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::import_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        equipment::get_history,
        // Lifecycle
        lifecycle::check_out,
        lifecycle::check_in,
        lifecycle::repair,
        lifecycle::list_replacements,
        lifecycle::check_out_system,
        lifecycle::list_work_order,
        lifecycle::check_in_work_order,
        // Systems
        systems::list_systems,
        systems::create_system,
        systems::delete_system,
        systems::list_members,
        // Scan
        scan::resolve_scan,
    ),
    components(
        schemas(
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::EquipmentStatus,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            crate::models::history::HistoryEntry,
            crate::models::history::HistoryAction,
            crate::models::report::BulkReport,
            crate::models::report::ItemFailure,
            // Lifecycle
            crate::models::checkout::CheckOutRequest,
            crate::models::checkout::CheckInRequest,
            crate::models::checkout::RepairRequest,
            crate::models::checkout::SystemCheckoutRequest,
            crate::models::checkout::SystemCheckoutReport,
            crate::models::checkout::WorkOrderCheckInRequest,
            // Systems
            crate::models::system::SystemColor,
            crate::models::system::SystemSummary,
            crate::models::system::CreateSystem,
            crate::models::system::SlotSelection,
            crate::models::system::SlotOutcome,
            // Scan
            crate::models::scan::ScanRequest,
            crate::models::scan::ScanResolution,
            // Health
            health::HealthResponse,
            health::ReadinessResponse,
            crate::models::equipment::StatusCounts,
            // Errors
            crate::error::ErrorResponse,
            crate::error::ErrorCode,
        )
    ),
    modifiers(&AdminPinAddon),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Equipment registry"),
        (name = "lifecycle", description = "Check-out, check-in and repair"),
        (name = "systems", description = "Color-coded systems"),
        (name = "scan", description = "Scanner lookups")
    )
)]
pub struct ApiDoc;

struct AdminPinAddon;

impl Modify for AdminPinAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "admin_pin",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(ADMIN_PIN_HEADER))),
            );
        }
    }
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
