//! OpenAPI documentation

use axum::Router;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{ai, bookings, chemicals, equipment, health, locations, orders};

/// Registers the session cookie used by every protected endpoint
struct SessionCookieAddon;

impl Modify for SessionCookieAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "session_cookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "labstock_session",
                "Session cookie issued by POST /login.",
            ))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SessionCookieAddon),
    info(
        title = "LabStock API",
        version = "0.3.0",
        description = "Laboratory inventory: chemicals, equipment, bookings and purchase orders"
    ),
    servers(
        (url = "/api", description = "JSON API")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Chemicals
        chemicals::list_chemicals,
        chemicals::get_chemical,
        chemicals::save_chemical,
        chemicals::delete_chemical,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::save_equipment,
        equipment::delete_equipment,
        // Locations
        locations::list_locations,
        // Bookings
        bookings::list_bookings,
        bookings::create_booking,
        bookings::delete_booking,
        // Orders
        orders::list_orders,
        orders::create_order,
        orders::update_order,
        orders::delete_order,
        // AI
        ai::ai_lookup,
        ai::check_hazards,
        ai::ai_search,
    ),
    components(
        schemas(
            crate::models::chemical::Chemical,
            crate::models::chemical::SaveChemical,
            crate::models::equipment::Equipment,
            crate::models::equipment::SaveEquipment,
            crate::models::location::Location,
            crate::models::booking::Booking,
            crate::models::booking::CreateBooking,
            crate::models::purchase_order::PurchaseOrder,
            crate::models::purchase_order::CreatePurchaseOrder,
            crate::models::purchase_order::UpdatePurchaseOrder,
            crate::models::ai::AiQuery,
            crate::models::ai::ChemicalLookup,
            crate::models::ai::Severity,
            crate::models::ai::Hazard,
            crate::models::ai::HazardReport,
            crate::models::ai::SearchMatches,
            crate::models::MessageResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "chemicals", description = "Chemical inventory"),
        (name = "equipment", description = "Equipment inventory"),
        (name = "locations", description = "Storage locations"),
        (name = "bookings", description = "Shared resource bookings"),
        (name = "orders", description = "Purchase orders"),
        (name = "ai", description = "AI-assisted lookup, hazard scan and search")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_routes_and_cookie_scheme() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/chemicals"));
        assert!(doc.paths.paths.contains_key("/orders/{id}"));
        assert!(doc.paths.paths.contains_key("/check-hazards"));

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            json["components"]["securitySchemes"]["session_cookie"]["in"],
            "cookie"
        );
    }
}
