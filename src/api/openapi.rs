//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, records};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        version = "1.0.0",
        description = "Book catalog record REST API"
    ),
    paths(
        // Health
        health::root,
        health::health_check,
        health::readiness_check,
        // Records
        records::list_records,
        records::get_record,
        records::create_record,
        records::update_record,
        records::delete_record,
    ),
    components(
        schemas(
            // Records
            crate::models::record::Record,
            crate::models::record::CreateRecord,
            crate::models::record::UpdateRecord,
            // Health
            health::HealthResponse,
            health::WelcomeResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "records", description = "Book record management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
