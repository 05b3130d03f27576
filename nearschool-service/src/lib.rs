//! nearschool Service Library
//!
//! HTTP handlers, router and configuration for the school listing service.
//! This library is used by both the nearschool-service binary and integration tests.

pub mod config;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use nearschool::SchoolStore;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across handlers.
pub struct AppState {
    /// Record store that handlers insert into and list from.
    pub store: Arc<dyn SchoolStore>,
    /// Reject coordinates outside their geographic range.
    pub strict_coordinates: bool,
}

impl AppState {
    /// Create state around a store, with range checks disabled.
    pub fn new(store: Arc<dyn SchoolStore>) -> Self {
        Self {
            store,
            strict_coordinates: false,
        }
    }

    /// Enable or disable geographic range checks.
    pub fn strict_coordinates(mut self, strict: bool) -> Self {
        self.strict_coordinates = strict;
        self
    }
}

/// OpenAPI documentation for the nearschool service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "nearschool Service",
        version = "0.1.0",
        description = "Stores schools and lists them by great-circle distance from a reference point.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        handlers::add_school,
        handlers::list_schools,
        handlers::health_check,
    ),
    components(
        schemas(
            handlers::AddSchoolRequest,
            handlers::AddSchoolResponse,
            handlers::RankedSchoolResponse,
            handlers::ErrorResponse,
            handlers::HealthResponse,
        )
    ),
    tags(
        (name = "schools", description = "School creation and proximity listing"),
        (name = "system", description = "System and health endpoints")
    )
)]
pub struct ApiDoc;

/// Build the service router with tracing, permissive CORS and Swagger UI.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(handlers::home))
        .route("/addSchool", post(handlers::add_school))
        .route("/listSchools", get(handlers::list_schools))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

// Re-export commonly used types for convenience
pub use config::{ServiceConfig, StoreKind};
pub use error::ApiError;
pub use handlers::{
    AddSchoolRequest, AddSchoolResponse, ErrorResponse, HealthResponse, ListSchoolsQuery,
    RankedSchoolResponse,
};
