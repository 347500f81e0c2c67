pub mod config;
pub mod error;
pub mod movers;
pub mod validation;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use config::AppConfig;
use movers::{
    seed, CreateMoverRequest, MessageResponse, MoverResponse, MoverService, MoverStore,
    ReviewRequest,
};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        movers::handlers::list_movers,
        movers::handlers::create_mover,
        movers::handlers::delete_mover,
        movers::handlers::review_mover,
    ),
    components(
        schemas(MoverResponse, CreateMoverRequest, ReviewRequest, MessageResponse)
    ),
    tags(
        (name = "movers", description = "Moving company listing and ratings")
    ),
    info(
        title = "Mover API",
        version = "0.1.0",
        description = "Ranked listing of moving companies with running-average ratings"
    )
)]
pub struct ApiDoc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub mover_service: MoverService,
}

impl AppState {
    /// Build state from configuration, seeding the store if requested
    pub fn from_config(config: &AppConfig) -> Self {
        let store = if config.seed_movers {
            MoverStore::with_movers(seed::default_movers())
        } else {
            MoverStore::new()
        };

        Self {
            mover_service: MoverService::new(store, config.creation_policy),
        }
    }
}

/// Creates and configures the application router
/// Maps all API endpoints to their handlers and adds tracing and CORS middleware
pub fn create_router(state: AppState) -> Router {
    // Configure CORS to allow all origins, methods, and headers
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/movers", get(movers::list_movers).post(movers::create_mover))
        .route("/movers/:id", delete(movers::delete_mover))
        .route("/movers/:id/review", post(movers::review_mover))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
