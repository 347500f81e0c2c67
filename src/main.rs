use mover_api::{config::AppConfig, create_router, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("Mover API - Starting...");

    let config = AppConfig::from_env().expect("Invalid configuration");
    tracing::debug!("Loaded configuration: {:?}", config);

    let state = AppState::from_config(&config);
    tracing::info!(
        "Store initialised with {} movers (creation policy: {:?})",
        state.mover_service.count().await,
        config.creation_policy
    );

    let app = create_router(state);

    let addr = config.bind_address();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Mover API is running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await.expect("Server error");
}
