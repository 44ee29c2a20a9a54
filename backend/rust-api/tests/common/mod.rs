use axum::Router;
use std::sync::Arc;
use thermoscale_api::{config::Config, create_router, services::AppState};

pub async fn create_test_app() -> Router {
    // Initialize tracing for tests
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    // Load test environment overrides if present
    dotenvy::from_filename(".env.test").ok();

    let config = Config::load().expect("Failed to load test configuration");

    // State is in-memory; every test app starts with an empty session store
    let app_state = Arc::new(AppState::new(config));

    create_router(app_state)
}
