//! Weather Type Classifier - Backend Server
//!
//! Collects meteorological readings, encodes them into the classifier's
//! fixed feature vector, and serves the predicted weather type.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod handlers;
mod model;
mod routes;
mod services;

pub use config::Config;
pub use model::{ModelArtifact, WeatherModel};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// The loaded classifier. Loaded once at startup, immutable afterwards.
    pub model: Arc<dyn WeatherModel>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wtc_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Weather Type Classifier Server");
    tracing::info!("Environment: {}", config.environment);

    // Load the model artifact. A missing or schema-incompatible artifact
    // is a startup precondition failure, not a degraded mode.
    tracing::info!("Loading model artifact from {}", config.model.artifact_path);
    let artifact = ModelArtifact::load(&config.model.artifact_path)?;
    tracing::info!(
        "Model loaded (schema v{}, {} features)",
        shared::SCHEMA_VERSION,
        shared::FEATURE_COUNT
    );

    // Create application state
    let state = AppState {
        model: Arc::new(artifact),
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Weather Type Classifier API v1.0"
}
