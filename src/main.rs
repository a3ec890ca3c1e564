//! College advisor backend for Jammu & Kashmir students.
//!
//! A Rust service that answers college questions through a remote
//! generative model when online and a local record store when offline.

mod api;
mod connectivity;
mod conversation;
mod formatter;
mod llm;
mod profile;
mod resolver;
mod store;

use api::{create_router, AppState};
use connectivity::ConnectivityMonitor;
use llm::{GeminiClient, GeminiConfig};
use resolver::Resolver;
use std::net::SocketAddr;
use std::path::PathBuf;
use store::RecordStore;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "college_advisor=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let db_path = std::env::var("ADVISOR_DB_PATH").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
        format!("{home}/.college-advisor/colleges.db")
    });

    let port: u16 = std::env::var("ADVISOR_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    // Ensure database directory exists
    if let Some(parent) = PathBuf::from(&db_path).parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Initialize record store and seed it on first launch
    tracing::info!(path = %db_path, "Opening record store");
    let store = RecordStore::open(&db_path)?;
    store.ensure_seeded(store::BUNDLED_DATASET)?;

    // Initialize remote model client
    let gemini_config = GeminiConfig::from_env();
    if gemini_config.api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY not set. Online answers will fail until it is configured.");
    }
    let gemini = GeminiClient::new(
        gemini_config.api_key.unwrap_or_default(),
        gemini_config.endpoint.as_deref(),
    );

    // Create application state
    let resolver = Resolver::new(gemini, store);
    let state = AppState::new(resolver, ConnectivityMonitor::new(true));

    // Create router
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("College advisor server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
