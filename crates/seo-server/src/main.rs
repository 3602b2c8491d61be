//! trueviral HTTP Server
//!
//! Axum-based server for the marketing site and the SEO suggestion API.

mod handlers;
mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seo_core::{CompletionProvider, SuggestionGenerator};
use seo_runtime::{GenerationOptions, OpenAiProvider};

use crate::handlers::{health_check, suggest_handler};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // Initialize LLM provider; a missing API key aborts startup here
    let provider = Arc::new(OpenAiProvider::from_env()?);
    let model = provider.model().to_string();

    match provider.health_check().await {
        Ok(true) => tracing::info!("✓ OpenAI API reachable (model: {})", model),
        Ok(false) | Err(_) => {
            tracing::warn!("⚠ OpenAI API not reachable - suggestions will fail");
            tracing::warn!("  Check OPENAI_API_KEY and network connectivity");
        }
    }

    // Build the suggestion engine (1h cache, [1s, 2s, 4s] retry schedule)
    let generator = SuggestionGenerator::new(provider).with_options(GenerationOptions {
        model,
        ..Default::default()
    });

    let state = AppState {
        generator: Arc::new(generator),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/seo/suggest", post(suggest_handler))
        // Static files (WASM frontend)
        .nest_service("/", tower_http::services::ServeDir::new("static"))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("trueviral server running on http://{}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health           - Health check");
    tracing::info!("  POST /api/seo/suggest  - Generate SEO suggestions");

    axum::serve(listener, app).await?;

    Ok(())
}
