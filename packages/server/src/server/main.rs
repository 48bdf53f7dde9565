// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use genai_client::GenAIClient;
use psyche_core::common::AppState;
use psyche_core::domains::profile::seed::seed_directory;
use psyche_core::kernel::{AppController, BaseAI, DisabledAI, GeminiAI, ServerDeps, StreamHub};
use psyche_core::{server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Pick the assist backend from configuration.
fn build_ai(config: &Config) -> Arc<dyn BaseAI> {
    match &config.gemini_api_key {
        Some(key) => {
            let mut client = GenAIClient::new(key.clone());
            if let Some(base_url) = &config.gemini_base_url {
                client = client.with_base_url(base_url.clone());
            }
            tracing::info!(model = %config.gemini_model, "AI assist enabled");
            Arc::new(GeminiAI::new(client, config.gemini_model.clone()))
        }
        None => {
            tracing::warn!("GEMINI_API_KEY not set, AI assist disabled");
            Arc::new(DisabledAI)
        }
    }
}

fn initial_state(config: &Config) -> AppState {
    if config.seed_data {
        AppState::seeded()
    } else {
        let (authors, profile, _) = seed_directory();
        AppState::new(profile, authors)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,psyche_core=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting PsycheSphere API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    let stream_hub = StreamHub::new();
    let deps = ServerDeps::new(build_ai(&config), stream_hub.clone());

    // Drop topics whose SSE clients have all disconnected
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(60));
        loop {
            interval.tick().await;
            stream_hub.cleanup().await;
        }
    });
    let state = initial_state(&config);
    tracing::info!(
        posts = state.posts.len(),
        authors = state.authors.len(),
        "Store initialized"
    );

    let controller = Arc::new(AppController::new(state, deps));
    let app = build_app(controller, &config.allowed_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("GraphQL endpoint: http://localhost:{}/graphql", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
