// Main entry point for the webhook relay server

use std::sync::Arc;

use anyhow::{Context, Result};
use bluesky::BlueskyClient;
use hoarder::HoarderClient;
use linkedin::LinkedInClient;
use server_core::kernel::{
    BaseBlueskyPoster, BaseLinkedInPoster, BlueskyAdapter, HoarderAdapter, LinkedInAdapter,
    ServerDeps,
};
use server_core::server::build_app;
use server_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Hoarder social relay");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    let bookmark_store = Arc::new(HoarderAdapter::new(Arc::new(HoarderClient::new(
        config.hoarder_api_base_url.clone(),
        config.hoarder_api_token.clone(),
    ))));

    let bluesky: Option<Arc<dyn BaseBlueskyPoster>> = match config.bluesky_credentials() {
        Some((username, password)) => {
            tracing::info!("Bluesky posting enabled");
            Some(Arc::new(BlueskyAdapter::new(Arc::new(BlueskyClient::new(
                username, password,
            )))))
        }
        None => {
            tracing::info!("Bluesky posting is not configured");
            None
        }
    };

    let linkedin: Option<Arc<dyn BaseLinkedInPoster>> = match config.linkedin_credentials() {
        Some((access_token, author_urn)) => {
            tracing::info!("LinkedIn posting enabled");
            Some(Arc::new(LinkedInAdapter::new(Arc::new(
                LinkedInClient::new(access_token, author_urn),
            ))))
        }
        None => {
            tracing::info!("LinkedIn posting is not configured");
            None
        }
    };

    let deps = Arc::new(ServerDeps::new(bookmark_store, bluesky, linkedin));

    // Build application
    let app = build_app(deps);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Webhook server listening on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
