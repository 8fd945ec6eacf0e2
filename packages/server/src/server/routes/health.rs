use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    tracked_bookmarks: usize,
    bluesky_configured: bool,
    linkedin_configured: bool,
}

/// Health check endpoint
///
/// The relay holds no persistent connections to probe, so this reports
/// process liveness, how many bookmarks are mid-lifecycle, and which
/// platforms are enabled.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        tracked_bookmarks: state.deps.tracker.tracked_count(),
        bluesky_configured: state.deps.bluesky.is_some(),
        linkedin_configured: state.deps.linkedin.is_some(),
    })
}
