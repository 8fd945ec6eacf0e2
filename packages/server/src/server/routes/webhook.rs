//! Inbound webhook endpoint.

use axum::{body::Bytes, extract::Extension, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::domains::bookmarks::process_webhook;
use crate::server::app::AppState;

/// Payload delivered by the Hoarder webhook
#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    #[serde(rename = "bookmarkId")]
    pub bookmark_id: String,
    pub operation: String,
}

#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Handle one webhook delivery.
///
/// The body is parsed by hand rather than through the `Json` extractor:
/// a malformed body must come back as a 500 `{success: false}` envelope,
/// where the extractor would reject with a 4xx before the handler runs.
/// Known operations are always acknowledged with `{success: true}`;
/// processing failures are logged so the sender never retries a delivery
/// that was received intact.
pub async fn webhook_handler(
    Extension(state): Extension<AppState>,
    body: Bytes,
) -> (StatusCode, Json<WebhookResponse>) {
    let payload: WebhookPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::error!(error = %e, "Error processing webhook");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(WebhookResponse {
                    success: false,
                    error: Some(e.to_string()),
                }),
            );
        }
    };

    tracing::info!(
        bookmark_id = %payload.bookmark_id,
        operation = %payload.operation,
        "Received webhook"
    );

    if let Err(e) = process_webhook(&state.deps, &payload.bookmark_id, &payload.operation).await {
        tracing::error!(
            bookmark_id = %payload.bookmark_id,
            operation = %payload.operation,
            error = %e,
            "Failed to process webhook event"
        );
    }

    (
        StatusCode::OK,
        Json(WebhookResponse {
            success: true,
            error: None,
        }),
    )
}
