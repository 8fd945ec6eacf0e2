//! Bluesky client for the two XRPC calls the relay makes: the
//! identifier/password session exchange and `createRecord` for feed posts.
//!
//! Facet types live in [`models`] so callers can compute byte-offset
//! annotations against the exact text they submit.

pub mod models;

pub use models::{
    ByteSlice, CreateRecordResponse, Facet, FacetFeature, PostRecord, Session, POST_COLLECTION,
    POST_RECORD_TYPE,
};

use models::{CreateRecordRequest, CreateSessionRequest};
use reqwest::Client;
use thiserror::Error;

/// Public Bluesky XRPC endpoint.
pub const DEFAULT_BASE_URL: &str = "https://bsky.social/xrpc";

#[derive(Debug, Error)]
pub enum BlueskyError {
    #[error("request to Bluesky failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Bluesky authentication failed with status {status}: {body}")]
    Auth {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Bluesky API responded with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

#[derive(Debug, Clone)]
pub struct BlueskyClient {
    base_url: String,
    identifier: String,
    password: String,
    client: Client,
}

impl BlueskyClient {
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            identifier: identifier.into(),
            password: password.into(),
            client: Client::new(),
        }
    }

    /// Point the client at a different XRPC host (self-hosted PDS, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Exchange the configured identifier/password for a session token.
    pub async fn create_session(&self) -> Result<Session, BlueskyError> {
        let url = format!("{}/com.atproto.server.createSession", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&CreateSessionRequest {
                identifier: self.identifier.clone(),
                password: self.password.clone(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BlueskyError::Auth { status, body });
        }

        Ok(response.json().await?)
    }

    /// Create a feed post record in the session owner's repo.
    pub async fn create_post(
        &self,
        session: &Session,
        text: &str,
        facets: Vec<Facet>,
    ) -> Result<CreateRecordResponse, BlueskyError> {
        let url = format!("{}/com.atproto.repo.createRecord", self.base_url);
        let request = CreateRecordRequest {
            repo: session.did.clone(),
            collection: POST_COLLECTION.to_string(),
            record: PostRecord::new(text, facets),
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", session.access_jwt))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BlueskyError::Status { status, body });
        }

        Ok(response.json().await?)
    }
}
