//! LinkedIn UGC posts client.
//!
//! Covers the single call the relay needs: creating a public text share on
//! behalf of a member, using a static bearer token (no session handshake).

pub mod models;

pub use models::{UgcPostRequest, UgcPostResponse};

use reqwest::Client;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.linkedin.com";

/// Versioned-API headers LinkedIn requires on UGC calls.
const LINKEDIN_VERSION: &str = "202210";
const RESTLI_PROTOCOL_VERSION: &str = "2.0.0";

#[derive(Debug, Error)]
pub enum LinkedInError {
    #[error("request to LinkedIn failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("LinkedIn API responded with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

#[derive(Debug, Clone)]
pub struct LinkedInClient {
    base_url: String,
    access_token: String,
    author_urn: String,
    client: Client,
}

impl LinkedInClient {
    pub fn new(access_token: impl Into<String>, author_urn: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: access_token.into(),
            author_urn: author_urn.into(),
            client: Client::new(),
        }
    }

    /// Point the client at a different API host (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Publish a public text share as the configured member.
    pub async fn create_share(&self, text: &str) -> Result<UgcPostResponse, LinkedInError> {
        let url = format!("{}/v2/ugcPosts", self.base_url);
        let payload = UgcPostRequest::text_share(&self.author_urn, text);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.access_token))
            .header("LinkedIn-Version", LINKEDIN_VERSION)
            .header("X-Restli-Protocol-Version", RESTLI_PROTOCOL_VERSION)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LinkedInError::Status { status, body });
        }

        Ok(response.json().await?)
    }
}
