//! Hoarder bookmark store client.
//!
//! Thin reqwest wrapper over the two endpoints the relay needs: fetching a
//! bookmark by id and requesting AI summarization for it. Both endpoints
//! use bearer-token auth and return the bookmark JSON.

pub mod models;

pub use models::{Bookmark, BookmarkContent, Tag};

use reqwest::Client;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HoarderError {
    #[error("request to Hoarder failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Hoarder API responded with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

#[derive(Debug, Clone)]
pub struct HoarderClient {
    base_url: String,
    api_token: String,
    client: Client,
}

impl HoarderClient {
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token: api_token.into(),
            client: Client::new(),
        }
    }

    /// Fetch a bookmark by id.
    pub async fn fetch_bookmark(&self, bookmark_id: &str) -> Result<Bookmark, HoarderError> {
        let url = format!("{}/bookmarks/{}", self.base_url, bookmark_id);
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_token))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(HoarderError::Status { status, body });
        }

        Ok(response.json().await?)
    }

    /// Trigger AI summarization for a bookmark. Returns the updated
    /// bookmark, which may already carry the new summary.
    pub async fn request_summarization(&self, bookmark_id: &str) -> Result<Bookmark, HoarderError> {
        let url = format!("{}/bookmarks/{}/summarize", self.base_url, bookmark_id);
        let response = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_token))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(HoarderError::Status { status, body });
        }

        Ok(response.json().await?)
    }
}
