//! Server dependencies (using traits for testability)
//!
//! Central dependency container handed to the webhook pipeline. All remote
//! services sit behind trait abstractions so tests can swap them out.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use bluesky::{BlueskyClient, CreateRecordResponse, Facet};
use hoarder::{Bookmark, HoarderClient};
use linkedin::{LinkedInClient, UgcPostResponse};

use crate::common::RandomPhrasePicker;
use crate::domains::bookmarks::LifecycleTracker;
use crate::kernel::{BaseBlueskyPoster, BaseBookmarkStore, BaseLinkedInPoster, BasePhrasePicker};

// =============================================================================
// HoarderClient Adapter (implements BaseBookmarkStore trait)
// =============================================================================

/// Wrapper around HoarderClient that implements the BaseBookmarkStore trait
pub struct HoarderAdapter(pub Arc<HoarderClient>);

impl HoarderAdapter {
    pub fn new(client: Arc<HoarderClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseBookmarkStore for HoarderAdapter {
    async fn fetch_bookmark(&self, bookmark_id: &str) -> Result<Bookmark> {
        Ok(self.0.fetch_bookmark(bookmark_id).await?)
    }

    async fn request_summarization(&self, bookmark_id: &str) -> Result<Bookmark> {
        Ok(self.0.request_summarization(bookmark_id).await?)
    }
}

// =============================================================================
// Platform Poster Adapters
// =============================================================================

/// Wrapper around BlueskyClient that implements the BaseBlueskyPoster trait.
/// Bluesky sessions are short-lived, so authentication happens per publish.
pub struct BlueskyAdapter(pub Arc<BlueskyClient>);

impl BlueskyAdapter {
    pub fn new(client: Arc<BlueskyClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseBlueskyPoster for BlueskyAdapter {
    async fn publish(&self, text: &str, facets: Vec<Facet>) -> Result<CreateRecordResponse> {
        let session = self.0.create_session().await?;
        tracing::info!("Successfully authenticated with Bluesky");
        Ok(self.0.create_post(&session, text, facets).await?)
    }
}

/// Wrapper around LinkedInClient that implements the BaseLinkedInPoster trait
pub struct LinkedInAdapter(pub Arc<LinkedInClient>);

impl LinkedInAdapter {
    pub fn new(client: Arc<LinkedInClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseLinkedInPoster for LinkedInAdapter {
    async fn publish(&self, text: &str) -> Result<UgcPostResponse> {
        Ok(self.0.create_share(text).await?)
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to every webhook event handler
#[derive(Clone)]
pub struct ServerDeps {
    /// In-memory lifecycle state shared across all deliveries
    pub tracker: Arc<LifecycleTracker>,
    pub bookmark_store: Arc<dyn BaseBookmarkStore>,
    /// Present only when Bluesky credentials were configured
    pub bluesky: Option<Arc<dyn BaseBlueskyPoster>>,
    /// Present only when LinkedIn credentials were configured
    pub linkedin: Option<Arc<dyn BaseLinkedInPoster>>,
    pub phrases: Arc<dyn BasePhrasePicker>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        bookmark_store: Arc<dyn BaseBookmarkStore>,
        bluesky: Option<Arc<dyn BaseBlueskyPoster>>,
        linkedin: Option<Arc<dyn BaseLinkedInPoster>>,
    ) -> Self {
        Self {
            tracker: Arc::new(LifecycleTracker::new()),
            bookmark_store,
            bluesky,
            linkedin,
            phrases: Arc::new(RandomPhrasePicker),
        }
    }

    /// Replace the phrase picker (used by tests for determinism)
    pub fn with_phrases(mut self, phrases: Arc<dyn BasePhrasePicker>) -> Self {
        self.phrases = phrases;
        self
    }
}
