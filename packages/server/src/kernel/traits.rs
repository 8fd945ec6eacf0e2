// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "decide whether to publish") should be domain
// functions that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseBookmarkStore)

use anyhow::Result;
use async_trait::async_trait;

use bluesky::{CreateRecordResponse, Facet};
use hoarder::Bookmark;
use linkedin::UgcPostResponse;

// =============================================================================
// Bookmark Store Trait (Infrastructure - the Hoarder instance)
// =============================================================================

#[async_trait]
pub trait BaseBookmarkStore: Send + Sync {
    /// Fetch the current state of a bookmark by id
    async fn fetch_bookmark(&self, bookmark_id: &str) -> Result<Bookmark>;

    /// Ask the store to run AI summarization for a bookmark.
    /// Returns the bookmark as of the response, which may already carry
    /// the new summary.
    async fn request_summarization(&self, bookmark_id: &str) -> Result<Bookmark>;
}

// =============================================================================
// Platform Poster Traits (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseBlueskyPoster: Send + Sync {
    /// Create a feed post carrying the given text and rich-text facets
    async fn publish(&self, text: &str, facets: Vec<Facet>) -> Result<CreateRecordResponse>;
}

#[async_trait]
pub trait BaseLinkedInPoster: Send + Sync {
    /// Create a public text share
    async fn publish(&self, text: &str) -> Result<UgcPostResponse>;
}

// =============================================================================
// Phrase Picker Trait (Infrastructure)
// =============================================================================

/// Source of the engaging phrase that opens a post. Production picks
/// uniformly at random; tests inject a fixed picker so composed posts
/// are deterministic.
pub trait BasePhrasePicker: Send + Sync {
    fn pick(&self) -> &'static str;
}
