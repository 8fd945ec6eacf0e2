// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use bluesky::{CreateRecordResponse, Facet};
use hoarder::{Bookmark, BookmarkContent, Tag};
use linkedin::UgcPostResponse;

use super::{
    BaseBlueskyPoster, BaseBookmarkStore, BaseLinkedInPoster, BasePhrasePicker, ServerDeps,
};
use crate::common::ENGAGING_PHRASES;

/// Bookmark with a fixed title and url, the given summary state, and tags.
pub fn sample_bookmark(summary: Option<&str>, tags: &[&str]) -> Bookmark {
    Bookmark {
        content: BookmarkContent {
            title: Some("Understanding Rust Lifetimes".to_string()),
            url: "https://example.com/rust-lifetimes".to_string(),
            image_url: None,
        },
        summary: summary.map(str::to_string),
        tags: tags
            .iter()
            .map(|name| Tag {
                name: (*name).to_string(),
            })
            .collect(),
    }
}

// =============================================================================
// Mock Bookmark Store
// =============================================================================

pub struct MockBookmarkStore {
    bookmarks: Arc<Mutex<HashMap<String, Bookmark>>>,
    summarize_results: Arc<Mutex<HashMap<String, Bookmark>>>,
    fetch_calls: Arc<Mutex<Vec<String>>>,
    summarize_calls: Arc<Mutex<Vec<String>>>,
    fail_fetch: bool,
    fail_summarize: bool,
}

impl MockBookmarkStore {
    pub fn new() -> Self {
        Self {
            bookmarks: Arc::new(Mutex::new(HashMap::new())),
            summarize_results: Arc::new(Mutex::new(HashMap::new())),
            fetch_calls: Arc::new(Mutex::new(Vec::new())),
            summarize_calls: Arc::new(Mutex::new(Vec::new())),
            fail_fetch: false,
            fail_summarize: false,
        }
    }

    /// Set the bookmark returned by fetch_bookmark for this id
    pub fn with_bookmark(self, bookmark_id: &str, bookmark: Bookmark) -> Self {
        self.bookmarks
            .lock()
            .unwrap()
            .insert(bookmark_id.to_string(), bookmark);
        self
    }

    /// Set the bookmark returned by request_summarization for this id
    pub fn with_summarize_result(self, bookmark_id: &str, bookmark: Bookmark) -> Self {
        self.summarize_results
            .lock()
            .unwrap()
            .insert(bookmark_id.to_string(), bookmark);
        self
    }

    /// Make every fetch_bookmark call fail
    pub fn failing_fetch(mut self) -> Self {
        self.fail_fetch = true;
        self
    }

    /// Make every request_summarization call fail
    pub fn failing_summarize(mut self) -> Self {
        self.fail_summarize = true;
        self
    }

    /// Get all ids passed to fetch_bookmark
    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.lock().unwrap().clone()
    }

    /// Get all ids passed to request_summarization
    pub fn summarize_calls(&self) -> Vec<String> {
        self.summarize_calls.lock().unwrap().clone()
    }
}

impl Default for MockBookmarkStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseBookmarkStore for MockBookmarkStore {
    async fn fetch_bookmark(&self, bookmark_id: &str) -> Result<Bookmark> {
        self.fetch_calls.lock().unwrap().push(bookmark_id.to_string());

        if self.fail_fetch {
            anyhow::bail!("mock fetch failure");
        }

        self.bookmarks
            .lock()
            .unwrap()
            .get(bookmark_id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("bookmark {} not found", bookmark_id))
    }

    async fn request_summarization(&self, bookmark_id: &str) -> Result<Bookmark> {
        self.summarize_calls
            .lock()
            .unwrap()
            .push(bookmark_id.to_string());

        if self.fail_summarize {
            anyhow::bail!("mock summarize failure");
        }

        self.summarize_results
            .lock()
            .unwrap()
            .get(bookmark_id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no summarize result queued for {}", bookmark_id))
    }
}

// =============================================================================
// Mock Platform Posters
// =============================================================================

pub struct MockBlueskyPoster {
    posts: Arc<Mutex<Vec<(String, Vec<Facet>)>>>,
    fail: bool,
}

impl MockBlueskyPoster {
    pub fn new() -> Self {
        Self {
            posts: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// A poster whose publish calls always fail
    pub fn failing() -> Self {
        Self {
            posts: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    /// Get all (text, facets) pairs that were submitted
    pub fn posts(&self) -> Vec<(String, Vec<Facet>)> {
        self.posts.lock().unwrap().clone()
    }

    pub fn post_count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }
}

impl Default for MockBlueskyPoster {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseBlueskyPoster for MockBlueskyPoster {
    async fn publish(&self, text: &str, facets: Vec<Facet>) -> Result<CreateRecordResponse> {
        // Record the attempt even when it is about to fail
        self.posts.lock().unwrap().push((text.to_string(), facets));

        if self.fail {
            anyhow::bail!("mock bluesky failure");
        }

        Ok(CreateRecordResponse {
            uri: "at://did:plc:mock/app.bsky.feed.post/1".to_string(),
            cid: "bafymockcid".to_string(),
        })
    }
}

pub struct MockLinkedInPoster {
    posts: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl MockLinkedInPoster {
    pub fn new() -> Self {
        Self {
            posts: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// A poster whose publish calls always fail
    pub fn failing() -> Self {
        Self {
            posts: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    /// Get all share texts that were submitted
    pub fn posts(&self) -> Vec<String> {
        self.posts.lock().unwrap().clone()
    }
}

impl Default for MockLinkedInPoster {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseLinkedInPoster for MockLinkedInPoster {
    async fn publish(&self, text: &str) -> Result<UgcPostResponse> {
        self.posts.lock().unwrap().push(text.to_string());

        if self.fail {
            anyhow::bail!("mock linkedin failure");
        }

        Ok(UgcPostResponse {
            id: Some("urn:li:share:mock".to_string()),
        })
    }
}

// =============================================================================
// Fixed Phrase Picker
// =============================================================================

/// Always picks the same catalog entry, keeping composed posts deterministic
pub struct FixedPhrasePicker(pub usize);

impl BasePhrasePicker for FixedPhrasePicker {
    fn pick(&self) -> &'static str {
        ENGAGING_PHRASES[self.0 % ENGAGING_PHRASES.len()]
    }
}

// =============================================================================
// TestDependencies Builder
// =============================================================================

/// Builder for assembling ServerDeps entirely out of mocks. Both platforms
/// are configured by default; use the without_* methods to drop one.
#[derive(Clone)]
pub struct TestDependencies {
    pub bookmark_store: Arc<MockBookmarkStore>,
    pub bluesky: Option<Arc<MockBlueskyPoster>>,
    pub linkedin: Option<Arc<MockLinkedInPoster>>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            bookmark_store: Arc::new(MockBookmarkStore::new()),
            bluesky: Some(Arc::new(MockBlueskyPoster::new())),
            linkedin: Some(Arc::new(MockLinkedInPoster::new())),
        }
    }

    /// Set a mock bookmark store
    pub fn mock_store(mut self, store: MockBookmarkStore) -> Self {
        self.bookmark_store = Arc::new(store);
        self
    }

    /// Set a mock Bluesky poster
    pub fn mock_bluesky(mut self, poster: MockBlueskyPoster) -> Self {
        self.bluesky = Some(Arc::new(poster));
        self
    }

    /// Set a mock LinkedIn poster
    pub fn mock_linkedin(mut self, poster: MockLinkedInPoster) -> Self {
        self.linkedin = Some(Arc::new(poster));
        self
    }

    /// Leave Bluesky unconfigured
    pub fn without_bluesky(mut self) -> Self {
        self.bluesky = None;
        self
    }

    /// Leave LinkedIn unconfigured
    pub fn without_linkedin(mut self) -> Self {
        self.linkedin = None;
        self
    }

    /// Convert into ServerDeps for testing
    pub fn into_deps(self) -> ServerDeps {
        let bluesky = self
            .bluesky
            .map(|poster| poster as Arc<dyn BaseBlueskyPoster>);
        let linkedin = self
            .linkedin
            .map(|poster| poster as Arc<dyn BaseLinkedInPoster>);

        ServerDeps::new(self.bookmark_store, bluesky, linkedin)
            .with_phrases(Arc::new(FixedPhrasePicker(0)))
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
